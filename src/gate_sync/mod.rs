//! Bridge running the engine-free [`HealthGate`](crate::HealthGate) inside
//! Bevy ECS.
//!
//! The host activation flag maps onto Bevy's entity disabling: an entity is
//! active while it has no
//! [`Disabled`](bevy::ecs::entity_disabling::Disabled) component.

mod plugin;
mod systems;
mod world_access;

pub use plugin::{HealthGatePlugin, HealthGateSet};
pub use systems::check_death_system;
pub use world_access::{check_death_now, is_active, GateError};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_is_default_constructible() {
        let _: HealthGatePlugin = HealthGatePlugin;
    }
}
