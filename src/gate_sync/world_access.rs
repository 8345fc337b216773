//! On-demand gate checks against a [`World`].
//!
//! These bypass the schedule, so they also reach entities that are already
//! disabled. That keeps a repeated check on a dead entity a harmless no-op.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;
use thiserror::Error;

use crate::activation::Activation;
use crate::components::Health;
use crate::health_gate::HealthGate;

/// Lookup failures raised when addressing an entity from outside the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    /// The entity does not exist in the world.
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),
    /// The entity exists but carries no [`Health`] component.
    #[error("entity {0:?} has no Health component")]
    MissingHealth(Entity),
}

/// Activation adapter writing directly to an entity in the world.
struct WorldActivation<'w> {
    entity: EntityWorldMut<'w>,
}

impl Activation for WorldActivation<'_> {
    fn is_active(&self) -> bool {
        !self.entity.contains::<Disabled>()
    }

    fn set_active(&mut self, active: bool) {
        if active {
            self.entity.remove::<Disabled>();
        } else {
            self.entity.insert(Disabled);
        }
    }
}

/// Runs the death check for `entity` immediately.
///
/// # Errors
/// Returns [`GateError::NoSuchEntity`] if the entity is gone and
/// [`GateError::MissingHealth`] if it has no [`Health`].
pub fn check_death_now(world: &mut World, entity: Entity) -> Result<(), GateError> {
    let entity_mut = world
        .get_entity_mut(entity)
        .map_err(|_| GateError::NoSuchEntity(entity))?;
    let health = entity_mut
        .get::<Health>()
        .copied()
        .ok_or(GateError::MissingHealth(entity))?;
    let mut owner = WorldActivation { entity: entity_mut };
    HealthGate::new(health.0).check_death(&mut owner);
    Ok(())
}

/// Reports whether `entity` is active, i.e. not [`Disabled`].
///
/// # Errors
/// Returns [`GateError::NoSuchEntity`] if the entity does not exist.
pub fn is_active(world: &World, entity: Entity) -> Result<bool, GateError> {
    world
        .get_entity(entity)
        .map(|entity_ref| !entity_ref.contains::<Disabled>())
        .map_err(|_| GateError::NoSuchEntity(entity))
}
