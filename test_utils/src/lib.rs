//! Shared fixtures for gate integration tests.
use bevy::prelude::*;
use cube_gate::{is_active, Health, HealthGatePlugin};

/// Creates an app with `MinimalPlugins` and [`HealthGatePlugin`] installed.
#[must_use]
pub fn gate_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(HealthGatePlugin);
    app
}

/// Spawns an entity carrying `health` and returns its id.
pub fn spawn_cube(app: &mut App, health: f32) -> Entity {
    app.world_mut().spawn(Health(health)).id()
}

/// Reads the activation state of `entity`.
///
/// # Panics
/// Panics if the entity no longer exists.
#[must_use]
pub fn active(app: &App, entity: Entity) -> bool {
    match is_active(app.world(), entity) {
        Ok(state) => state,
        Err(e) => panic!("cannot read activation state: {e}"),
    }
}
