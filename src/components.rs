//! ECS component types used by the gate bridge.
use bevy::prelude::*;

/// Health carried by a gated entity.
///
/// Defaults to zero, so an entity spawned with `Health::default()` is
/// deactivated on the first frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Health(pub f32);

impl From<f32> for Health {
    fn from(value: f32) -> Self {
        Self(value)
    }
}
