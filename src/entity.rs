//! Engine-free host entity carrying a [`HealthGate`].
use crate::activation::{Activation, ActivationFlag};
use crate::health_gate::HealthGate;
use crate::tick::Tickable;

/// A simulated object with an activation flag and a health gate.
///
/// This is the host used when no engine is present, e.g. in headless
/// simulations and unit tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldEntity {
    /// Host-owned activation flag.
    pub activation: ActivationFlag,
    /// Gate deciding when the entity is deactivated.
    pub gate: HealthGate,
}

impl WorldEntity {
    /// Creates an active entity with the given health.
    #[must_use]
    pub fn new(health: f32) -> Self {
        Self {
            activation: ActivationFlag::default(),
            gate: HealthGate::new(health),
        }
    }

    /// Whether the entity still takes part in the simulation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> f32 {
        self.gate.health()
    }

    /// Assigns health. Does not touch the activation flag.
    pub const fn set_health(&mut self, health: f32) {
        self.gate.set_health(health);
    }

    /// Runs the death check immediately, outside the tick loop.
    pub fn check_death(&mut self) {
        self.gate.check_death(&mut self.activation);
    }
}

impl Tickable for WorldEntity {
    fn tick(&mut self) {
        self.check_death();
    }
}
