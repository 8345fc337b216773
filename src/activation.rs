//! Engine-agnostic view of an entity's activation flag.
//!
//! Hosts own the flag. Gameplay logic only reads it and writes it through the
//! [`Activation`] trait so it never depends on a particular engine.

/// Read and write access to the activation flag of a hosted entity.
pub trait Activation {
    /// Returns whether the entity currently takes part in the simulation.
    fn is_active(&self) -> bool;

    /// Sets the activation flag.
    fn set_active(&mut self, active: bool);
}

/// Plain boolean activation flag for hosts without an engine.
///
/// New flags start active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationFlag(bool);

impl ActivationFlag {
    /// Creates a flag in the given state.
    #[must_use]
    pub const fn new(active: bool) -> Self {
        Self(active)
    }
}

impl Default for ActivationFlag {
    fn default() -> Self {
        Self(true)
    }
}

impl Activation for ActivationFlag {
    fn is_active(&self) -> bool {
        self.0
    }

    fn set_active(&mut self, active: bool) {
        self.0 = active;
    }
}
