//! Health-gated deactivation.
//!
//! A [`HealthGate`] deactivates its owner once health reaches zero or drops
//! below it. The transition is one way: the gate never reactivates anything,
//! that is left to the host.

use log::debug;

use crate::activation::Activation;

/// Health at or below this value counts as depleted.
pub const DEATH_THRESHOLD: f32 = 0.0;

/// Health value guarding an entity's activation flag.
///
/// The default health is zero, so a gate nobody assigned health to is
/// already depleted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HealthGate {
    /// Current health. Unbounded and freely assignable.
    pub health: f32,
}

impl HealthGate {
    /// Creates a gate holding `health`.
    #[must_use]
    pub const fn new(health: f32) -> Self {
        Self { health }
    }

    /// Returns the current health.
    #[must_use]
    pub const fn health(&self) -> f32 {
        self.health
    }

    /// Replaces the current health.
    pub const fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    /// Returns `true` when health is zero or negative.
    ///
    /// NaN compares false against the threshold and therefore counts as
    /// alive.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        is_depleted(self.health)
    }

    /// Deactivates `owner` if health is depleted; otherwise leaves it alone.
    ///
    /// Repeated calls on a depleted gate keep writing `false`, which is a
    /// no-op in effect.
    pub fn check_death<A>(&self, owner: &mut A)
    where
        A: Activation + ?Sized,
    {
        if self.is_depleted() {
            if owner.is_active() {
                debug!("health {} depleted; deactivating owner", self.health);
            }
            owner.set_active(false);
        }
    }
}

/// The depletion predicate shared by every gate front end.
#[must_use]
pub fn is_depleted(health: f32) -> bool {
    health <= DEATH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationFlag;
    use rstest::rstest;

    fn checked(health: f32) -> ActivationFlag {
        let mut flag = ActivationFlag::default();
        HealthGate::new(health).check_death(&mut flag);
        flag
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.0)]
    #[case(-29.0)]
    #[case(f32::NEG_INFINITY)]
    fn empty_health_deactivates(#[case] health: f32) {
        assert!(!checked(health).is_active());
    }

    #[rstest]
    #[case(1.0)]
    #[case(100.0)]
    #[case(0.6)]
    #[case(9_999_999.0)]
    #[case(f32::MIN_POSITIVE)]
    fn remaining_health_stays_active(#[case] health: f32) {
        assert!(checked(health).is_active());
    }

    #[rstest]
    fn nan_health_counts_as_alive() {
        assert!(!HealthGate::new(f32::NAN).is_depleted());
        assert!(checked(f32::NAN).is_active());
    }

    #[rstest]
    fn default_gate_is_depleted() {
        assert!(HealthGate::default().is_depleted());
    }

    #[rstest]
    fn repeated_checks_stay_inactive() {
        let gate = HealthGate::new(-5.0);
        let mut flag = ActivationFlag::default();
        gate.check_death(&mut flag);
        gate.check_death(&mut flag);
        assert!(!flag.is_active());
    }

    #[rstest]
    fn healing_does_not_reactivate() {
        let mut gate = HealthGate::new(0.0);
        let mut flag = ActivationFlag::default();
        gate.check_death(&mut flag);
        gate.set_health(50.0);
        gate.check_death(&mut flag);
        assert!(!flag.is_active());
        assert!((gate.health() - 50.0).abs() < f32::EPSILON);
    }
}
