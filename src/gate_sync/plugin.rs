//! Bevy plugin wiring the health gate into the frame schedule.

use bevy::prelude::*;

use super::check_death_system;

/// System set containing the per-frame death check.
///
/// Order damage-dealing systems `.before(HealthGateSet)` so their writes are
/// seen in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthGateSet;

/// Installs [`check_death_system`] in [`Update`].
#[derive(Default)]
pub struct HealthGatePlugin;

impl Plugin for HealthGatePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, check_death_system.in_set(HealthGateSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Health;
    use crate::gate_sync::is_active;
    use rstest::rstest;

    #[rstest]
    fn plugin_checks_every_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(HealthGatePlugin);
        let entity = app.world_mut().spawn(Health(5.0)).id();

        app.update();
        assert_eq!(is_active(app.world(), entity), Ok(true));

        app.world_mut().entity_mut(entity).insert(Health(-1.0));
        app.update();
        assert_eq!(is_active(app.world(), entity), Ok(false));
    }
}
