//! Per-frame systems running the health gate inside Bevy.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;

use crate::activation::Activation;
use crate::components::Health;
use crate::health_gate::HealthGate;

/// Activation adapter that defers flag writes through [`Commands`].
///
/// Systems only see enabled entities, so the adapter starts out active.
pub(crate) struct DeferredActivation<'a> {
    commands: EntityCommands<'a>,
    active: bool,
}

impl<'a> DeferredActivation<'a> {
    pub(crate) fn new(commands: EntityCommands<'a>) -> Self {
        Self {
            commands,
            active: true,
        }
    }
}

impl Activation for DeferredActivation<'_> {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            self.commands.remove::<Disabled>();
        } else {
            self.commands.insert(Disabled);
        }
    }
}

/// Deactivates every enabled entity whose [`Health`] is depleted.
///
/// Deactivation inserts [`Disabled`]. Disabled entities drop out of default
/// queries, so this system never revisits them and never reactivates them.
pub fn check_death_system(mut commands: Commands, gated: Query<(Entity, &Health)>) {
    for (entity, health) in &gated {
        let mut owner = DeferredActivation::new(commands.entity(entity));
        HealthGate::new(health.0).check_death(&mut owner);
    }
}
