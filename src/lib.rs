#![cfg_attr(docsrs, feature(doc_cfg))]
//! Health-gated entity deactivation.
//!
//! The core ([`HealthGate`], [`Activation`], [`Tickable`]) is engine free.
//! [`gate_sync`] adapts it to Bevy ECS.
pub mod activation;
pub mod components;
pub mod entity;
pub mod gate_sync;
pub mod health_gate;
pub mod logging;
pub mod tick;

pub use activation::{Activation, ActivationFlag};
pub use components::Health;
pub use entity::WorldEntity;
pub use gate_sync::{
    check_death_now, check_death_system, is_active, GateError, HealthGatePlugin, HealthGateSet,
};
pub use health_gate::{HealthGate, DEATH_THRESHOLD};
pub use logging::init as init_logging;
pub use tick::{tick_all, Tickable};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use cube_gate::prelude::*;
    //! ```

    pub use crate::Activation;
    pub use crate::ActivationFlag;
    pub use crate::Health;
    pub use crate::HealthGate;
    pub use crate::HealthGatePlugin;
    pub use crate::Tickable;
    pub use crate::WorldEntity;
}
