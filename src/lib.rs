#![cfg_attr(docsrs, feature(doc_cfg))]
//! Scene behaviours for Bevy: orientation-follow, proximity enter/exit
//! detection, and pointer/touch normalisation at the scene root.
//!
//! Add [`BehavioursPlugin`] (or the individual plugins) and attach
//! [`Follow`], [`Proximity`], [`ClickNormalizer`] or [`TapNormalizer`] to
//! entities. Notifications arrive as [`BehaviourEvent`]s through observers;
//! failures arrive as [`BehaviourDiagnostic`]s and are logged.
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod follow;
pub mod logging;
pub mod plugin;
pub mod pointer;
pub mod proximity;
pub mod target;
pub use constants::*;

// Re-export commonly used items
pub use config::{FollowConfig, ProximityConfig};
pub use diagnostics::{BehaviourDiagnostic, DiagnosticKind, DiagnosticsPlugin};
pub use error::{BehaviourError, ConfigError};
pub use events::{BehaviourEvent, BehaviourEventKind, NormalizedPoint};
pub use follow::{Follow, FollowPlugin};
pub use logging::init as init_logging;
pub use plugin::{BehaviourSet, BehavioursPlugin};
pub use pointer::{
    ClickNormalizer, PointerButton, PointerPlugin, PointerPressed, RootNode, TapNormalizer,
    TouchStarted, ViewportSize,
};
pub use proximity::{Proximity, ProximityLatch, ProximityPlugin};
pub use target::TargetRef;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use scene_behaviours::prelude::*;
    //! ```

    pub use crate::BehaviourEvent;
    pub use crate::BehaviourEventKind;
    pub use crate::BehavioursPlugin;
    pub use crate::ClickNormalizer;
    pub use crate::Follow;
    pub use crate::PointerPressed;
    pub use crate::Proximity;
    pub use crate::RootNode;
    pub use crate::TapNormalizer;
    pub use crate::TargetRef;
    pub use crate::TouchStarted;
    pub use crate::ViewportSize;
}
