//! Diagnostics raised when a behaviour cannot do its job.
//!
//! Behaviours never panic on bad input. They trigger a [`BehaviourDiagnostic`]
//! instead, and the observer installed by [`DiagnosticsPlugin`] forwards it to
//! the `log` facade so the report stays visible even when `bevy_log` is
//! disabled. Applications may add their own observers to surface diagnostics
//! elsewhere.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{log, Level};
use thiserror::Error;

/// Category of a [`BehaviourDiagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A root-only component was attached to a non-root entity and is inert.
    Misattached,
    /// A touch-start message carried no touch points.
    EmptyTouchList,
    /// A follow or proximity target could not be resolved.
    TargetUnresolved,
    /// Pointer input arrived without a usable viewport.
    ViewportUnavailable,
}

impl DiagnosticKind {
    /// Log level the default observer reports this kind at.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Misattached => Level::Warn,
            Self::EmptyTouchList | Self::TargetUnresolved | Self::ViewportUnavailable => {
                Level::Error
            }
        }
    }
}

/// Event raised when a behaviour hits an error path.
#[derive(Event, Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {detail}")]
pub struct BehaviourDiagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Entity owning the reporting component, when there is one.
    pub entity: Option<Entity>,
    /// Human-readable description.
    pub detail: String,
}

impl BehaviourDiagnostic {
    /// Convenience constructor used by systems to emit diagnostics.
    pub fn new(kind: DiagnosticKind, entity: Option<Entity>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            entity,
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_diagnostic(event: On<BehaviourDiagnostic>) {
    let BehaviourDiagnostic {
        kind,
        entity,
        detail,
    } = event.event();
    match entity {
        Some(owner) => log!(kind.level(), "{kind:?} on {owner}: {detail}"),
        None => log!(kind.level(), "{kind:?}: {detail}"),
    }
}

/// Bevy plugin installing the logging observer for [`BehaviourDiagnostic`].
///
/// Behaviour plugins add it through [`ensure_diagnostics`], so applications
/// rarely need to add it themselves.
#[derive(Debug, Default)]
pub struct DiagnosticsPlugin;

impl Plugin for DiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_diagnostic);
    }
}

/// Adds [`DiagnosticsPlugin`] unless an earlier plugin already did.
pub fn ensure_diagnostics(app: &mut App) {
    if !app.is_plugin_added::<DiagnosticsPlugin>() {
        app.add_plugins(DiagnosticsPlugin);
    }
}
