//! Pointer and touch normalisers attached to the scene root.
//!
//! [`ClickNormalizer`] turns primary presses into
//! [`BehaviourEventKind::Click`](crate::events::BehaviourEventKind::Click)
//! events in normalised device coordinates. [`TapNormalizer`] merges any
//! press and touch starts into
//! [`BehaviourEventKind::Tap`](crate::events::BehaviourEventKind::Tap) events
//! in unit coordinates. Both only work on the entity marked [`RootNode`];
//! attached anywhere else they report a
//! [`DiagnosticKind::Misattached`] diagnostic and stay inert.

mod click;
mod input;
mod normalize;
mod tap;

use bevy::ecs::component::Mutable;
use bevy::prelude::*;
use log::debug;

use crate::diagnostics::{ensure_diagnostics, BehaviourDiagnostic, DiagnosticKind};
use crate::plugin::BehaviourSet;

pub use click::{emit_mouse_clicks, ClickNormalizer};
pub use input::{PointerButton, PointerPressed, TouchStarted, ViewportSize};
pub use normalize::{ndc_from_client, unit_from_client};
pub use tap::{emit_taps, TapNormalizer};

/// Marks the root of the scene graph.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct RootNode;

/// Whether a root-only component receives input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum ListenerState {
    /// Attached this frame; not yet checked.
    #[default]
    Pending,
    /// Attached to the root and receiving input.
    Listening,
    /// Attached off-root; never receives input.
    Inert,
}

impl ListenerState {
    /// Whether input reaches the component.
    #[must_use]
    pub const fn is_listening(self) -> bool {
        matches!(self, Self::Listening)
    }
}

/// Component that only functions on the [`RootNode`] entity.
pub trait RootOnly: Component<Mutability = Mutable> {
    /// Name used in diagnostics.
    const LABEL: &'static str;

    /// Current attachment state.
    fn attachment(&self) -> ListenerState;

    /// Mutable access to the attachment state.
    fn listener_mut(&mut self) -> &mut ListenerState;
}

/// Decides, once per attachment, whether a root-only component listens.
///
/// Runs on components inserted or replaced since the last run that are still
/// [`ListenerState::Pending`]. Off-root attachments are marked
/// [`ListenerState::Inert`] and reported once.
pub fn attach_root_only<C: RootOnly>(
    mut commands: Commands,
    mut inserted: Query<(Entity, &mut C, Has<RootNode>), Changed<C>>,
) {
    for (entity, mut component, is_root) in &mut inserted {
        if component.attachment() != ListenerState::Pending {
            continue;
        }
        let state = component.listener_mut();
        if is_root {
            *state = ListenerState::Listening;
            debug!("{} listening on root {entity}", C::LABEL);
        } else {
            *state = ListenerState::Inert;
            commands.trigger(BehaviourDiagnostic::new(
                DiagnosticKind::Misattached,
                Some(entity),
                format!("{} can only be applied to the scene root", C::LABEL),
            ));
        }
    }
}

/// Reports pointer input that arrived without a [`ViewportSize`].
fn report_missing_viewport(commands: &mut Commands, label: &str) {
    commands.trigger(BehaviourDiagnostic::new(
        DiagnosticKind::ViewportUnavailable,
        None,
        format!("{label} received input but no ViewportSize resource is present"),
    ));
}

/// Bevy plugin wiring the click and tap normalisers.
///
/// Registers the [`PointerPressed`] and [`TouchStarted`] messages. The host
/// writes them and keeps [`ViewportSize`] current.
#[derive(Debug, Default)]
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        ensure_diagnostics(app);
        app.register_type::<RootNode>()
            .register_type::<ClickNormalizer>()
            .register_type::<TapNormalizer>()
            .add_message::<PointerPressed>()
            .add_message::<TouchStarted>()
            .add_systems(
                Update,
                (
                    attach_root_only::<ClickNormalizer>,
                    attach_root_only::<TapNormalizer>,
                    emit_mouse_clicks,
                    emit_taps,
                )
                    .chain()
                    .in_set(BehaviourSet::Pointer),
            );
    }
}
