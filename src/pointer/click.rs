//! Mouse-click normaliser.

use bevy::prelude::*;

use super::input::{PointerButton, PointerPressed, ViewportSize};
use super::normalize::ndc_from_client;
use super::{report_missing_viewport, ListenerState, RootOnly};
use crate::events::{BehaviourEvent, BehaviourEventKind, NormalizedPoint};

/// Emits a click event in normalised device coordinates for every primary
/// press. Must be attached to the [`RootNode`](super::RootNode).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component, Default)]
pub struct ClickNormalizer {
    listener: ListenerState,
    last: Option<NormalizedPoint>,
}

impl ClickNormalizer {
    /// Attachment state.
    #[must_use]
    pub const fn listener(&self) -> ListenerState {
        self.listener
    }

    /// Coordinates of the most recent click.
    #[must_use]
    pub const fn last_point(&self) -> Option<NormalizedPoint> {
        self.last
    }
}

impl RootOnly for ClickNormalizer {
    const LABEL: &'static str = "mouse-click";

    fn attachment(&self) -> ListenerState {
        self.listener
    }

    fn listener_mut(&mut self) -> &mut ListenerState {
        &mut self.listener
    }
}

/// Converts this frame's primary presses into click events on every
/// listening [`ClickNormalizer`].
///
/// Presses are neither debounced nor coalesced.
pub fn emit_mouse_clicks(
    mut commands: Commands,
    mut presses: MessageReader<PointerPressed>,
    viewport: Option<Res<ViewportSize>>,
    mut normalizers: Query<(Entity, &mut ClickNormalizer)>,
) {
    let clients: Vec<Vec2> = presses
        .read()
        .filter(|press| press.button == PointerButton::Primary)
        .map(|press| press.client)
        .collect();
    if clients.is_empty() {
        return;
    }

    let mut listening = normalizers
        .iter_mut()
        .filter(|(_, normalizer)| normalizer.listener.is_listening())
        .peekable();
    if listening.peek().is_none() {
        return;
    }
    let Some(viewport) = viewport.map(|res| *res) else {
        report_missing_viewport(&mut commands, ClickNormalizer::LABEL);
        return;
    };

    for (entity, mut normalizer) in listening {
        for client in &clients {
            let point = ndc_from_client(*client, viewport);
            normalizer.last = Some(point);
            commands.trigger(BehaviourEvent::new(
                entity,
                BehaviourEventKind::Click(point),
            ));
        }
    }
}
