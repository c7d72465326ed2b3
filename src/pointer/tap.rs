//! Tap normaliser merging pointer presses and touch starts.

use bevy::prelude::*;

use super::input::{PointerPressed, TouchStarted, ViewportSize};
use super::normalize::unit_from_client;
use super::{report_missing_viewport, ListenerState, RootOnly};
use crate::diagnostics::{BehaviourDiagnostic, DiagnosticKind};
use crate::events::{BehaviourEvent, BehaviourEventKind, NormalizedPoint};

/// Emits a tap event in unit coordinates for every pointer press and touch
/// start. Must be attached to the [`RootNode`](super::RootNode).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component, Default)]
pub struct TapNormalizer {
    listener: ListenerState,
    last: Option<NormalizedPoint>,
}

impl TapNormalizer {
    /// Attachment state.
    #[must_use]
    pub const fn listener(&self) -> ListenerState {
        self.listener
    }

    /// Coordinates of the most recent tap.
    #[must_use]
    pub const fn last_point(&self) -> Option<NormalizedPoint> {
        self.last
    }
}

impl RootOnly for TapNormalizer {
    const LABEL: &'static str = "tap-event";

    fn attachment(&self) -> ListenerState {
        self.listener
    }

    fn listener_mut(&mut self) -> &mut ListenerState {
        &mut self.listener
    }
}

/// One input occurrence as seen by the tap normaliser.
enum TapSource {
    /// Press or first touch at this pixel position.
    At(Vec2),
    /// Touch start without any touch point.
    EmptyTouches,
}

/// Converts this frame's presses and touch starts into tap events on every
/// listening [`TapNormalizer`].
///
/// Presses of any button count. A touch start with no touch points is
/// reported as [`DiagnosticKind::EmptyTouchList`] and otherwise ignored.
pub fn emit_taps(
    mut commands: Commands,
    mut presses: MessageReader<PointerPressed>,
    mut touch_starts: MessageReader<TouchStarted>,
    viewport: Option<Res<ViewportSize>>,
    mut normalizers: Query<(Entity, &mut TapNormalizer)>,
) {
    let sources: Vec<TapSource> = presses
        .read()
        .map(|press| TapSource::At(press.client))
        .chain(touch_starts.read().map(|touch| {
            touch
                .touches
                .first()
                .map_or(TapSource::EmptyTouches, |first| TapSource::At(*first))
        }))
        .collect();
    if sources.is_empty() {
        return;
    }

    let mut listening = normalizers
        .iter_mut()
        .filter(|(_, normalizer)| normalizer.listener.is_listening())
        .peekable();
    if listening.peek().is_none() {
        return;
    }
    let viewport = viewport.map(|res| *res);
    let needs_viewport = sources.iter().any(|s| matches!(s, TapSource::At(_)));
    if needs_viewport && viewport.is_none() {
        report_missing_viewport(&mut commands, TapNormalizer::LABEL);
    }

    for (entity, mut normalizer) in listening {
        for source in &sources {
            match (source, viewport) {
                (TapSource::At(client), Some(size)) => {
                    let point = unit_from_client(*client, size);
                    normalizer.last = Some(point);
                    commands.trigger(BehaviourEvent::new(entity, BehaviourEventKind::Tap(point)));
                }
                (TapSource::At(_), None) => {}
                (TapSource::EmptyTouches, _) => {
                    commands.trigger(BehaviourDiagnostic::new(
                        DiagnosticKind::EmptyTouchList,
                        Some(entity),
                        "no touches on touch event",
                    ));
                }
            }
        }
    }
}
