//! Typed events emitted by the behaviours.
//!
//! Every notification is a [`BehaviourEvent`] targeted at the entity that
//! owns the emitting component. The payload is a closed set of variants, so
//! observers match exhaustively instead of dispatching on event names.
//! Events do not propagate to ancestors.

use bevy::prelude::*;
use serde::Serialize;

/// A pointer position rescaled independently of the viewport pixel size.
///
/// Click coordinates lie in `[-1, 1]` with Y pointing up. Tap coordinates lie
/// in `[0, 1]` with Y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Reflect)]
pub struct NormalizedPoint {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl NormalizedPoint {
    /// Creates a point from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<NormalizedPoint> for Vec2 {
    fn from(point: NormalizedPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

/// What happened to the entity a [`BehaviourEvent`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BehaviourEventKind {
    /// The proximity target moved inside the radius.
    Enter,
    /// The proximity target moved outside the radius.
    Exit,
    /// Primary pointer press in normalised device coordinates.
    Click(NormalizedPoint),
    /// Pointer press or touch start in unit coordinates.
    Tap(NormalizedPoint),
}

/// Notification raised by a behaviour on its owning entity.
///
/// # Examples
///
/// ```ignore
/// app.add_observer(|event: On<BehaviourEvent>| {
///     if let BehaviourEventKind::Enter = event.event().kind {
///         log::info!("{} was approached", event.event().entity);
///     }
/// });
/// ```
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq)]
pub struct BehaviourEvent {
    /// Entity owning the emitting component.
    pub entity: Entity,
    /// Payload.
    pub kind: BehaviourEventKind,
}

impl BehaviourEvent {
    /// Convenience constructor used by the behaviour systems.
    #[must_use]
    pub const fn new(entity: Entity, kind: BehaviourEventKind) -> Self {
        Self { entity, kind }
    }
}
