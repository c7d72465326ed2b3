//! Edge-triggered proximity detection.
//!
//! A [`Proximity`] component watches the distance between its entity and a
//! target every tick and raises [`BehaviourEventKind::Enter`] or
//! [`BehaviourEventKind::Exit`] only when that distance crosses the configured
//! radius. Distances exactly on the radius never cause a transition.

use bevy::prelude::*;
use log::debug;

use crate::config::{validate_distance, ProximityConfig};
use crate::diagnostics::{ensure_diagnostics, BehaviourDiagnostic, DiagnosticKind};
use crate::error::ConfigError;
use crate::events::{BehaviourEvent, BehaviourEventKind};
use crate::plugin::BehaviourSet;
use crate::target::{FaultLatch, SceneLookup, TargetRef};

/// Direction of a radius crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Moved from outside to inside.
    Entered,
    /// Moved from inside to outside.
    Exited,
}

impl From<Crossing> for BehaviourEventKind {
    fn from(crossing: Crossing) -> Self {
        match crossing {
            Crossing::Entered => Self::Enter,
            Crossing::Exited => Self::Exit,
        }
    }
}

/// Inside/outside latch driving proximity notifications.
///
/// Starts outside. The latch flips only on a strict crossing, so repeated
/// observations on the same side of the threshold report nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ProximityLatch {
    inside: bool,
}

impl ProximityLatch {
    /// Whether the last crossing left the latch inside the radius.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.inside
    }

    /// Feeds one distance sample and returns the crossing it caused, if any.
    ///
    /// A sample equal to `threshold`, or a `NaN` sample, leaves the latch
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_behaviours::proximity::{Crossing, ProximityLatch};
    ///
    /// let mut latch = ProximityLatch::default();
    /// let crossings: Vec<_> = [5.0, 3.0, 1.0, 3.0, 5.0]
    ///     .into_iter()
    ///     .map(|d| latch.observe(d, 2.0))
    ///     .collect();
    /// assert_eq!(
    ///     crossings,
    ///     [None, None, Some(Crossing::Entered), Some(Crossing::Exited), None]
    /// );
    /// ```
    pub fn observe(&mut self, distance: f32, threshold: f32) -> Option<Crossing> {
        if distance < threshold && !self.inside {
            self.inside = true;
            Some(Crossing::Entered)
        } else if distance > threshold && self.inside {
            self.inside = false;
            Some(Crossing::Exited)
        } else {
            None
        }
    }
}

/// Raises enter/exit events when `target` crosses a radius around the entity.
///
/// The target's world position is expressed in the parent space of the
/// owning entity and compared against the owner's `Transform::translation`,
/// so both points share a frame however deeply the owner is nested.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Proximity {
    target: TargetRef,
    distance: f32,
    latch: ProximityLatch,
    fault: FaultLatch,
}

impl Proximity {
    /// Creates a detector for `target` with radius `distance`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveDistance`] unless `distance` is
    /// finite and greater than zero.
    pub fn new(target: impl Into<TargetRef>, distance: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            target: target.into(),
            distance: validate_distance(distance)?,
            latch: ProximityLatch::default(),
            fault: FaultLatch::default(),
        })
    }

    /// The tracked target.
    #[must_use]
    pub const fn target(&self) -> &TargetRef {
        &self.target
    }

    /// The detection radius.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether the target is currently considered inside the radius.
    #[must_use]
    pub const fn is_inside(&self) -> bool {
        self.latch.is_inside()
    }
}

impl From<ProximityConfig> for Proximity {
    fn from(config: ProximityConfig) -> Self {
        let (target, distance) = config.into_parts();
        Self {
            target,
            distance,
            latch: ProximityLatch::default(),
            fault: FaultLatch::default(),
        }
    }
}

/// Samples every [`Proximity`] once and triggers events on crossings.
///
/// Ticks whose target cannot be resolved are skipped without touching the
/// latch; the first failure of each streak raises a
/// [`DiagnosticKind::TargetUnresolved`] diagnostic.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn detect_proximity(
    mut commands: Commands,
    lookup: SceneLookup,
    mut detectors: Query<(Entity, &mut Proximity, &Transform, Option<&ChildOf>)>,
) {
    for (entity, detector, transform, parent) in &mut detectors {
        let Proximity {
            target,
            distance: threshold,
            latch,
            fault,
        } = detector.into_inner();

        let target_position = match lookup.target_in_parent_space(target, parent) {
            Ok(position) => {
                fault.clear();
                position
            }
            Err(err) => {
                if fault.fail() {
                    commands.trigger(BehaviourDiagnostic::new(
                        DiagnosticKind::TargetUnresolved,
                        Some(entity),
                        format!("proximity target {target}: {err}"),
                    ));
                }
                continue;
            }
        };

        let separation = target_position.distance(transform.translation);
        if let Some(crossing) = latch.observe(separation, *threshold) {
            debug!("{entity} {crossing:?} radius {threshold} of {target} at {separation}");
            commands.trigger(BehaviourEvent::new(entity, crossing.into()));
        }
    }
}

/// Bevy plugin running [`detect_proximity`] every frame.
#[derive(Debug, Default)]
pub struct ProximityPlugin;

impl Plugin for ProximityPlugin {
    fn build(&self, app: &mut App) {
        ensure_diagnostics(app);
        app.register_type::<Proximity>();
        app.add_systems(Update, detect_proximity.in_set(BehaviourSet::Proximity));
    }
}
