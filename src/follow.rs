//! Orientation-follow behaviour.
//!
//! Each tick a [`Follow`] entity turns to face its target. Aiming and turning
//! run as two chained systems because the aim is computed from the live
//! `Transform` hierarchy, which cannot be read while transforms are being
//! written.

use bevy::prelude::*;

use crate::config::FollowConfig;
use crate::constants::FOLLOW_UP;
use crate::diagnostics::{ensure_diagnostics, BehaviourDiagnostic, DiagnosticKind};
use crate::plugin::BehaviourSet;
use crate::target::{FaultLatch, SceneLookup, TargetRef};

/// Keeps the entity's forward axis pointed at `target`.
///
/// Uses Bevy's convention: the entity's local `-Z` faces the target and
/// [`FOLLOW_UP`] is kept as the up hint. Scenes authored for three.js, where
/// `lookAt` turns a non-camera object's `+Z` toward the target, need their
/// models rotated half a turn about Y to face the same way.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Follow {
    target: TargetRef,
    aim: Option<Vec3>,
    fault: FaultLatch,
}

impl Follow {
    /// Follows `target`.
    pub fn new(target: impl Into<TargetRef>) -> Self {
        Self {
            target: target.into(),
            aim: None,
            fault: FaultLatch::default(),
        }
    }

    /// The tracked target.
    #[must_use]
    pub const fn target(&self) -> &TargetRef {
        &self.target
    }

    /// Target position in the parent space of this entity, as of the last
    /// tick that resolved it.
    #[must_use]
    pub const fn aim(&self) -> Option<Vec3> {
        self.aim
    }
}

impl From<FollowConfig> for Follow {
    fn from(config: FollowConfig) -> Self {
        Self::new(config.target)
    }
}

/// Computes where each follower should look this tick.
///
/// An unresolved target clears the aim, so the follower keeps its last
/// orientation, and the first failure of each streak is reported.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn aim_followers(
    mut commands: Commands,
    lookup: SceneLookup,
    mut followers: Query<(Entity, &mut Follow, Option<&ChildOf>)>,
) {
    for (entity, follower, parent) in &mut followers {
        let Follow { target, aim, fault } = follower.into_inner();
        match lookup.target_in_parent_space(target, parent) {
            Ok(point) => {
                fault.clear();
                *aim = Some(point);
            }
            Err(err) => {
                *aim = None;
                if fault.fail() {
                    commands.trigger(BehaviourDiagnostic::new(
                        DiagnosticKind::TargetUnresolved,
                        Some(entity),
                        format!("follow target {target}: {err}"),
                    ));
                }
            }
        }
    }
}

/// Turns every follower with a fresh aim towards it.
pub fn apply_follow_aims(mut followers: Query<(&Follow, &mut Transform)>) {
    for (follower, mut transform) in &mut followers {
        if let Some(point) = follower.aim {
            transform.look_at(point, FOLLOW_UP);
        }
    }
}

/// Bevy plugin orienting [`Follow`] entities every frame.
#[derive(Debug, Default)]
pub struct FollowPlugin;

impl Plugin for FollowPlugin {
    fn build(&self, app: &mut App) {
        ensure_diagnostics(app);
        app.register_type::<Follow>();
        app.add_systems(
            Update,
            (aim_followers, apply_follow_aims)
                .chain()
                .in_set(BehaviourSet::Follow),
        );
    }
}
