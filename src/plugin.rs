//! Umbrella plugin and schedule ordering for all behaviours.

use bevy::prelude::*;

use crate::diagnostics::ensure_diagnostics;
use crate::follow::FollowPlugin;
use crate::pointer::PointerPlugin;
use crate::proximity::ProximityPlugin;

/// System sets the behaviours run in, all inside `Update`.
///
/// [`BehavioursPlugin`] orders them `Follow`, then `Proximity`, then
/// `Pointer`, so proximity sees orientations already updated this frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviourSet {
    /// Aiming and orienting followers.
    Follow,
    /// Sampling proximity radii.
    Proximity,
    /// Normalising pointer and touch input.
    Pointer,
}

/// Adds every behaviour plugin.
///
/// # Examples
///
/// ```no_run
/// use bevy::prelude::*;
/// use scene_behaviours::BehavioursPlugin;
///
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(BehavioursPlugin)
///     .run();
/// ```
#[derive(Debug, Default)]
pub struct BehavioursPlugin;

impl Plugin for BehavioursPlugin {
    fn build(&self, app: &mut App) {
        ensure_diagnostics(app);
        app.add_plugins((FollowPlugin, ProximityPlugin, PointerPlugin));
        app.configure_sets(
            Update,
            (
                BehaviourSet::Follow,
                BehaviourSet::Proximity,
                BehaviourSet::Pointer,
            )
                .chain(),
        );
    }
}
