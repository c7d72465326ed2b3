//! Target references and world-to-local conversion shared by the follow and
//! proximity behaviours.

use std::fmt;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use serde::Deserialize;

use crate::constants::NAME_SELECTOR_PREFIX;
use crate::error::{BehaviourError, ConfigError};

/// Reference to the entity a behaviour tracks.
///
/// Selectors written as `#name` in configuration resolve, on every tick, to
/// the entity whose [`Name`] matches. Code that already holds an [`Entity`]
/// can reference it directly.
#[derive(Debug, Clone, PartialEq, Eq, Reflect, Deserialize)]
#[serde(try_from = "String")]
pub enum TargetRef {
    /// A specific entity.
    Entity(Entity),
    /// The entity carrying this [`Name`].
    Name(String),
}

impl TargetRef {
    /// Parses a `#name` selector.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelector`] when the prefix is missing or
    /// the name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_behaviours::TargetRef;
    ///
    /// let target = TargetRef::parse_selector("#player").unwrap();
    /// assert_eq!(target, TargetRef::Name("player".to_owned()));
    /// assert!(TargetRef::parse_selector("player").is_err());
    /// ```
    pub fn parse_selector(selector: &str) -> Result<Self, ConfigError> {
        selector
            .trim()
            .strip_prefix(NAME_SELECTOR_PREFIX)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Self::Name(name.to_owned()))
            .ok_or_else(|| ConfigError::InvalidSelector(selector.to_owned()))
    }
}

impl From<Entity> for TargetRef {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl TryFrom<String> for TargetRef {
    type Error = ConfigError;

    fn try_from(selector: String) -> Result<Self, Self::Error> {
        Self::parse_selector(&selector)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(entity) => write!(f, "{entity}"),
            Self::Name(name) => write!(f, "{NAME_SELECTOR_PREFIX}{name}"),
        }
    }
}

/// Read-only view of the scene used to locate targets.
///
/// Wraps Bevy's [`TransformHelper`] so world positions are computed from the
/// current `Transform` hierarchy rather than last frame's `GlobalTransform`.
#[derive(SystemParam)]
pub struct SceneLookup<'w, 's> {
    names: Query<'w, 's, (Entity, &'static Name)>,
    transforms: TransformHelper<'w, 's>,
}

impl SceneLookup<'_, '_> {
    /// Resolves a [`TargetRef`] to a live entity.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviourError::UnknownName`] when no entity carries the
    /// selected name.
    pub fn resolve(&self, target: &TargetRef) -> Result<Entity, BehaviourError> {
        match target {
            TargetRef::Entity(entity) => Ok(*entity),
            TargetRef::Name(wanted) => self
                .names
                .iter()
                .find_map(|(entity, name)| (name.as_str() == wanted).then_some(entity))
                .ok_or_else(|| BehaviourError::UnknownName(wanted.clone())),
        }
    }

    /// World-space translation of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviourError::TargetUnresolved`] when the entity was
    /// despawned or lacks a transform, or [`BehaviourError::Hierarchy`] when
    /// an ancestor does.
    pub fn world_position(&self, entity: Entity) -> Result<Vec3, BehaviourError> {
        use bevy::transform::helper::ComputeGlobalTransformError as Walk;

        match self.transforms.compute_global_transform(entity) {
            Ok(global) => Ok(global.translation()),
            Err(Walk::MissingTransform(missing) | Walk::NoSuchEntity(missing))
                if missing == entity =>
            {
                Err(BehaviourError::TargetUnresolved(entity))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Expresses a world-space point in the local space of `parent`.
    ///
    /// Entities without a parent live directly in world space, so the point
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`BehaviourError::Hierarchy`] when the parent's transform
    /// chain is broken.
    pub fn world_to_parent_local(
        &self,
        parent: Option<&ChildOf>,
        point: Vec3,
    ) -> Result<Vec3, BehaviourError> {
        let Some(child_of) = parent else {
            return Ok(point);
        };
        let parent_global = self.transforms.compute_global_transform(child_of.parent())?;
        Ok(parent_global.affine().inverse().transform_point3(point))
    }

    /// Resolves `target` and returns its position in the local space of the
    /// entity whose parent is `parent`.
    ///
    /// # Errors
    ///
    /// Any failure of [`Self::resolve`], [`Self::world_position`] or
    /// [`Self::world_to_parent_local`].
    pub fn target_in_parent_space(
        &self,
        target: &TargetRef,
        parent: Option<&ChildOf>,
    ) -> Result<Vec3, BehaviourError> {
        let entity = self.resolve(target)?;
        let world = self.world_position(entity)?;
        self.world_to_parent_local(parent, world)
    }
}

/// Tracks whether a target failure has already been reported.
///
/// Targets are evaluated every tick; reporting once per failure streak keeps
/// the log readable while still surfacing each new outage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct FaultLatch {
    reported: bool,
}

impl FaultLatch {
    /// Records a failure. Returns `true` when this is the first failure since
    /// the last success and should be reported.
    pub const fn fail(&mut self) -> bool {
        let first = !self.reported;
        self.reported = true;
        first
    }

    /// Records a success, re-arming reporting.
    pub const fn clear(&mut self) {
        self.reported = false;
    }
}
