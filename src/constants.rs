//! Behaviour constants shared across systems.

use bevy::math::Dir3;

/// Up direction used when orienting followers towards their target.
pub const FOLLOW_UP: Dir3 = Dir3::Y;

/// Radius used by the demo binary when `--distance` is omitted.
pub const DEFAULT_PROXIMITY_DISTANCE: f32 = 2.0;

/// Prefix marking a name selector in declarative configuration.
pub const NAME_SELECTOR_PREFIX: char = '#';

/// Separator between declarations in an attribute string.
pub const DECLARATION_SEPARATOR: char = ';';

/// Separator between a property name and its value.
pub const PROPERTY_SEPARATOR: char = ':';
