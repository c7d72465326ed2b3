//! Declarative configuration for the follow and proximity behaviours.
//!
//! Configurations can be deserialised with `serde` (for example from JSON) or
//! parsed from attribute strings of `;`-separated `name: value` declarations:
//!
//! ```
//! use scene_behaviours::{ProximityConfig, TargetRef};
//!
//! let config: ProximityConfig = "target: #player; distance: 2.5".parse().unwrap();
//! assert_eq!(config.target(), &TargetRef::Name("player".to_owned()));
//! assert!((config.distance() - 2.5).abs() < f32::EPSILON);
//! ```
//!
//! Both routes validate the same way, so a configuration value that exists
//! is always usable.

use std::str::FromStr;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::constants::{DECLARATION_SEPARATOR, PROPERTY_SEPARATOR};
use crate::error::ConfigError;
use crate::target::TargetRef;

const TARGET: &str = "target";
const DISTANCE: &str = "distance";

/// Checks that a proximity radius is finite and strictly positive.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositiveDistance`] otherwise.
pub fn validate_distance(distance: f32) -> Result<f32, ConfigError> {
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(ConfigError::NonPositiveDistance(distance))
    }
}

/// Configuration of the follow behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FollowConfig {
    /// Entity to face.
    pub target: TargetRef,
}

impl FromStr for FollowConfig {
    type Err = ConfigError;

    fn from_str(attribute: &str) -> Result<Self, Self::Err> {
        let mut declarations = Declarations::parse(attribute)?;
        let target = TargetRef::parse_selector(declarations.take(TARGET)?)?;
        declarations.finish()?;
        Ok(Self { target })
    }
}

/// Configuration of the proximity behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawProximityConfig")]
pub struct ProximityConfig {
    target: TargetRef,
    distance: f32,
}

impl ProximityConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveDistance`] for an unusable radius.
    pub fn new(target: impl Into<TargetRef>, distance: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            target: target.into(),
            distance: validate_distance(distance)?,
        })
    }

    /// Entity whose distance is measured.
    #[must_use]
    pub const fn target(&self) -> &TargetRef {
        &self.target
    }

    /// Radius of the detection sphere.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Splits the configuration into its target and radius.
    #[must_use]
    pub fn into_parts(self) -> (TargetRef, f32) {
        (self.target, self.distance)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProximityConfig {
    target: TargetRef,
    distance: f32,
}

impl TryFrom<RawProximityConfig> for ProximityConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProximityConfig) -> Result<Self, Self::Error> {
        Self::new(raw.target, raw.distance)
    }
}

impl FromStr for ProximityConfig {
    type Err = ConfigError;

    fn from_str(attribute: &str) -> Result<Self, Self::Err> {
        let mut declarations = Declarations::parse(attribute)?;
        let target = TargetRef::parse_selector(declarations.take(TARGET)?)?;
        let raw_distance = declarations.take(DISTANCE)?;
        declarations.finish()?;
        let distance = raw_distance
            .parse::<f32>()
            .map_err(|_| ConfigError::InvalidNumber {
                property: DISTANCE,
                value: raw_distance.to_owned(),
            })?;
        Self::new(target, distance)
    }
}

/// Property map of one attribute string.
struct Declarations<'a> {
    properties: HashMap<&'a str, &'a str>,
}

impl<'a> Declarations<'a> {
    fn parse(attribute: &'a str) -> Result<Self, ConfigError> {
        let mut properties = HashMap::new();
        for declaration in attribute
            .split(DECLARATION_SEPARATOR)
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            let (name, value) = declaration
                .split_once(PROPERTY_SEPARATOR)
                .map(|(name, value)| (name.trim(), value.trim()))
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ConfigError::MalformedDeclaration(declaration.to_owned()))?;
            if properties.insert(name, value).is_some() {
                return Err(ConfigError::DuplicateProperty(name.to_owned()));
            }
        }
        Ok(Self { properties })
    }

    fn take(&mut self, property: &'static str) -> Result<&'a str, ConfigError> {
        self.properties
            .remove(property)
            .ok_or(ConfigError::MissingProperty(property))
    }

    /// Fails on the first property nobody asked for.
    fn finish(self) -> Result<(), ConfigError> {
        let mut leftovers: Vec<_> = self.properties.into_keys().collect();
        leftovers.sort_unstable();
        leftovers
            .first()
            .map_or(Ok(()), |name| Err(ConfigError::UnknownProperty((*name).to_owned())))
    }
}
