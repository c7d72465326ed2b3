//! Error types for configuration parsing and per-tick behaviour evaluation.

use bevy::prelude::Entity;
use bevy::transform::helper::ComputeGlobalTransformError;
use thiserror::Error;

/// Failure while parsing or validating a behaviour configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A declaration was not of the form `name: value`.
    #[error("malformed declaration `{0}`; expected `name: value`")]
    MalformedDeclaration(String),
    /// The same property appeared twice.
    #[error("property `{0}` declared more than once")]
    DuplicateProperty(String),
    /// A property the component does not declare.
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
    /// A property the component requires was absent.
    #[error("missing required property `{0}`")]
    MissingProperty(&'static str),
    /// A selector was empty or lacked the `#` prefix.
    #[error("invalid selector `{0}`; expected `#name`")]
    InvalidSelector(String),
    /// A numeric property could not be parsed.
    #[error("property `{property}` is not a number: `{value}`")]
    InvalidNumber {
        /// Offending property name.
        property: &'static str,
        /// Raw value as written.
        value: String,
    },
    /// The proximity radius must be finite and strictly positive.
    #[error("distance must be a finite number greater than zero, got {0}")]
    NonPositiveDistance(f32),
}

/// Failure surfaced while a behaviour evaluates a tick or input event.
#[derive(Debug, Error)]
pub enum BehaviourError {
    /// No entity carries the `Name` a selector refers to.
    #[error("no entity named `{0}`")]
    UnknownName(String),
    /// The target entity has no transform or was despawned.
    #[error("target {0} has no resolvable transform")]
    TargetUnresolved(Entity),
    /// The transform hierarchy could not be walked.
    #[error(transparent)]
    Hierarchy(#[from] ComputeGlobalTransformError),
    /// Viewport dimensions must be finite and strictly positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
}
