//! Input messages and viewport state consumed by the pointer normalisers.
//!
//! The host bridges its windowing layer into these types. Keeping them
//! explicit means the normalisers never read global window state.

use bevy::prelude::*;

use crate::error::BehaviourError;

/// Which pointer button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PointerButton {
    /// Main button; left mouse button or pen contact.
    Primary,
    /// Secondary button; usually right mouse button.
    Secondary,
    /// Wheel or middle button.
    Auxiliary,
    /// Any further button, by host index.
    Other(u16),
}

/// A pointer button was pressed at `client`, in viewport pixels from the
/// top-left corner.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PointerPressed {
    /// Pixel position of the press.
    pub client: Vec2,
    /// Button that went down.
    pub button: PointerButton,
}

impl PointerPressed {
    /// Press of the primary button at `client`.
    #[must_use]
    pub const fn primary(client: Vec2) -> Self {
        Self {
            client,
            button: PointerButton::Primary,
        }
    }
}

/// One or more touches began. `touches` lists every active touch point in
/// viewport pixels; hosts may deliver an empty list.
#[derive(Message, Debug, Clone, PartialEq, Default)]
pub struct TouchStarted {
    /// Active touch points, first touch first.
    pub touches: Vec<Vec2>,
}

/// Size of the viewport pointer positions are measured against.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    width: f32,
    height: f32,
}

impl ViewportSize {
    /// Creates a viewport of `width` by `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviourError::InvalidViewport`] unless both dimensions are
    /// finite and strictly positive.
    pub fn new(width: f32, height: f32) -> Result<Self, BehaviourError> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(BehaviourError::InvalidViewport { width, height })
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(self) -> f32 {
        self.height
    }
}
