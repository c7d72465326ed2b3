//! Pixel to normalised coordinate conversions.
//!
//! Clicks and taps use different conventions: clicks map to
//! normalised device coordinates (`[-1, 1]`, Y up) for ray casting, taps to
//! unit coordinates (`[0, 1]`, Y down) for screen-space layout.

use glam::Vec2;

use super::input::ViewportSize;
use crate::events::NormalizedPoint;

/// Converts a pixel position to normalised device coordinates.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use scene_behaviours::pointer::{ndc_from_client, ViewportSize};
///
/// let viewport = ViewportSize::new(800.0, 600.0).unwrap();
/// let corner = ndc_from_client(Vec2::ZERO, viewport);
/// assert_eq!((corner.x, corner.y), (-1.0, 1.0));
/// ```
#[must_use]
pub fn ndc_from_client(client: Vec2, viewport: ViewportSize) -> NormalizedPoint {
    NormalizedPoint::new(
        (client.x / viewport.width()) * 2.0 - 1.0,
        -(client.y / viewport.height()) * 2.0 + 1.0,
    )
}

/// Converts a pixel position to unit coordinates.
#[must_use]
pub fn unit_from_client(client: Vec2, viewport: ViewportSize) -> NormalizedPoint {
    NormalizedPoint::new(client.x / viewport.width(), client.y / viewport.height())
}
