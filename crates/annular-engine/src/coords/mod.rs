//! Coordinate types shared by the scene and the widget layer.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are measured in radians from the top of a circle (12 o'clock),
//! increasing clockwise. This matches the widget's draw convention, where a
//! progress arc always starts at the top.

mod vec2;

pub use vec2::Vec2;
