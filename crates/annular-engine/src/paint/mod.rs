//! Paint model.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//! - the named color palette and color-string parsing
//!
//! Geometry stays in `coords`; shapes carry their colors directly, so there is
//! no separate paint-source enum here.

mod color;
mod palette;

pub use color::Color;
pub use palette::{Palette, default_fill, parse_color};
