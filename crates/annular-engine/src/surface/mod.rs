//! Render-target traits and the recording backend.
//!
//! The widget layer never draws to a concrete backend directly. It talks to
//! two small traits:
//! - [`Surface`] — the shared drawing surface all rings of one widget render
//!   onto (clear + shape draws)
//! - [`LabelHost`] — creation and placement of absolutely positioned text
//!   labels living outside the surface
//!
//! [`RecordingSurface`] and [`RecordingLabelHost`] implement both against the
//! in-memory draw stream, which is what tests and headless runs use.

mod label;
mod recording;

pub use label::{LabelHost, LabelId, LabelStyle};
pub use recording::{FALLBACK_LINE_HEIGHT, LabelRecord, RecordingLabelHost, RecordingSurface};

use crate::coords::Vec2;
use crate::scene::shapes::{ArcCmd, PolylineCmd};

/// Drawing surface shared by every ring of one widget.
pub trait Surface {
    /// Surface dimensions in logical pixels.
    fn size(&self) -> Vec2;

    /// Erases the whole surface. Called once per tick before any ring draws,
    /// so a frame never shows partial state.
    fn clear(&mut self);

    /// Fills and outlines an annular wedge.
    fn fill_arc(&mut self, cmd: ArcCmd);

    /// Strokes a segment chain (info leader lines).
    fn stroke_polyline(&mut self, cmd: PolylineCmd);
}
