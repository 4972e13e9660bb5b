use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Stroked chain of line segments.
///
/// Used for the three-point info leader line; `close` joins the last point
/// back to the first for callers that want a closed outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub close: bool,
}

impl PolylineCmd {
    /// Open segment chain.
    #[inline]
    pub fn open(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color, close: false }
    }
}

impl DrawList {
    /// Records a stroked polyline.
    #[inline]
    pub fn push_polyline(&mut self, cmd: PolylineCmd) {
        self.push(DrawCmd::Polyline(cmd));
    }
}
