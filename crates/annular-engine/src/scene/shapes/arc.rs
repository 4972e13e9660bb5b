use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Annular wedge: the region between two concentric radii, swept from
/// `start_angle` to `end_angle`.
///
/// Angles follow the engine convention (radians clockwise from the top of the
/// circle), so a full progress arc runs from `0.0` to `progress * TAU`.
/// Filled with `fill`, outlined with `outline`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub fill: Color,
    pub outline: Color,
}

impl ArcCmd {
    /// Swept angle in radians.
    #[inline]
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

impl DrawList {
    /// Records an annular wedge.
    #[inline]
    pub fn push_arc(&mut self, cmd: ArcCmd) {
        self.push(DrawCmd::Arc(cmd));
    }
}
