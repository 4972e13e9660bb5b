//! Scroll-entry trigger.
//!
//! Charts below the fold start animating only once scrolled into view, so the
//! animation is not wasted off-screen. The host shell feeds its current
//! [`Viewport`] to [`PieChart::on_scroll`](crate::chart::PieChart::on_scroll),
//! which consults a [`Waypoint`].

/// Visible scroll window of the hosting document.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Document y-coordinate of the viewport's top edge.
    pub scroll_top: f32,
    pub height: f32,
}

/// Threshold test for an element entering the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Waypoint {
    /// Fraction of the viewport height the element's top must rise above.
    /// `0.85` means "top of the element at 85% of the viewport".
    pub offset: f32,
}

impl Waypoint {
    pub const fn new(offset: f32) -> Self {
        Self { offset }
    }

    /// True once `element_top` (document coordinates) has entered the
    /// viewport past the offset threshold.
    pub fn crossed(&self, element_top: f32, viewport: Viewport) -> bool {
        element_top - viewport.scroll_top <= viewport.height * self.offset
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Self::new(0.85)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_threshold_has_not_crossed() {
        let w = Waypoint::default();
        let view = Viewport { scroll_top: 0.0, height: 1000.0 };
        assert!(!w.crossed(900.0, view));
    }

    #[test]
    fn element_at_threshold_crosses() {
        let w = Waypoint::default();
        let view = Viewport { scroll_top: 0.0, height: 1000.0 };
        assert!(w.crossed(850.0, view));
        assert!(w.crossed(100.0, view));
    }

    #[test]
    fn scrolling_moves_the_threshold() {
        let w = Waypoint::default();
        let far_down = 2000.0;
        assert!(!w.crossed(far_down, Viewport { scroll_top: 0.0, height: 1000.0 }));
        assert!(w.crossed(far_down, Viewport { scroll_top: 1200.0, height: 1000.0 }));
    }
}
