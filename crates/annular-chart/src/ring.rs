//! A single progress ring.

use std::f32::consts::TAU;

use annular_engine::coords::Vec2;
use annular_engine::paint::Color;
use annular_engine::scene::shapes::{ArcCmd, PolylineCmd};
use annular_engine::surface::{LabelHost, LabelId, LabelStyle, Surface};

/// Stylesheet class every ring info label is tagged with.
pub const INFO_LABEL_CLASS: &str = "progress-circle-info";

/// Query returning a ring's current progress fraction in `[0, 1]`.
///
/// Sources are plain functions over an explicit context `C` — the state of
/// whatever owns the ring — so nothing here captures widget internals.
pub type ProgressFn<C> = Box<dyn FnMut(&mut C) -> f32>;

/// Query returning a ring's current info-label text.
pub type InfoFn<C> = Box<dyn FnMut(&mut C) -> String>;

/// Immutable geometry and styling of one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub arc_width: f32,
    pub fill_color: Color,
    pub outline_color: Color,
    /// Radial direction of the info leader line.
    pub info_line_angle: f32,
}

/// Leader-line layout shared by all rings of one circle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InfoLayout {
    /// Radial distance from the center to the line's bend.
    pub info_line_length: f32,
    /// Length of the horizontal tail after the bend.
    pub horiz_line_length: f32,
}

/// Leader-line endpoints, fixed at construction, plus the label they feed.
struct InfoLine<C> {
    source: InfoFn<C>,
    label: LabelId,
    start: Vec2,
    mid: Vec2,
    end: Vec2,
}

/// One annular arc bound to a progress source.
///
/// Created by [`ProgressCircle::add_entry`](crate::circle::ProgressCircle::add_entry);
/// geometry never changes after construction, only the queried progress and
/// info text do.
pub struct Ring<C> {
    id: usize,
    spec: RingSpec,
    center: Vec2,
    outer_radius: f32,
    surface_origin: Vec2,
    progress: ProgressFn<C>,
    info: Option<InfoLine<C>>,
}

impl<C> Ring<C> {
    pub(crate) fn new(
        id: usize,
        spec: RingSpec,
        center: Vec2,
        layout: InfoLayout,
        surface_origin: Vec2,
        progress: ProgressFn<C>,
        info: Option<InfoFn<C>>,
        labels: &mut dyn LabelHost,
    ) -> Self {
        let outer_radius = spec.inner_radius + spec.arc_width;

        // Without an info source there is no leader line and no label; skip
        // the geometry entirely.
        let info = info.map(|source| {
            let angle = spec.info_line_angle;
            let arc_distance = (spec.inner_radius + outer_radius) / 2.0;

            let start = center + Vec2::polar(angle, arc_distance);
            let mid = center + Vec2::polar(angle, layout.info_line_length);
            // The horizontal tail runs away from the circle: left when the
            // line points left of center, right otherwise. Labels fan out
            // instead of stacking over the rings.
            let tail = if angle.sin() < 0.0 {
                -layout.horiz_line_length
            } else {
                layout.horiz_line_length
            };
            let end = Vec2::new(mid.x + tail, mid.y);

            let label = labels.create_label(LabelStyle {
                color: spec.fill_color,
                class: INFO_LABEL_CLASS,
            });
            // Horizontal placement is fixed here; the vertical coordinate is
            // recomputed on every update because it depends on line height.
            labels.position(label, end + surface_origin);

            InfoLine { source, label, start, mid, end }
        });

        Self { id, spec, center, outer_radius, surface_origin, progress, info }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn spec(&self) -> &RingSpec {
        &self.spec
    }

    /// Queries the sources and redraws this ring for the current tick.
    pub fn update(&mut self, ctx: &mut C, surface: &mut dyn Surface, labels: &mut dyn LabelHost) {
        let progress = (self.progress)(ctx);
        self.draw_arc(progress, surface);

        if let Some(line) = &mut self.info {
            let text = (line.source)(ctx);
            surface.stroke_polyline(PolylineCmd::open(
                vec![line.start, line.mid, line.end],
                self.spec.outline_color,
            ));
            labels.set_text(line.label, &text);

            let line_height = labels.line_height(line.label);
            labels.position(
                line.label,
                Vec2::new(
                    line.end.x + self.surface_origin.x,
                    line.end.y + self.surface_origin.y - line_height / 2.0,
                ),
            );
        }
    }

    fn draw_arc(&self, progress: f32, surface: &mut dyn Surface) {
        // Both radii pull in by arc_width + 1 so the wedge sits inside the
        // ring band with a one-pixel breathing margin.
        let inset = self.spec.arc_width + 1.0;
        let inner = self.spec.inner_radius - inset;
        let outer = self.outer_radius - inset;

        // Ring too close to the center to draw; skip this frame.
        if inner < 0.0 {
            return;
        }

        surface.fill_arc(ArcCmd {
            center: self.center,
            inner_radius: inner,
            outer_radius: outer,
            start_angle: 0.0,
            end_angle: progress * TAU,
            fill: self.spec.fill_color,
            outline: self.spec.outline_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annular_engine::scene::DrawCmd;
    use annular_engine::surface::{RecordingLabelHost, RecordingSurface};

    fn spec(inner_radius: f32, info_line_angle: f32) -> RingSpec {
        RingSpec {
            inner_radius,
            arc_width: 5.0,
            fill_color: Color::from_rgba8(106, 177, 101, 255),
            outline_color: Color::from_rgba8(106, 177, 101, 255),
            info_line_angle,
        }
    }

    fn layout() -> InfoLayout {
        InfoLayout { info_line_length: 60.0, horiz_line_length: 10.0 }
    }

    fn fixtures() -> (RecordingSurface, RecordingLabelHost) {
        (
            RecordingSurface::new(Vec2::new(200.0, 200.0)),
            RecordingLabelHost::new(),
        )
    }

    // ── arc drawing ───────────────────────────────────────────────────────

    #[test]
    fn update_draws_arc_with_inset_radii() {
        let (mut surface, mut labels) = fixtures();
        let mut ring: Ring<()> = Ring::new(
            0,
            spec(30.0, 0.5),
            Vec2::new(100.0, 100.0),
            layout(),
            Vec2::zero(),
            Box::new(|_| 0.5),
            None,
            &mut labels,
        );

        ring.update(&mut (), &mut surface, &mut labels);

        let [DrawCmd::Arc(arc)] = surface.commands() else {
            panic!("expected exactly one arc, got {:?}", surface.commands());
        };
        assert_eq!(arc.inner_radius, 30.0 - 6.0);
        assert_eq!(arc.outer_radius, 35.0 - 6.0);
        assert!((arc.sweep() - 0.5 * TAU).abs() < 1e-5);
    }

    #[test]
    fn degenerate_inset_skips_draw() {
        let (mut surface, mut labels) = fixtures();
        // inner_radius 4 with arc_width 5 insets to -2: nothing to draw.
        let mut ring: Ring<()> = Ring::new(
            0,
            spec(4.0, 0.5),
            Vec2::new(100.0, 100.0),
            layout(),
            Vec2::zero(),
            Box::new(|_| 1.0),
            None,
            &mut labels,
        );

        ring.update(&mut (), &mut surface, &mut labels);
        assert!(surface.commands().is_empty());
    }

    // ── info line ─────────────────────────────────────────────────────────

    #[test]
    fn no_info_source_creates_no_label() {
        let (_, mut labels) = fixtures();
        let _ring: Ring<()> = Ring::new(
            0,
            spec(30.0, 0.5),
            Vec2::new(100.0, 100.0),
            layout(),
            Vec2::zero(),
            Box::new(|_| 0.0),
            None,
            &mut labels,
        );
        assert!(labels.is_empty());
    }

    #[test]
    fn info_line_fans_right_for_positive_sine() {
        let (mut surface, mut labels) = fixtures();
        let mut ring: Ring<()> = Ring::new(
            0,
            spec(30.0, std::f32::consts::FRAC_PI_4),
            Vec2::new(100.0, 100.0),
            layout(),
            Vec2::zero(),
            Box::new(|_| 0.25),
            Some(Box::new(|_| "cpu".to_string())),
            &mut labels,
        );

        ring.update(&mut (), &mut surface, &mut labels);

        let Some(DrawCmd::Polyline(line)) = surface
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCmd::Polyline(_)))
        else {
            panic!("expected a leader line");
        };
        let [_, mid, end] = line.points.as_slice() else {
            panic!("leader line has three points");
        };
        assert_eq!(end.y, mid.y);
        assert!((end.x - mid.x - 10.0).abs() < 1e-5, "tail points right");
    }

    #[test]
    fn info_line_fans_left_for_negative_sine() {
        let (mut surface, mut labels) = fixtures();
        let mut ring: Ring<()> = Ring::new(
            0,
            spec(30.0, -std::f32::consts::FRAC_PI_4),
            Vec2::new(100.0, 100.0),
            layout(),
            Vec2::zero(),
            Box::new(|_| 0.25),
            Some(Box::new(|_| "mem".to_string())),
            &mut labels,
        );

        ring.update(&mut (), &mut surface, &mut labels);

        let Some(DrawCmd::Polyline(line)) = surface
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCmd::Polyline(_)))
        else {
            panic!("expected a leader line");
        };
        let [_, mid, end] = line.points.as_slice() else {
            panic!("leader line has three points");
        };
        assert!((mid.x - end.x - 10.0).abs() < 1e-5, "tail points left");
    }

    #[test]
    fn info_label_recenters_vertically_each_update() {
        let (mut surface, mut labels) = fixtures();
        let origin = Vec2::new(7.0, 11.0);
        let mut ring: Ring<()> = Ring::new(
            0,
            spec(30.0, std::f32::consts::FRAC_PI_4),
            Vec2::new(100.0, 100.0),
            layout(),
            origin,
            Box::new(|_| 0.25),
            Some(Box::new(|_| "disk".to_string())),
            &mut labels,
        );

        ring.update(&mut (), &mut surface, &mut labels);

        let [record] = labels.records() else {
            panic!("expected one info label");
        };
        assert_eq!(record.text, "disk");
        let expected_y = ring.info.as_ref().unwrap().end.y + origin.y
            - annular_engine::surface::FALLBACK_LINE_HEIGHT / 2.0;
        assert!((record.pos.y - expected_y).abs() < 1e-5);
    }
}
