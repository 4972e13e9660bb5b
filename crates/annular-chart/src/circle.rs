//! The composite drawing controller owning all rings on one surface.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use annular_engine::coords::Vec2;
use annular_engine::paint::Color;
use annular_engine::surface::{LabelHost, Surface};
use annular_engine::time::{DRAW_INTERVAL, Ticker};

use crate::ring::{InfoFn, InfoLayout, ProgressFn, Ring, RingSpec};

/// Sources and styling for one ring added via
/// [`ProgressCircle::add_entry`].
pub struct RingParams<C> {
    pub fill_color: Color,
    /// Defaults to the fill color when unset.
    pub outline_color: Option<Color>,
    pub progress: ProgressFn<C>,
    pub info: Option<InfoFn<C>>,
}

impl<C> RingParams<C> {
    pub fn new(fill_color: Color, progress: ProgressFn<C>) -> Self {
        Self { fill_color, outline_color: None, progress, info: None }
    }

    pub fn outline_color(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    pub fn info(mut self, source: InfoFn<C>) -> Self {
        self.info = Some(source);
        self
    }
}

/// Ordered collection of concentric [`Ring`]s sharing one surface, plus the
/// periodic redraw schedule driving them.
///
/// Layout invariant: the nth ring added has
/// `inner_radius = min_radius + n * (gap_width + arc_width)`, so rings never
/// overlap. Insertion order is draw order.
///
/// `C` is the context the ring sources query; see
/// [`ProgressFn`](crate::ring::ProgressFn).
pub struct ProgressCircle<C> {
    center: Vec2,
    min_radius: f32,
    arc_width: f32,
    gap_width: f32,
    info_layout: InfoLayout,
    info_line_base_angle: f32,
    info_line_angle_interval: f32,
    surface_origin: Vec2,
    rings: Vec<Ring<C>>,
    ticker: Ticker,
}

impl<C> ProgressCircle<C> {
    /// Circle with default layout, centered on a surface of `surface_size`.
    ///
    /// Defaults: `min_radius` 15, `arc_width` 5, `gap_width` 3, leader line
    /// 60 px with a 10 px tail, base angle π/6, fan interval π/8.
    pub fn new(surface_size: Vec2) -> Self {
        Self {
            center: surface_size * 0.5,
            min_radius: 15.0,
            arc_width: 5.0,
            gap_width: 3.0,
            info_layout: InfoLayout { info_line_length: 60.0, horiz_line_length: 10.0 },
            info_line_base_angle: PI / 6.0,
            info_line_angle_interval: PI / 8.0,
            surface_origin: Vec2::zero(),
            rings: Vec::new(),
            ticker: Ticker::new(),
        }
    }

    // ── layout configuration ──────────────────────────────────────────────

    pub fn min_radius(mut self, v: f32) -> Self {
        self.min_radius = v;
        self
    }

    pub fn arc_width(mut self, v: f32) -> Self {
        self.arc_width = v;
        self
    }

    pub fn gap_width(mut self, v: f32) -> Self {
        self.gap_width = v;
        self
    }

    pub fn center(mut self, v: Vec2) -> Self {
        self.center = v;
        self
    }

    pub fn info_line_length(mut self, v: f32) -> Self {
        self.info_layout.info_line_length = v;
        self
    }

    pub fn horiz_line_length(mut self, v: f32) -> Self {
        self.info_layout.horiz_line_length = v;
        self
    }

    pub fn info_line_base_angle(mut self, v: f32) -> Self {
        self.info_line_base_angle = v;
        self
    }

    pub fn info_line_angle_interval(mut self, v: f32) -> Self {
        self.info_line_angle_interval = v;
        self
    }

    /// Document offset of the surface, added to label positions so labels
    /// land next to the rendered circle rather than at the document origin.
    pub fn surface_origin(mut self, v: Vec2) -> Self {
        self.surface_origin = v;
        self
    }

    // ── composition ───────────────────────────────────────────────────────

    /// Appends a ring one band further out than the last, chaining.
    ///
    /// The new ring's leader line fans out by one angle interval per existing
    /// ring. `labels` is only touched when the entry carries an info source.
    pub fn add_entry(&mut self, params: RingParams<C>, labels: &mut dyn LabelHost) -> &mut Self {
        let n = self.rings.len();
        let spec = RingSpec {
            inner_radius: self.min_radius + n as f32 * (self.gap_width + self.arc_width),
            arc_width: self.arc_width,
            fill_color: params.fill_color,
            outline_color: params.outline_color.unwrap_or(params.fill_color),
            info_line_angle: self.info_line_base_angle
                + n as f32 * self.info_line_angle_interval,
        };
        log::debug!(
            "ring {n} added: inner_radius {}, angle {:.3}",
            spec.inner_radius,
            spec.info_line_angle
        );

        self.rings.push(Ring::new(
            n,
            spec,
            self.center,
            self.info_layout,
            self.surface_origin,
            params.progress,
            params.info,
            labels,
        ));
        self
    }

    #[inline]
    pub fn rings(&self) -> &[Ring<C>] {
        &self.rings
    }

    // ── schedule ──────────────────────────────────────────────────────────

    /// Arms the redraw schedule. `None` means the default 33 ms interval.
    /// Idempotent while running.
    pub fn start(&mut self, interval: Option<Duration>, now: Instant) -> &mut Self {
        self.ticker.start(interval.unwrap_or(DRAW_INTERVAL), now);
        self
    }

    /// Detaches the redraw schedule. Idempotent; safe when never started.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Ticks that fell due by `now`. The caller runs [`tick`](Self::tick)
    /// once per due tick, which lets it stop the schedule between ticks.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        self.ticker.due_ticks(now)
    }

    /// One redraw pass: clears the surface, then updates every ring in
    /// insertion order.
    pub fn tick(&mut self, ctx: &mut C, surface: &mut dyn Surface, labels: &mut dyn LabelHost) {
        surface.clear();
        for ring in &mut self.rings {
            ring.update(ctx, surface, labels);
        }
    }

    /// Runs all due ticks back to back; returns how many ran. Convenience for
    /// hosts with no per-tick bookkeeping.
    pub fn run(
        &mut self,
        now: Instant,
        ctx: &mut C,
        surface: &mut dyn Surface,
        labels: &mut dyn LabelHost,
    ) -> u32 {
        let due = self.due_ticks(now);
        for _ in 0..due {
            self.tick(ctx, surface, labels);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annular_engine::scene::DrawCmd;
    use annular_engine::surface::{RecordingLabelHost, RecordingSurface};

    const MS: Duration = Duration::from_millis(1);

    fn fixtures() -> (RecordingSurface, RecordingLabelHost) {
        (
            RecordingSurface::new(Vec2::new(200.0, 200.0)),
            RecordingLabelHost::new(),
        )
    }

    fn constant(progress: f32) -> ProgressFn<()> {
        Box::new(move |_| progress)
    }

    // ── layout invariant ──────────────────────────────────────────────────

    #[test]
    fn nth_ring_sits_one_band_further_out() {
        let (_, mut labels) = fixtures();
        let mut circle: ProgressCircle<()> = ProgressCircle::new(Vec2::new(200.0, 200.0))
            .min_radius(15.0)
            .arc_width(5.0)
            .gap_width(3.0);

        for i in 0..4 {
            circle.add_entry(
                RingParams::new(Color::from_rgba8(0, 136, 204, 255), constant(i as f32 * 0.2)),
                &mut labels,
            );
        }

        for (n, ring) in circle.rings().iter().enumerate() {
            assert_eq!(ring.spec().inner_radius, 15.0 + n as f32 * (3.0 + 5.0));
        }
        // Scenario from the contract: second ring at 15 + 1·(3+5) = 23.
        assert_eq!(circle.rings()[1].spec().inner_radius, 23.0);
    }

    #[test]
    fn info_angles_fan_out_per_ring() {
        let (_, mut labels) = fixtures();
        let mut circle: ProgressCircle<()> = ProgressCircle::new(Vec2::new(200.0, 200.0))
            .info_line_base_angle(0.5)
            .info_line_angle_interval(0.25);

        circle
            .add_entry(
                RingParams::new(Color::transparent(), constant(0.1)),
                &mut labels,
            )
            .add_entry(
                RingParams::new(Color::transparent(), constant(0.2)),
                &mut labels,
            );

        assert_eq!(circle.rings()[0].spec().info_line_angle, 0.5);
        assert_eq!(circle.rings()[1].spec().info_line_angle, 0.75);
    }

    // ── tick behavior ─────────────────────────────────────────────────────

    #[test]
    fn tick_clears_then_draws_rings_in_insertion_order() {
        let (mut surface, mut labels) = fixtures();
        let mut circle: ProgressCircle<()> =
            ProgressCircle::new(Vec2::new(200.0, 200.0)).min_radius(30.0);

        circle
            .add_entry(RingParams::new(Color::from_rgba8(1, 1, 1, 255), constant(0.3)), &mut labels)
            .add_entry(RingParams::new(Color::from_rgba8(2, 2, 2, 255), constant(0.6)), &mut labels);

        circle.tick(&mut (), &mut surface, &mut labels);
        circle.tick(&mut (), &mut surface, &mut labels);

        // Each tick starts from a cleared surface.
        assert_eq!(surface.clear_count(), 2);
        let radii: Vec<f32> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCmd::Arc(a) => a.inner_radius,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        // Innermost ring first.
        assert_eq!(radii.len(), 2);
        assert!(radii[0] < radii[1]);
    }

    #[test]
    fn stop_before_first_tick_leaves_surface_untouched() {
        let (mut surface, mut labels) = fixtures();
        let t0 = Instant::now();
        let mut circle: ProgressCircle<()> = ProgressCircle::new(Vec2::new(200.0, 200.0));
        circle.add_entry(RingParams::new(Color::transparent(), constant(0.5)), &mut labels);

        circle.start(Some(10 * MS), t0);
        circle.stop();

        assert_eq!(circle.run(t0 + 100 * MS, &mut (), &mut surface, &mut labels), 0);
        assert_eq!(surface.clear_count(), 0);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn stop_twice_is_harmless() {
        let mut circle: ProgressCircle<()> = ProgressCircle::new(Vec2::new(200.0, 200.0));
        circle.stop();
        circle.stop();
        assert!(!circle.is_running());
    }

    #[test]
    fn run_executes_all_due_ticks() {
        let (mut surface, mut labels) = fixtures();
        let t0 = Instant::now();
        let mut circle: ProgressCircle<()> =
            ProgressCircle::new(Vec2::new(200.0, 200.0)).min_radius(30.0);
        circle.add_entry(RingParams::new(Color::transparent(), constant(0.5)), &mut labels);

        circle.start(None, t0); // default 33 ms interval
        let ran = circle.run(t0 + 70 * MS, &mut (), &mut surface, &mut labels);

        assert_eq!(ran, 2);
        assert_eq!(surface.clear_count(), 2);
    }
}
