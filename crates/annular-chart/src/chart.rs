//! The animated pie-chart widget.
//!
//! Binds one host element to one [`ProgressCircle`], reads its configuration
//! from data attributes, and animates a single progress value from 0 toward
//! the target while keeping a center label in lock-step with the frames.

use std::fmt;
use std::time::{Duration, Instant};

use annular_engine::coords::Vec2;
use annular_engine::paint::{Color, Palette, default_fill};
use annular_engine::surface::{LabelHost, LabelId, LabelStyle, Surface};

use crate::circle::{ProgressCircle, RingParams};
use crate::host::{HostTree, NodeId};
use crate::waypoint::{Viewport, Waypoint};

// Data attributes read once at mount.
/// Target value as a percentage, `0`–`100`. Required.
pub const ATTR_VALUE: &str = "chart-value";
/// Display value for the center label; defaults to the target percentage.
pub const ATTR_LABEL: &str = "chart-label";
/// Arc thickness in pixels; defaults to the circle's stock width.
pub const ATTR_WIDTH: &str = "chart-width";
/// Fill color: a palette name or a literal (`#rrggbb`, `rgba(...)`).
pub const ATTR_COLOR: &str = "chart-color";
/// Unit suffix appended to the label, e.g. `%`.
pub const ATTR_UNITS: &str = "chart-units";

/// Stylesheet class of the center value label.
pub const VALUE_LABEL_CLASS: &str = "pie-chart-value";

/// Animation tick; faster than the stock redraw interval for perceived
/// smoothness.
const FAST_INTERVAL: Duration = Duration::from_millis(10);

/// Progress added per tick. Fixed, so total animation time scales with the
/// target fraction: larger percentages animate longer.
const PROGRESS_STEP: f32 = 0.01;

/// Widget options not carried by data attributes. Attributes win where both
/// exist.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub color: Option<String>,
    pub units: String,
    /// Rebuild geometry on viewport resizes (ignored on mobile).
    pub responsive: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { color: None, units: String::new(), responsive: true }
    }
}

/// Hosting environment capabilities.
#[derive(Debug, Copy, Clone)]
pub struct Env {
    /// Touch/mobile context: skip the entry animation, snap to the target.
    pub mobile: bool,
    /// Whether a scroll-entry trigger is available. Without one the chart
    /// animates immediately on mount.
    pub waypoints: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self { mobile: false, waypoints: true }
    }
}

/// Widget lifecycle. `Complete` is a one-way latch; only a resize-triggered
/// reconstruction returns the chart to `Ready`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, waiting for the scroll trigger (or for `animate`).
    Ready,
    /// Ticking toward the target.
    Animating,
    /// Target reached; the schedule is stopped and the final label shown.
    Complete,
}

/// Error from [`PieChart::mount`].
#[derive(Debug, Clone, PartialEq)]
pub enum MountError {
    /// The node already hosts a widget.
    AlreadyMounted,
    /// The required value attribute is absent.
    MissingValue,
    /// The value attribute is not a number.
    InvalidValue(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::AlreadyMounted => write!(f, "element already hosts a chart"),
            MountError::MissingValue => {
                write!(f, "missing required attribute `{ATTR_VALUE}`")
            }
            MountError::InvalidValue(v) => {
                write!(f, "attribute `{ATTR_VALUE}` is not a number: {v:?}")
            }
        }
    }
}

impl std::error::Error for MountError {}

/// Center-label display value: numeric labels animate with the progress,
/// literal labels are shown as-is.
#[derive(Debug, Clone, PartialEq)]
enum LabelValue {
    Number(f64),
    Text(String),
}

impl LabelValue {
    fn parse(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(n) => LabelValue::Number(n),
            Err(_) => LabelValue::Text(s.to_string()),
        }
    }
}

/// The widget's animated state. Ring progress sources query this through
/// [`advance`](Self::advance); the chart itself never reaches back into the
/// circle from inside a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    target: f32,
    current: f32,
    /// One-way latch set when the target is reached.
    animated: bool,
    label_value: LabelValue,
    units: String,
    label_text: String,
}

impl ProgressState {
    /// One animation step. Returns the fraction the ring should draw.
    ///
    /// At or past the target: latch `animated`, render the final label, and
    /// return the fraction clamped to the target. Otherwise step by
    /// [`PROGRESS_STEP`] and render the interpolated label.
    fn advance(&mut self) -> f32 {
        if self.current >= self.target {
            self.animated = true;
            self.label_text = self.final_label();
            return self.current.min(self.target);
        }

        self.current += PROGRESS_STEP;
        self.label_text = match &self.label_value {
            LabelValue::Number(n) => {
                let shown = (self.current / self.target) as f64 * n;
                format!("{}{}", shown.round(), self.units)
            }
            LabelValue::Text(t) => format!("{}{}", t, self.units),
        };
        self.current
    }

    fn final_label(&self) -> String {
        match &self.label_value {
            LabelValue::Number(n) => format!("{}{}", n, self.units),
            LabelValue::Text(t) => format!("{}{}", t, self.units),
        }
    }
}

/// One pie chart bound to one host element.
pub struct PieChart {
    node: NodeId,
    options: ChartOptions,
    env: Env,
    waypoint: Waypoint,
    phase: Phase,
    state: ProgressState,
    circle: ProgressCircle<ProgressState>,
    value_label: LabelId,
    fill: Color,
    /// Explicit arc thickness from the width attribute, if any.
    arc_width: Option<f32>,
}

// Manual impl: the circle holds boxed progress sources, so Debug cannot be
// derived. The animated state is what matters when a test prints a chart.
impl fmt::Debug for PieChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieChart")
            .field("node", &self.node)
            .field("phase", &self.phase)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PieChart {
    /// Binds a chart to `node`, reading its attributes and sizing geometry
    /// from the element's measured width.
    ///
    /// With a waypoint available (and not on mobile) the chart stays `Ready`
    /// until [`on_scroll`](Self::on_scroll) sees it enter the viewport;
    /// otherwise animation starts immediately. On mobile the displayed
    /// progress is pre-set to the target, so the first tick completes the
    /// chart without the entry animation.
    pub fn mount(
        tree: &mut HostTree,
        node: NodeId,
        options: ChartOptions,
        env: Env,
        palette: &Palette,
        labels: &mut dyn LabelHost,
        now: Instant,
    ) -> Result<Self, MountError> {
        if tree.is_ready(node) {
            return Err(MountError::AlreadyMounted);
        }

        let raw = tree.attr(node, ATTR_VALUE).ok_or(MountError::MissingValue)?;
        let percent: f32 = raw
            .trim()
            .parse()
            .map_err(|_| MountError::InvalidValue(raw.to_string()))?;
        let target = (percent / 100.0).clamp(0.0, 1.0);

        let label_value = match tree.attr(node, ATTR_LABEL) {
            Some(s) => LabelValue::parse(s),
            None => LabelValue::Number(percent as f64),
        };
        let units = tree
            .attr(node, ATTR_UNITS)
            .map(str::to_string)
            .unwrap_or_else(|| options.units.clone());
        let arc_width = tree
            .attr(node, ATTR_WIDTH)
            .and_then(|s| s.trim().parse::<f32>().ok());

        let color_spec = tree
            .attr(node, ATTR_COLOR)
            .map(str::to_string)
            .or_else(|| options.color.clone());
        let fill = color_spec
            .as_deref()
            .and_then(|s| palette.resolve(s))
            .unwrap_or_else(default_fill);

        tree.mark_ready(node);

        let width = tree.measure_width(node);
        let circle = Self::build_circle(width, arc_width, tree.abs_pos(node));
        log::debug!("chart mounted: target {target}, width {width}");

        let value_label = labels.create_label(LabelStyle { color: fill, class: VALUE_LABEL_CLASS });
        labels.position(value_label, tree.abs_pos(node) + Vec2::new(width, width) * 0.5);

        let mut chart = Self {
            node,
            options,
            env,
            waypoint: Waypoint::default(),
            phase: Phase::Ready,
            state: ProgressState {
                target,
                current: 0.0,
                animated: false,
                label_value,
                units,
                label_text: String::new(),
            },
            circle,
            value_label,
            fill,
            arc_width,
        };

        if env.mobile {
            // Constrained device: present the final value, no entry animation.
            chart.state.current = target;
        }
        if env.mobile || !env.waypoints {
            chart.animate(now, labels);
        }

        Ok(chart)
    }

    fn build_circle(
        width: f32,
        arc_width: Option<f32>,
        origin: Vec2,
    ) -> ProgressCircle<ProgressState> {
        let mut circle = ProgressCircle::new(Vec2::new(width, width))
            .min_radius(width / 2.0)
            .surface_origin(origin);
        if let Some(w) = arc_width {
            circle = circle.arc_width(w);
        }
        circle
    }

    // ── state machine ─────────────────────────────────────────────────────

    /// Adds the chart's single ring and arms the fast tick. Only transitions
    /// out of `Ready`; calling it while `Animating` or `Complete` is a no-op.
    pub fn animate(&mut self, now: Instant, labels: &mut dyn LabelHost) {
        if self.phase != Phase::Ready {
            return;
        }
        self.circle
            .add_entry(
                RingParams::new(self.fill, Box::new(ProgressState::advance)),
                labels,
            )
            .start(Some(FAST_INTERVAL), now);
        self.phase = Phase::Animating;
    }

    /// Feeds a scroll position; starts the animation once the element enters
    /// the viewport past the waypoint threshold.
    pub fn on_scroll(
        &mut self,
        tree: &HostTree,
        viewport: Viewport,
        now: Instant,
        labels: &mut dyn LabelHost,
    ) {
        if self.phase == Phase::Ready
            && self.waypoint.crossed(tree.abs_pos(self.node).y, viewport)
        {
            self.animate(now, labels);
        }
    }

    /// Drives all due animation ticks: each tick clears and redraws the
    /// surface, then syncs the center label. Reaching the target stops the
    /// schedule and latches `Complete`.
    pub fn poll(&mut self, now: Instant, surface: &mut dyn Surface, labels: &mut dyn LabelHost) {
        if self.phase != Phase::Animating {
            return;
        }
        let due = self.circle.due_ticks(now);
        for _ in 0..due {
            self.circle.tick(&mut self.state, surface, labels);
            labels.set_text(self.value_label, &self.state.label_text);
            if self.state.animated {
                self.circle.stop();
                self.phase = Phase::Complete;
                log::debug!("chart complete: {}", self.state.label_text);
                break;
            }
        }
    }

    /// Viewport resize: rebuilds the geometry from the element's new width.
    ///
    /// No in-place rescale is attempted; the circle is reconstructed, the
    /// displayed progress resets to 0, and a chart that had started animating
    /// (or finished) re-enters `Animating` from scratch. Disabled by the
    /// responsive option and on mobile.
    pub fn on_resize(&mut self, tree: &HostTree, now: Instant, labels: &mut dyn LabelHost) {
        if !self.options.responsive || self.env.mobile {
            return;
        }
        self.circle.stop();

        let width = tree.measure_width(self.node);
        self.circle = Self::build_circle(width, self.arc_width, tree.abs_pos(self.node));
        labels.position(self.value_label, tree.abs_pos(self.node) + Vec2::new(width, width) * 0.5);

        self.state.current = 0.0;
        self.state.animated = false;

        let had_started = matches!(self.phase, Phase::Animating | Phase::Complete);
        self.phase = Phase::Ready;
        if had_started {
            self.animate(now, labels);
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently displayed fraction in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.current.min(self.state.target)
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.state.target
    }

    /// Text of the center label as of the last tick.
    #[inline]
    pub fn label_text(&self) -> &str {
        &self.state.label_text
    }

    #[inline]
    pub fn fill(&self) -> Color {
        self.fill
    }
}
