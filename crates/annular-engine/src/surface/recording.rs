use crate::coords::Vec2;
use crate::scene::shapes::{ArcCmd, PolylineCmd};
use crate::scene::{DrawCmd, DrawList};
use crate::text::TextMetrics;

use super::{LabelHost, LabelId, LabelStyle, Surface};

/// Line height reported when no font metrics are configured.
pub const FALLBACK_LINE_HEIGHT: f32 = 16.0;

/// [`Surface`] backed by the in-memory draw stream.
///
/// Tests and headless runs inspect [`commands`](Self::commands) after driving
/// the widget; [`clear_count`](Self::clear_count) makes "the surface was never
/// touched" observable.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Vec2,
    list: DrawList,
    clears: u64,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self { size, list: DrawList::new(), clears: 0 }
    }

    /// Commands recorded since the last clear, in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        self.list.items()
    }

    /// Number of times [`Surface::clear`] has run.
    #[inline]
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.list.clear();
        self.clears += 1;
    }

    fn fill_arc(&mut self, cmd: ArcCmd) {
        self.list.push_arc(cmd);
    }

    fn stroke_polyline(&mut self, cmd: PolylineCmd) {
        self.list.push_polyline(cmd);
    }
}

/// One label held by a [`RecordingLabelHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    pub style: LabelStyle,
    pub pos: Vec2,
    pub text: String,
}

/// [`LabelHost`] that stores labels in memory.
///
/// With [`with_metrics`](Self::with_metrics) the reported line height comes
/// from real font metrics; otherwise [`FALLBACK_LINE_HEIGHT`] is used.
pub struct RecordingLabelHost {
    labels: Vec<LabelRecord>,
    metrics: Option<TextMetrics>,
}

impl RecordingLabelHost {
    pub fn new() -> Self {
        Self { labels: Vec::new(), metrics: None }
    }

    pub fn with_metrics(metrics: TextMetrics) -> Self {
        Self { labels: Vec::new(), metrics: Some(metrics) }
    }

    #[inline]
    pub fn label(&self, id: LabelId) -> Option<&LabelRecord> {
        self.labels.get(id.0)
    }

    /// All labels in creation order, for assertions on labels whose ids the
    /// caller never saw.
    #[inline]
    pub fn records(&self) -> &[LabelRecord] {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for RecordingLabelHost {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelHost for RecordingLabelHost {
    fn create_label(&mut self, style: LabelStyle) -> LabelId {
        let id = LabelId(self.labels.len());
        self.labels.push(LabelRecord { style, pos: Vec2::zero(), text: String::new() });
        id
    }

    fn set_text(&mut self, id: LabelId, text: &str) {
        if let Some(label) = self.labels.get_mut(id.0) {
            if label.text != text {
                label.text.clear();
                label.text.push_str(text);
            }
        }
    }

    fn position(&mut self, id: LabelId, pos: Vec2) {
        if let Some(label) = self.labels.get_mut(id.0) {
            label.pos = pos;
        }
    }

    fn line_height(&self, _id: LabelId) -> f32 {
        self.metrics
            .as_ref()
            .map(TextMetrics::line_height)
            .unwrap_or(FALLBACK_LINE_HEIGHT)
    }
}
