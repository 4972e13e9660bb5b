use crate::coords::Vec2;
use crate::paint::Color;

/// Opaque handle to a label created through a [`LabelHost`](super::LabelHost).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LabelId(pub(crate) usize);

/// Construction-time styling for a label.
///
/// `class` tags the label for external stylesheet targeting; the host decides
/// what to do with it (a DOM backend would emit it as a CSS class).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub class: &'static str,
}

/// Host for absolutely positioned text labels.
///
/// Labels are persistent: created once per ring (or per widget), then updated
/// every tick. Vertical placement is the caller's job because it depends on
/// [`line_height`](Self::line_height), which may change with the rendered font.
pub trait LabelHost {
    fn create_label(&mut self, style: LabelStyle) -> LabelId;

    /// Replaces the label's text. Unknown ids are ignored.
    fn set_text(&mut self, id: LabelId, text: &str);

    /// Moves the label's top-left corner. Unknown ids are ignored.
    fn position(&mut self, id: LabelId, pos: Vec2);

    /// Height of one rendered text line, used to vertically center labels on
    /// their leader line.
    fn line_height(&self, id: LabelId) -> f32;
}
