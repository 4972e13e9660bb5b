use std::fmt;

/// Error returned by [`TextMetrics::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Measurement handle for one font at one pixel size.
///
/// The font is immutable after loading. Hosts without a font fall back to the
/// fixed line height in `surface::FALLBACK_LINE_HEIGHT`.
pub struct TextMetrics {
    font: fontdue::Font,
    size: f32,
}

impl TextMetrics {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font, size })
    }

    /// Height of one text line in logical pixels.
    ///
    /// Falls back to `size * 1.2` for fonts without horizontal line metrics.
    pub fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| m.new_line_size)
            .unwrap_or(self.size * 1.2)
    }

    /// Advance width of `text` laid out on a single line.
    #[must_use]
    pub fn measure_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, self.size).advance_width)
            .sum()
    }
}
