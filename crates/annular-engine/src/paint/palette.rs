use std::collections::HashMap;

use super::Color;

/// Fallback fill used when a chart names no color, or names one the palette
/// cannot resolve: translucent near-white, `rgba(247, 247, 247, 0.2)`.
#[inline]
pub fn default_fill() -> Color {
    Color::from_rgba8(247, 247, 247, 51)
}

/// Named color table, injected into the widget at construction.
///
/// `Palette::default()` carries the stock button-style names below. Hosts that
/// theme the widget replace or extend the map with [`insert`](Self::insert);
/// nothing reads a global table.
///
/// | name      | color                    |
/// |-----------|--------------------------|
/// | `button`  | `rgba(247, 247, 247, 1)` |
/// | `primary` | `rgba(0, 136, 204, 1)`   |
/// | `info`    | `rgba(88, 185, 218, 1)`  |
/// | `success` | `rgba(106, 177, 101, 1)` |
/// | `warning` | `rgba(255, 153, 0, 1)`   |
/// | `danger`  | `rgba(255, 103, 91, 1)`  |
/// | `inverse` | `rgba(85, 85, 85, 1)`    |
#[derive(Debug, Clone)]
pub struct Palette {
    entries: HashMap<String, Color>,
}

impl Palette {
    /// Empty palette with no named entries.
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.entries.insert(name.into(), color);
    }

    /// Looks up a name without attempting literal parsing.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Resolves a user-facing color spec: a palette name first, then a literal
    /// (`#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)`).
    pub fn resolve(&self, spec: &str) -> Option<Color> {
        let spec = spec.trim();
        self.get(spec).or_else(|| parse_color(spec))
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut p = Self::empty();
        p.insert("button", Color::from_rgba8(247, 247, 247, 255));
        p.insert("primary", Color::from_rgba8(0, 136, 204, 255));
        p.insert("info", Color::from_rgba8(88, 185, 218, 255));
        p.insert("success", Color::from_rgba8(106, 177, 101, 255));
        p.insert("warning", Color::from_rgba8(255, 153, 0, 255));
        p.insert("danger", Color::from_rgba8(255, 103, 91, 255));
        p.insert("inverse", Color::from_rgba8(85, 85, 85, 255));
        p
    }
}

/// Parses a literal color string.
///
/// Accepted forms:
/// - `#rrggbb` and `#rrggbbaa` hex
/// - `rgb(r, g, b)` with byte channels
/// - `rgba(r, g, b, a)` with byte channels and a fractional alpha in `[0, 1]`
///
/// Returns `None` for anything else; the caller falls back to
/// [`default_fill`].
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }

    let body = spec
        .strip_prefix("rgba(")
        .or_else(|| spec.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [r, g, b] => {
            let (r, g, b) = (byte(r)?, byte(g)?, byte(b)?);
            Some(Color::from_rgba8(r, g, b, 255))
        }
        [r, g, b, a] => {
            let (r, g, b) = (byte(r)?, byte(g)?, byte(b)?);
            let a: f32 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            Some(Color::from_rgba8(r, g, b, 255).with_alpha(a))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

fn byte(s: &str) -> Option<u8> {
    s.parse().ok()
}
