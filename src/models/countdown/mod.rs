// Countdown module
// Birthday countdown record and its colour tag

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Saturation used for every countdown colour tag.
pub const TAG_SATURATION: u8 = 80;
/// Lightness used for every countdown colour tag.
pub const TAG_LIGHTNESS: u8 = 60;

/// Straight (non-premultiplied) 8-bit colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the alpha channel replaced by `opacity` in [0, 1].
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// Hue/saturation/lightness colour, the form countdown bars are tagged with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HslColor {
    /// Degrees, always below 360
    pub hue: u16,
    /// Percent
    pub saturation: u8,
    /// Percent
    pub lightness: u8,
}

impl HslColor {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    /// Colour tag for the record created at position `index`.
    ///
    /// The hue rotates by `hue_step` degrees per record so neighbouring
    /// bars stay distinct, e.g. 0, 70, 140, ... for the default step.
    pub fn for_index(index: usize, hue_step: u16) -> Self {
        let hue = (index as u64 * hue_step as u64 % 360) as u16;
        Self::new(hue, TAG_SATURATION, TAG_LIGHTNESS)
    }

    /// CSS notation, e.g. `hsl(70, 80%, 60%)`.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// Parse the notation produced by [`to_css`](Self::to_css).
    pub fn from_css_str(value: &str) -> Option<Self> {
        let inner = value
            .trim()
            .strip_prefix("hsl(")?
            .strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let hue = parts.next()?.parse::<u16>().ok()?;
        let saturation = parts.next()?.strip_suffix('%')?.parse::<u8>().ok()?;
        let lightness = parts.next()?.strip_suffix('%')?.parse::<u8>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(hue, saturation, lightness))
    }

    /// Convert to an opaque RGBA colour.
    pub fn to_rgba(&self) -> RgbaColor {
        let s = self.saturation as f32 / 100.0;
        let l = self.lightness as f32 / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue as f32 / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match self.hue / 60 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbaColor::new(channel(r1), channel(g1), channel(b1), 255)
    }
}

/// One tracked birthday countdown. Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownRecord {
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// Upcoming anniversary of `date_of_birth`, at local midnight
    pub target_instant: NaiveDateTime,
    /// Age reached at `target_instant`
    pub age: i32,
    /// Base64 PNG icon, already resized
    pub icon_image: String,
    pub color_tag: HslColor,
}

impl CountdownRecord {
    /// Heading shown above the live countdown text.
    pub fn headline(&self) -> String {
        format!("{}'s Birthday Countdown:", self.name)
    }
}
