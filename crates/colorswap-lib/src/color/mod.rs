//! Canonical color value: a space tag, three channels, alpha and `none` flags.

pub(crate) mod convert;
mod names;

pub use names::{NAMED_COLORS, lookup_name, name_for_rgb8};

use std::fmt;

/// Color spaces a [`CanonicalColor`] can be tagged with.
///
/// `Named` and `Generic` carry sRGB channel semantics; the tag only records
/// which notation produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// `[r, g, b]`, gamma-encoded, each nominally in `[0, 1]`.
    Srgb,
    /// `[hue°, saturation, lightness]`, fractions in `[0, 1]`.
    Hsl,
    /// `[hue°, whiteness, blackness]`, fractions in `[0, 1]`.
    Hwb,
    /// CIE Lab (D50) `[L 0..100, a, b]`.
    Lab,
    /// Parsed from a CSS color keyword.
    Named,
    /// Parsed from a `color()` function.
    Generic,
}

impl ColorSpace {
    /// Whether channel 0 is a hue angle.
    pub fn has_hue(self) -> bool {
        matches!(self, ColorSpace::Hsl | ColorSpace::Hwb)
    }

    /// Whether the channels are (gamma-encoded) sRGB.
    pub fn is_rgb_like(self) -> bool {
        matches!(
            self,
            ColorSpace::Srgb | ColorSpace::Named | ColorSpace::Generic
        )
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hwb => "hwb",
            ColorSpace::Lab => "lab",
            ColorSpace::Named => "name",
            ColorSpace::Generic => "color",
        };
        f.write_str(name)
    }
}

/// Set of channels declared `none`.
///
/// Bits 0–2 are channel indices of the color's own space. The extra
/// carried-hue bit remembers an undefined hue while the color
/// sits in a space without a hue channel, so it comes back on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Missing(u8);

impl Missing {
    pub const NONE: Missing = Missing(0);
    const CARRIED_HUE: u8 = 1 << 3;

    pub fn channel(index: usize) -> Self {
        Missing::NONE.with(index)
    }

    #[must_use]
    pub fn with(self, index: usize) -> Self {
        if index < 3 {
            Missing(self.0 | 1 << index)
        } else {
            self
        }
    }

    pub fn contains(self, index: usize) -> bool {
        index < 3 && self.0 & (1 << index) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn carried_hue(self) -> bool {
        self.0 & Self::CARRIED_HUE != 0
    }

    pub(crate) fn carrying_hue() -> Self {
        Missing(Self::CARRIED_HUE)
    }
}

/// A color parsed from text, tagged with its space.
///
/// Values are immutable in practice: [`CanonicalColor::convert`] returns a new
/// value and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalColor {
    pub space: ColorSpace,
    pub channels: [f64; 3],
    pub alpha: f64,
    pub missing: Missing,
}

impl CanonicalColor {
    /// Build a color, normalizing the hue and clamping alpha into `[0, 1]`.
    pub fn new(space: ColorSpace, channels: [f64; 3], alpha: f64) -> Self {
        let mut channels = channels;
        if space.has_hue() {
            channels[0] = normalize_hue(channels[0]);
        }
        CanonicalColor {
            space,
            channels,
            alpha: if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) },
            missing: Missing::NONE,
        }
    }

    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b], 1.0)
    }

    #[must_use]
    pub fn with_missing(mut self, missing: Missing) -> Self {
        self.missing = missing;
        self
    }

    /// Whether the hue is undefined, either as channel 0 of a hue space or
    /// carried through a hue-less space.
    pub fn hue_missing(&self) -> bool {
        if self.space.has_hue() {
            self.missing.contains(0)
        } else {
            self.missing.carried_hue()
        }
    }

    /// Channel value with `none` channels read as 0.
    pub fn channel(&self, index: usize) -> f64 {
        if self.missing.contains(index) {
            0.0
        } else {
            self.channels.get(index).copied().unwrap_or_default()
        }
    }

    /// 8-bit sRGB quantization of this color (channels clamped into gamut).
    pub fn to_rgb8(&self) -> [u8; 3] {
        let rgb = self.convert(ColorSpace::Srgb);
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(rgb.channels[0]), q(rgb.channels[1]), q(rgb.channels[2])]
    }
}

/// Map any angle in degrees into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}
