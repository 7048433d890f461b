//! Space-to-space conversion. sRGB is the hub every other space goes through.
//!
//! The colour math is palette's: the sRGB transfer function, the cylindrical
//! HSL/HWB models, and CIE Lab under D50 reached through Bradford adaptation
//! from the D65 sRGB white.

use palette::chromatic_adaptation::AdaptFrom;
use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::{D50, D65};
use palette::{Clamp, FromColor, LinSrgb, Srgb, Xyz};

use super::{CanonicalColor, ColorSpace, Missing};

type Vec3 = [f64; 3];
type Hsl = palette::Hsl<encoding::Srgb, f64>;
type Hwb = palette::Hwb<encoding::Srgb, f64>;
type Lab = palette::Lab<D50, f64>;

impl CanonicalColor {
    /// Convert into `target`, returning a new value.
    ///
    /// Alpha is carried unchanged. An undefined hue stays undefined: it maps to
    /// channel 0 of a hue space, or rides along as a carried flag otherwise.
    pub fn convert(&self, target: ColorSpace) -> CanonicalColor {
        if self.space == target {
            return *self;
        }
        if self.space.is_rgb_like() && target.is_rgb_like() {
            return CanonicalColor {
                space: target,
                ..*self
            };
        }

        let rgb = self.srgb_channels();
        let mut channels = match target {
            ColorSpace::Srgb | ColorSpace::Named | ColorSpace::Generic => rgb,
            ColorSpace::Hsl => srgb_to_hsl(rgb),
            ColorSpace::Hwb => srgb_to_hwb(rgb),
            ColorSpace::Lab => srgb_to_lab(rgb),
        };
        // Achromatic results lose their hue in the round trip; keep the source's.
        if self.space.has_hue() && target.has_hue() {
            channels[0] = self.channels[0];
        }

        let hue_missing = self.hue_missing();
        let mut out = CanonicalColor::new(target, channels, self.alpha);
        if hue_missing && target.has_hue() {
            out.channels[0] = 0.0;
            out.missing = Missing::channel(0);
        } else if hue_missing {
            out.missing = Missing::carrying_hue();
        }
        out
    }

    /// Gamma-encoded sRGB channels, with `none` channels read as 0.
    fn srgb_channels(&self) -> Vec3 {
        let c = [self.channel(0), self.channel(1), self.channel(2)];
        match self.space {
            ColorSpace::Srgb | ColorSpace::Named | ColorSpace::Generic => c,
            ColorSpace::Hsl => hsl_to_srgb(c),
            ColorSpace::Hwb => hwb_to_srgb(c),
            ColorSpace::Lab => lab_to_srgb(c),
        }
    }
}

fn channels(rgb: Srgb<f64>) -> Vec3 {
    [rgb.red, rgb.green, rgb.blue]
}

/// In-gamut sRGB for the hue models, which are only defined on the cube.
fn gamut(rgb: Vec3) -> Srgb<f64> {
    Srgb::new(rgb[0], rgb[1], rgb[2]).clamp()
}

// ── cylindrical spaces ──

pub(crate) fn hsl_to_srgb([h, s, l]: Vec3) -> Vec3 {
    channels(Srgb::from_color_unclamped(Hsl::new(h, s, l)))
}

pub(crate) fn srgb_to_hsl(rgb: Vec3) -> Vec3 {
    let hsl = Hsl::from_color(gamut(rgb));
    [hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness]
}

pub(crate) fn hwb_to_srgb([h, w, b]: Vec3) -> Vec3 {
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray; 3];
    }
    channels(Srgb::from_color_unclamped(Hwb::new(h, w, b)))
}

pub(crate) fn srgb_to_hwb(rgb: Vec3) -> Vec3 {
    let hwb = Hwb::from_color(gamut(rgb));
    [hwb.hue.into_positive_degrees(), hwb.whiteness, hwb.blackness]
}

// ── Lab ──

pub(crate) fn srgb_to_lab([r, g, b]: Vec3) -> Vec3 {
    let lab = <Lab as AdaptFrom<Srgb<f64>, D65, D50, f64>>::adapt_from(Srgb::new(r, g, b));
    [lab.l, lab.a, lab.b]
}

pub(crate) fn lab_to_srgb([l, a, b]: Vec3) -> Vec3 {
    channels(<Srgb<f64> as AdaptFrom<Lab, D50, D65, f64>>::adapt_from(
        Lab::new(l, a, b),
    ))
}

// ── predefined RGB and XYZ spaces ──

pub(crate) fn linear_srgb_to_srgb([r, g, b]: Vec3) -> Vec3 {
    channels(Srgb::from_linear(LinSrgb::new(r, g, b)))
}

pub(crate) fn xyz_d65_to_srgb([x, y, z]: Vec3) -> Vec3 {
    channels(Srgb::from_color_unclamped(Xyz::<D65, f64>::new(x, y, z)))
}

pub(crate) fn xyz_d50_to_srgb([x, y, z]: Vec3) -> Vec3 {
    channels(<Srgb<f64> as AdaptFrom<Xyz<D50, f64>, D50, D65, f64>>::adapt_from(
        Xyz::new(x, y, z),
    ))
}
