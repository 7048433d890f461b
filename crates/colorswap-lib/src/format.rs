//! Formatter: renders a [`CanonicalColor`] in a target notation.
//!
//! Pure: the output depends only on the color, the notation and the
//! [`FormatConfig`] snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{CanonicalColor, ColorSpace, name_for_rgb8, normalize_hue};
use crate::config::FormatConfig;

/// Fractional digits used when `round_output` is off.
const FULL_PRECISION: usize = 6;
/// Fractional digits for alpha when `round_output` is on.
const ALPHA_PRECISION: usize = 3;

/// Output notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `#rrggbb`, with alpha digits when translucent.
    Hex,
    /// Uppercase `#RRGGBB`, never compressed, never alpha.
    #[serde(rename = "HEX6")]
    Hex6,
    /// `#rrggbbaa`.
    Hexa,
    /// CSS keyword, or `rgb()` when the color has no name.
    Name,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hwb,
    Lab,
    /// `color(srgb r g b)`.
    Color,
}

impl Notation {
    pub const ALL: [Notation; 11] = [
        Notation::Hex,
        Notation::Hex6,
        Notation::Hexa,
        Notation::Name,
        Notation::Rgb,
        Notation::Rgba,
        Notation::Hsl,
        Notation::Hsla,
        Notation::Hwb,
        Notation::Lab,
        Notation::Color,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Hex6 => "HEX6",
            Notation::Hexa => "hexa",
            Notation::Name => "name",
            Notation::Rgb => "rgb",
            Notation::Rgba => "rgba",
            Notation::Hsl => "hsl",
            Notation::Hsla => "hsla",
            Notation::Hwb => "hwb",
            Notation::Lab => "lab",
            Notation::Color => "color",
        }
    }

    /// Whether the notation always carries an alpha component.
    fn forces_alpha(self) -> bool {
        matches!(self, Notation::Hexa | Notation::Rgba | Notation::Hsla)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Notation::ALL.iter().map(|n| n.as_str()).collect();
                format!("unknown notation '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Render `color` in `notation`.
pub fn format(color: &CanonicalColor, notation: Notation, config: &FormatConfig) -> String {
    let alpha = notation.forces_alpha() || color.alpha < 1.0;
    match notation {
        Notation::Hex | Notation::Hexa => hex(
            color,
            HexStyle {
                alpha,
                upper: config.hex_uppercase,
                compress: config.hex_compress,
            },
        ),
        Notation::Hex6 => hex(
            color,
            HexStyle {
                alpha: false,
                upper: true,
                compress: false,
            },
        ),
        Notation::Name => name(color, config),
        Notation::Rgb | Notation::Rgba => rgb(color, notation == Notation::Rgba, alpha, config),
        Notation::Hsl | Notation::Hsla => hsl(color, notation == Notation::Hsla, alpha, config),
        Notation::Hwb => hwb(color, alpha, config),
        Notation::Lab => lab(color, alpha, config),
        Notation::Color if config.emit_generic_color_function => color_function(color, alpha, config),
        Notation::Color => rgb(color, false, alpha, config),
    }
}

/// Whether a `name` result is really the `rgb()`/`color()` fallback.
pub fn is_name_fallback(text: &str) -> bool {
    text.starts_with("rgb") || text.starts_with("color")
}

// ── Hex ──

struct HexStyle {
    alpha: bool,
    upper: bool,
    compress: bool,
}

fn hex(color: &CanonicalColor, style: HexStyle) -> String {
    let mut bytes = color.to_rgb8().to_vec();
    if style.alpha {
        bytes.push((color.alpha * 255.0).round() as u8);
    }

    let doubled = bytes.iter().all(|b| b >> 4 == b & 0x0f);
    let digits: String = if style.compress && doubled {
        bytes.iter().map(|b| format!("{:x}", b & 0x0f)).collect()
    } else {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    };

    if style.upper {
        format!("#{}", digits.to_ascii_uppercase())
    } else {
        format!("#{digits}")
    }
}

// ── Name ──

fn name(color: &CanonicalColor, config: &FormatConfig) -> String {
    if color.alpha >= 1.0
        && let Some(name) = name_for_rgb8(color.to_rgb8())
    {
        return name.to_string();
    }
    rgb(color, false, color.alpha < 1.0, config)
}

// ── Functions ──

/// Assemble `name(c1 c2 c3 / a)` or the comma form `name(c1, c2, c3, a)`.
fn function(name: &str, channels: [String; 3], alpha: Option<String>, commas: bool) -> String {
    let [c1, c2, c3] = channels;
    match (alpha, commas) {
        (Some(a), true) => format!("{name}({c1}, {c2}, {c3}, {a})"),
        (Some(a), false) => format!("{name}({c1} {c2} {c3} / {a})"),
        (None, true) => format!("{name}({c1}, {c2}, {c3})"),
        (None, false) => format!("{name}({c1} {c2} {c3})"),
    }
}

fn rgb(color: &CanonicalColor, force_a: bool, alpha: bool, config: &FormatConfig) -> String {
    let srgb = color.convert(ColorSpace::Srgb);
    let commas = config.use_comma_separators;
    let channels = [0, 1, 2].map(|i| {
        let v = srgb.channel(i).clamp(0.0, 1.0);
        if srgb.missing.contains(i) {
            "none".to_string()
        } else if config.use_percent_for_rgb {
            format!("{}%", channel_number(v * 100.0, config))
        } else {
            channel_number(v * 255.0, config)
        }
    });
    let name = if force_a || (commas && alpha) { "rgba" } else { "rgb" };
    function(name, channels, alpha.then(|| alpha_number(color.alpha, config)), commas)
}

fn hsl(color: &CanonicalColor, force_a: bool, alpha: bool, config: &FormatConfig) -> String {
    let hsl = color.convert(ColorSpace::Hsl);
    let commas = config.use_comma_separators;
    // the legacy comma syntax requires percentages
    let percent = config.use_percent || commas;
    let channels = [
        hue(&hsl, config),
        fraction(hsl.channel(1), percent, config),
        fraction(hsl.channel(2), percent, config),
    ];
    let name = if force_a || (commas && alpha) { "hsla" } else { "hsl" };
    function(name, channels, alpha.then(|| alpha_number(color.alpha, config)), commas)
}

fn hwb(color: &CanonicalColor, alpha: bool, config: &FormatConfig) -> String {
    let hwb = color.convert(ColorSpace::Hwb);
    let channels = [
        hue(&hwb, config),
        fraction(hwb.channel(1), config.use_percent, config),
        fraction(hwb.channel(2), config.use_percent, config),
    ];
    function(
        "hwb",
        channels,
        alpha.then(|| alpha_number(color.alpha, config)),
        config.use_comma_separators,
    )
}

/// Lab has no legacy comma syntax; it is always space separated.
fn lab(color: &CanonicalColor, alpha: bool, config: &FormatConfig) -> String {
    let lab = color.convert(ColorSpace::Lab);
    let channels = [0, 1, 2].map(|i| {
        let n = channel_number(lab.channel(i), config);
        if lab.missing.contains(i) {
            "none".to_string()
        } else if i == 0 && config.use_percent {
            format!("{n}%")
        } else {
            n
        }
    });
    function("lab", channels, alpha.then(|| alpha_number(color.alpha, config)), false)
}

/// `color(srgb …)`. Numeric channels are never rounded: rounding 0–1 values to
/// whole numbers would destroy them.
fn color_function(color: &CanonicalColor, alpha: bool, config: &FormatConfig) -> String {
    let srgb = color.convert(ColorSpace::Srgb);
    let channels = [0, 1, 2].map(|i| {
        if srgb.missing.contains(i) {
            "none".to_string()
        } else if config.use_percent {
            format!("{}%", channel_number(srgb.channel(i) * 100.0, config))
        } else {
            number(srgb.channel(i), FULL_PRECISION)
        }
    });
    let alpha = alpha.then(|| alpha_number(color.alpha, config));
    let [c1, c2, c3] = channels;
    match alpha {
        Some(a) => format!("color(srgb {c1} {c2} {c3} / {a})"),
        None => format!("color(srgb {c1} {c2} {c3})"),
    }
}

// ── Numbers ──

/// Hue in `[0, 360)` after rounding, so 359.7 prints as 0 rather than 360.
fn hue(color: &CanonicalColor, config: &FormatConfig) -> String {
    if color.hue_missing() {
        return "none".to_string();
    }
    let places = if config.round_output { 0 } else { FULL_PRECISION };
    let scale = 10f64.powi(places as i32);
    number(normalize_hue((color.channels[0] * scale).round() / scale), places)
}

/// A `[0, 1]` fraction as `0–100`, optionally with `%`.
fn fraction(v: f64, percent: bool, config: &FormatConfig) -> String {
    let n = channel_number(v * 100.0, config);
    if percent { format!("{n}%") } else { n }
}

fn channel_number(v: f64, config: &FormatConfig) -> String {
    number(v, if config.round_output { 0 } else { FULL_PRECISION })
}

fn alpha_number(v: f64, config: &FormatConfig) -> String {
    number(v, if config.round_output { ALPHA_PRECISION } else { FULL_PRECISION })
}

/// Fixed-point with `places` digits, trailing zeros trimmed, no `-0`.
fn number(v: f64, places: usize) -> String {
    let mut s = format!("{v:.places$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { "0".to_string() } else { s }
}
