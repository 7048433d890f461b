//! Notation parser: turns one color token into a [`CanonicalColor`].
//!
//! Accepted forms:
//! - Hex: `#RGB`, `#RRGGBB` (the `#` is optional). No alpha digits.
//! - Named: any CSS color keyword, case-insensitive.
//! - `hsl()`/`hsla()`/`hwb()`: parsed here, with `deg`/`rad`/`grad`/`turn`
//!   hue units, `none`, comma or space separators and `/` or `,` alpha.
//! - `rgb()`/`rgba()`: numbers or percentages, `none`, either separator style.
//! - `lab()`: CIE Lab under D50, with `none` and percentage forms.
//! - `color()`: parsed here for the `srgb`, `srgb-linear` and `xyz*` spaces.
//! - Any rgb/hsl/hwb text the grammars above reject is handed to
//!   `csscolorparser`.
//!
//! Numbers typed by the user go through [`Decimal`] so percentages and unit
//! scaling stay exact until the final conversion to `f64`.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::convert;
use crate::color::{CanonicalColor, ColorSpace, Missing, lookup_name};
use crate::decimal::Decimal;

/// A signed CSS number without exponent.
const NUM: &str = r"[+\-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)";

/// Separator between components: legacy comma, whitespace, or both.
const SEP: &str = r"\s*,?\s*";

fn angle_pattern() -> String {
    format!(
        r"(?:(?P<none>none)|(?P<rad>{NUM})rad|(?P<grad>{NUM})grad|(?P<turn>{NUM})turn|(?P<deg>{NUM})(?:deg)?)"
    )
}

fn alpha_pattern() -> String {
    format!(r"(?:\s*[/,]\s*(?P<alpha>{NUM})(?P<alpha_pct>%)?)?")
}

fn hue_function_pattern(names: &str) -> String {
    format!(
        r"{names}\(\s*{angle}{SEP}(?P<c1>{NUM})%?{SEP}(?P<c2>{NUM})%?{alpha}\s*\)",
        angle = angle_pattern(),
        alpha = alpha_pattern(),
    )
}

/// `hsl()`/`hsla()` with a unit-aware hue.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&hue_function_pattern("hsla?")).expect("HSL pattern is a valid regex")
});

/// `hwb()` with a unit-aware hue.
pub(crate) static HWB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&hue_function_pattern("hwb")).expect("HWB pattern is a valid regex")
});

/// Any supported color function as an opaque parenthesized blob.
pub(crate) static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:rgba?|hsla?|hwb|lab|color)\([^)]+\)").expect("function pattern is a valid regex")
});

/// A bare 3- or 6-digit hex word.
pub(crate) static BARE_HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:[0-9a-f]{6}|[0-9a-f]{3})$").expect("hex pattern is a valid regex")
});

// ── Error type ──

/// Why a token could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace.
    Empty,
    /// The token is not valid syntax for any supported notation.
    Malformed(String),
    /// A bare word that is neither a CSS keyword nor a hex literal.
    UnknownName(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty color string"),
            ParseError::Malformed(s) => write!(f, "malformed color: {s}"),
            ParseError::UnknownName(s) => write!(f, "unknown color name: {s}"),
        }
    }
}

impl std::error::Error for ParseError {}

pub type Result<T> = std::result::Result<T, ParseError>;

// ── Entry point ──

/// Parse one color token.
pub fn parse(text: &str) -> Result<CanonicalColor> {
    let s = text.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(open) = s.find('(') {
        return match &s[..open] {
            "hsl" | "hsla" => parse_whole(&HSL_RE, &s, parse_hsl).or_else(|_| delegate(&s)),
            "hwb" => parse_whole(&HWB_RE, &s, parse_hwb).or_else(|_| delegate(&s)),
            "rgb" | "rgba" => parse_rgb_function(&s).or_else(|_| delegate(&s)),
            "lab" => parse_lab_function(&s),
            "color" => parse_color_function(&s),
            _ => Err(ParseError::Malformed(s.clone())),
        };
    }

    if let Some(rgb) = lookup_name(&s) {
        return Ok(from_rgb8(ColorSpace::Named, rgb));
    }
    if BARE_HEX_RE.is_match(&s) {
        return parse_hex(&s);
    }
    Err(ParseError::UnknownName(s))
}

/// Run a specialized pattern over the whole token.
fn parse_whole(
    re: &Regex,
    s: &str,
    parse_captures: fn(&Captures) -> Result<CanonicalColor>,
) -> Result<CanonicalColor> {
    match re.captures(s) {
        Some(caps) if caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == s.len()) => {
            parse_captures(&caps)
        }
        _ => Err(ParseError::Malformed(s.to_string())),
    }
}

// ── Hex ──

fn parse_hex(hex: &str) -> Result<CanonicalColor> {
    let err = || ParseError::Malformed(format!("#{hex}"));
    let nibble = |c: u8| -> Result<u8> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(err()),
        }
    };

    let bytes = hex.as_bytes();
    let rgb = match bytes.len() {
        // #RGB: each nibble d expands to dd
        3 => [
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        ],
        6 => {
            let pair = |i: usize| -> Result<u8> { Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?) };
            [pair(0)?, pair(2)?, pair(4)?]
        }
        _ => return Err(err()),
    };
    Ok(from_rgb8(ColorSpace::Srgb, rgb))
}

fn from_rgb8(space: ColorSpace, rgb: [u8; 3]) -> CanonicalColor {
    CanonicalColor::new(space, rgb.map(|v| f64::from(v) / 255.0), 1.0)
}

// ── hsl() / hwb() ──

pub(crate) fn parse_hsl(caps: &Captures) -> Result<CanonicalColor> {
    parse_hue_function(caps, ColorSpace::Hsl)
}

pub(crate) fn parse_hwb(caps: &Captures) -> Result<CanonicalColor> {
    parse_hue_function(caps, ColorSpace::Hwb)
}

fn parse_hue_function(caps: &Captures, space: ColorSpace) -> Result<CanonicalColor> {
    let (hue, missing) = parse_angle(caps)?;
    let c1 = percent_channel(caps, "c1")?;
    let c2 = percent_channel(caps, "c2")?;
    let alpha = parse_alpha(caps)?;
    Ok(CanonicalColor::new(space, [hue, c1, c2], alpha).with_missing(missing))
}

/// Hue in degrees, or `none`.
fn parse_angle(caps: &Captures) -> Result<(f64, Missing)> {
    if caps.name("none").is_some() {
        return Ok((0.0, Missing::channel(0)));
    }
    let degrees = if let Some(m) = caps.name("rad") {
        decimal(m.as_str())?.to_f64().to_degrees()
    } else if let Some(m) = caps.name("grad") {
        // 400 grad per turn: × 0.9
        decimal(m.as_str())?.mul_int(9).shift_right(1).to_f64()
    } else if let Some(m) = caps.name("turn") {
        decimal(m.as_str())?.mul_int(360).to_f64()
    } else if let Some(m) = caps.name("deg") {
        decimal(m.as_str())?.to_f64()
    } else {
        return Err(ParseError::Malformed(whole(caps)));
    };
    Ok((degrees, Missing::NONE))
}

/// A saturation/lightness/whiteness/blackness component as a fraction.
fn percent_channel(caps: &Captures, group: &str) -> Result<f64> {
    let m = caps
        .name(group)
        .ok_or_else(|| ParseError::Malformed(whole(caps)))?;
    Ok(decimal(m.as_str())?.shift_right(2).to_f64().clamp(0.0, 1.0))
}

fn parse_alpha(caps: &Captures) -> Result<f64> {
    let Some(m) = caps.name("alpha") else {
        return Ok(1.0);
    };
    let value = decimal(m.as_str())?;
    let value = if caps.name("alpha_pct").is_some() {
        value.shift_right(2)
    } else {
        value
    };
    Ok(value.to_f64())
}

fn decimal(s: &str) -> Result<Decimal> {
    s.parse()
        .map_err(|e: crate::decimal::DecimalError| ParseError::Malformed(e.to_string()))
}

fn whole(caps: &Captures) -> String {
    caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default()
}

// ── rgb() / lab() ──

/// A component as typed: a number, or a percentage of the channel's range.
enum Amount {
    Number(Decimal),
    Percent(Decimal),
}

/// A number or percentage; `None` for `none`.
fn amount(token: &str) -> Result<Option<Amount>> {
    if token == "none" {
        return Ok(None);
    }
    Ok(Some(match token.strip_suffix('%') {
        Some(pct) => Amount::Percent(decimal(pct)?),
        None => Amount::Number(decimal(token)?),
    }))
}

/// The three components and optional alpha of `name(…)`.
///
/// Space form is `a b c [/ alpha]`; with `legacy` the comma form
/// `a, b, c[, alpha]` is also accepted.
fn function_args<'a>(s: &'a str, legacy: bool) -> Option<([&'a str; 3], Option<&'a str>)> {
    let inner = s.split_once('(')?.1.strip_suffix(')')?.trim();
    let (parts, alpha): (Vec<&str>, _) = if inner.contains(',') {
        if !legacy {
            return None;
        }
        let mut parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        (parts, alpha)
    } else {
        match inner.split_once('/') {
            Some((c, a)) => (c.split_whitespace().collect(), Some(a.trim())),
            None => (inner.split_whitespace().collect(), None),
        }
    };
    let &[a, b, c] = parts.as_slice() else {
        return None;
    };
    Some(([a, b, c], alpha))
}

/// Alpha as a number or percentage; `none` reads as 0.
fn function_alpha(token: Option<&str>) -> Result<f64> {
    Ok(match token {
        None => 1.0,
        Some(t) => match amount(t)? {
            Some(Amount::Number(n)) => n.to_f64(),
            Some(Amount::Percent(p)) => p.shift_right(2).to_f64(),
            None => 0.0,
        },
    })
}

/// `rgb()`/`rgba()`: 0–255 numbers or percentages, clamped to the sRGB cube.
fn parse_rgb_function(s: &str) -> Result<CanonicalColor> {
    let (components, alpha) =
        function_args(s, true).ok_or_else(|| ParseError::Malformed(s.to_string()))?;
    let mut channels = [0.0; 3];
    let mut missing = Missing::NONE;
    for (i, token) in components.into_iter().enumerate() {
        channels[i] = match amount(token)? {
            Some(Amount::Number(n)) => n.to_f64() / 255.0,
            Some(Amount::Percent(p)) => p.shift_right(2).to_f64(),
            None => {
                missing = missing.with(i);
                0.0
            }
        }
        .clamp(0.0, 1.0);
    }
    let alpha = function_alpha(alpha)?;
    Ok(CanonicalColor::new(ColorSpace::Srgb, channels, alpha).with_missing(missing))
}

/// `lab(L a b [/ alpha])` under D50. `100%` is L 100 and a/b 125.
fn parse_lab_function(s: &str) -> Result<CanonicalColor> {
    let (components, alpha) =
        function_args(s, false).ok_or_else(|| ParseError::Malformed(s.to_string()))?;
    let mut channels = [0.0; 3];
    let mut missing = Missing::NONE;
    for (i, token) in components.into_iter().enumerate() {
        channels[i] = match (amount(token)?, i) {
            (Some(Amount::Number(n)), _) => n.to_f64(),
            (Some(Amount::Percent(p)), 0) => p.to_f64(),
            (Some(Amount::Percent(p)), _) => p.mul_int(125).shift_right(2).to_f64(),
            (None, _) => {
                missing = missing.with(i);
                0.0
            }
        };
    }
    channels[0] = channels[0].clamp(0.0, 100.0);
    let alpha = function_alpha(alpha)?;
    Ok(CanonicalColor::new(ColorSpace::Lab, channels, alpha).with_missing(missing))
}

// ── color() ──

/// `color(<space> c1 c2 c3 [/ alpha])` for sRGB-compatible predefined spaces.
fn parse_color_function(s: &str) -> Result<CanonicalColor> {
    let err = || ParseError::Malformed(s.to_string());
    let inner = s
        .strip_prefix("color(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(err)?;
    let (components, alpha) = match inner.split_once('/') {
        Some((c, a)) => (c, Some(a.trim())),
        None => (inner, None),
    };

    let mut tokens = components.split_whitespace();
    let space = tokens.next().ok_or_else(err)?;
    let mut values = [0.0; 3];
    let mut missing = Missing::NONE;
    for (i, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(err)?;
        match color_component(token)? {
            Some(v) => *slot = v,
            None => missing = missing.with(i),
        }
    }
    if tokens.next().is_some() {
        return Err(err());
    }

    let alpha = function_alpha(alpha)?;

    let (channels, missing) = match space {
        "srgb" => (values, missing),
        // Only srgb channels line up index for index with the stored ones.
        "srgb-linear" => (convert::linear_srgb_to_srgb(values), Missing::NONE),
        "xyz" | "xyz-d65" => (convert::xyz_d65_to_srgb(values), Missing::NONE),
        "xyz-d50" => (convert::xyz_d50_to_srgb(values), Missing::NONE),
        _ => return Err(err()),
    };
    Ok(CanonicalColor::new(ColorSpace::Generic, channels, alpha).with_missing(missing))
}

/// A `color()` channel: number, percentage, or `none`.
fn color_component(token: &str) -> Result<Option<f64>> {
    Ok(amount(token)?.map(|a| match a {
        Amount::Number(n) => n.to_f64(),
        Amount::Percent(p) => p.shift_right(2).to_f64(),
    }))
}

// ── Delegated notations ──

/// Hand the token to `csscolorparser`, which resolves it to sRGB.
fn delegate(s: &str) -> Result<CanonicalColor> {
    log::debug!("delegating {s:?} to csscolorparser");
    let c = csscolorparser::parse(s).map_err(|e| ParseError::Malformed(format!("{s}: {e}")))?;
    Ok(CanonicalColor::new(
        ColorSpace::Srgb,
        [f64::from(c.r), f64::from(c.g), f64::from(c.b)],
        f64::from(c.a),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn rgb8(c: &CanonicalColor) -> [u8; 3] {
        c.to_rgb8()
    }

    // ── hex ──

    #[test]
    fn hex_six_digits() {
        let c = parse("#336699").unwrap();
        assert_eq!(c.space, ColorSpace::Srgb);
        assert_eq!(rgb8(&c), [0x33, 0x66, 0x99]);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn hex_three_digits_expand() {
        assert_eq!(rgb8(&parse("#abc").unwrap()), [0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(rgb8(&parse("ABC123").unwrap()), [0xab, 0xc1, 0x23]);
    }

    #[test]
    fn hex_with_alpha_digits_is_rejected() {
        assert!(parse("#abcd").is_err());
        assert!(parse("#aabbccdd").is_err());
    }

    #[test]
    fn hex_bad_digits() {
        assert!(matches!(parse("#ggg"), Err(ParseError::Malformed(_))));
    }

    // ── names ──

    #[test]
    fn name_case_insensitive() {
        let c = parse("RebeccaPurple").unwrap();
        assert_eq!(c.space, ColorSpace::Named);
        assert_eq!(rgb8(&c), [102, 51, 153]);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            parse("xyzzy"),
            Err(ParseError::UnknownName("xyzzy".into()))
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn name_wins_over_bare_hex() {
        // "bad" is both a valid bare hex and not a name; "tan" is only a name
        assert_eq!(parse("tan").unwrap().space, ColorSpace::Named);
        assert_eq!(parse("bad").unwrap().space, ColorSpace::Srgb);
    }

    // ── hsl() ──

    #[test]
    fn hsl_legacy_commas() {
        let c = parse("hsl(120, 50%, 25%)").unwrap();
        assert_eq!(c.space, ColorSpace::Hsl);
        assert_eq!(c.channels, [120.0, 0.5, 0.25]);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn hsl_modern_spaces_with_slash_alpha() {
        let c = parse("hsl(210deg 50% 40% / 0.5)").unwrap();
        assert_eq!(c.channels, [210.0, 0.5, 0.4]);
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn hsl_slash_alpha_percent() {
        let c = parse("hsl(210 50% 40% / 25%)").unwrap();
        assert_eq!(c.alpha, 0.25);
    }

    #[test]
    fn hsla_legacy_comma_alpha() {
        let c = parse("hsla(0, 100%, 50%, 0.3)").unwrap();
        assert_eq!(c.alpha, 0.3);
    }

    #[test]
    fn hsl_mixed_separators() {
        let c = parse("hsl(90 ,60%  30%)").unwrap();
        assert_eq!(c.channels, [90.0, 0.6, 0.3]);
    }

    #[test]
    fn hsl_none_hue() {
        let c = parse("hsl(none, 50%, 50%)").unwrap();
        assert!(c.missing.contains(0));
        assert!(c.hue_missing());
        assert_eq!(c.channels[1], 0.5);
    }

    #[test]
    fn hsl_percent_is_exact_decimal() {
        let c = parse("hsl(0, 33.3%, 50%)").unwrap();
        assert_eq!(c.channels[1], 0.333);
    }

    #[test]
    fn hsl_angle_units_agree() {
        let tol = 0.02;
        for text in [
            "hsl(120deg, 50%, 50%)",
            "hsl(0.3333turn, 50%, 50%)",
            "hsl(2.0944rad, 50%, 50%)",
            "hsl(133.33grad, 50%, 50%)",
            "hsl(120 50% 50%)",
        ] {
            let c = parse(text).unwrap();
            assert!(approx(c.channels[0], 120.0, tol), "{text} -> {}", c.channels[0]);
        }
    }

    #[test]
    fn hsl_negative_hue_normalized() {
        let c = parse("hsl(-240deg 100% 50%)").unwrap();
        assert!(approx(c.channels[0], 120.0, TOL));
    }

    #[test]
    fn hsl_saturation_clamped() {
        let c = parse("hsl(0 150% 50%)").unwrap();
        assert_eq!(c.channels[1], 1.0);
    }

    // ── hwb() ──

    #[test]
    fn hwb_channels() {
        let c = parse("hwb(60 10% 20%)").unwrap();
        assert_eq!(c.space, ColorSpace::Hwb);
        assert_eq!(c.channels, [60.0, 0.1, 0.2]);
    }

    #[test]
    fn hwb_turn_and_alpha() {
        let c = parse("hwb(0.5turn 0% 0% / 40%)").unwrap();
        assert!(approx(c.channels[0], 180.0, TOL));
        assert_eq!(c.alpha, 0.4);
    }

    // ── color() ──

    #[test]
    fn color_srgb() {
        let c = parse("color(srgb 1 0.5 0)").unwrap();
        assert_eq!(c.space, ColorSpace::Generic);
        assert_eq!(c.channels, [1.0, 0.5, 0.0]);
    }

    #[test]
    fn color_srgb_percent_and_alpha() {
        let c = parse("color(srgb 100% 50% 0% / 0.5)").unwrap();
        assert_eq!(c.channels, [1.0, 0.5, 0.0]);
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn color_srgb_none_channel() {
        let c = parse("color(srgb none 1 0)").unwrap();
        assert!(c.missing.contains(0));
    }

    #[test]
    fn color_srgb_linear() {
        let c = parse("color(srgb-linear 1 0 0)").unwrap();
        assert_eq!(rgb8(&c), [255, 0, 0]);
    }

    #[test]
    fn color_unknown_space() {
        assert!(parse("color(display-p3 1 0 0)").is_err());
        assert!(parse("color(--custom 1 0 0)").is_err());
    }

    #[test]
    fn color_wrong_arity() {
        assert!(parse("color(srgb 1 0)").is_err());
        assert!(parse("color(srgb 1 0 0 0)").is_err());
    }

    // ── rgb() ──

    #[test]
    fn rgb_legacy_commas() {
        let c = parse("rgb(255, 128, 0)").unwrap();
        assert_eq!(c.space, ColorSpace::Srgb);
        assert_eq!(rgb8(&c), [255, 128, 0]);
    }

    #[test]
    fn rgba_legacy_alpha() {
        let c = parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert!(approx(c.alpha, 0.5, 1e-6));
    }

    #[test]
    fn rgb_percent() {
        assert_eq!(rgb8(&parse("rgb(100% 0% 0%)").unwrap()), [255, 0, 0]);
    }

    #[test]
    fn rgb_lenient_alpha_falls_back_to_csscolorparser() {
        // a fourth space-separated value without `/`
        let c = parse("rgb(255 0 0 0.5)").unwrap();
        assert_eq!(rgb8(&c), [255, 0, 0]);
        assert!(approx(c.alpha, 0.5, 1e-6));
    }

    #[test]
    fn rgb_none_channel() {
        let c = parse("rgb(none 128 0)").unwrap();
        assert!(c.missing.contains(0));
        assert!(!c.missing.contains(1));
        assert_eq!(rgb8(&c), [0, 128, 0]);
    }

    #[test]
    fn rgb_modern_slash_alpha_percent() {
        let c = parse("rgb(255 128 0 / 25%)").unwrap();
        assert_eq!(rgb8(&c), [255, 128, 0]);
        assert_eq!(c.alpha, 0.25);
    }

    #[test]
    fn rgb_channels_clamped() {
        assert_eq!(rgb8(&parse("rgb(300, -5, 0)").unwrap()), [255, 0, 0]);
    }

    // ── lab() ──

    #[test]
    fn lab_css_reference_red() {
        let c = parse("lab(54.29 80.8 69.89)").unwrap();
        assert_eq!(c.space, ColorSpace::Lab);
        assert_eq!(c.channels, [54.29, 80.8, 69.89]);
        assert_eq!(rgb8(&c), [255, 0, 0]);
    }

    #[test]
    fn lab_mid_lightness_is_gray() {
        assert_eq!(rgb8(&parse("lab(50 0 0)").unwrap()), [119, 119, 119]);
    }

    #[test]
    fn lab_white_and_black() {
        assert_eq!(rgb8(&parse("lab(100 0 0)").unwrap()), [255, 255, 255]);
        assert_eq!(rgb8(&parse("lab(0 0 0)").unwrap()), [0, 0, 0]);
    }

    #[test]
    fn lab_percentages() {
        // 100% lightness is 100; 100% of a/b is 125
        let c = parse("lab(50% 40% -20%)").unwrap();
        assert_eq!(c.channels, [50.0, 50.0, -25.0]);
    }

    #[test]
    fn lab_none_and_alpha() {
        let c = parse("lab(60 none -10 / 0.5)").unwrap();
        assert!(c.missing.contains(1));
        assert_eq!(c.channel(1), 0.0);
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn lab_rejects_commas_and_wrong_arity() {
        assert!(parse("lab(50, 0, 0)").is_err());
        assert!(parse("lab(50 0)").is_err());
        assert!(parse("lab(50 0 0 0)").is_err());
    }

    #[test]
    fn malformed_rgb() {
        assert!(matches!(parse("rgb(999,,)"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn unknown_function() {
        assert!(matches!(parse("foo(1 2 3)"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn function_names_any_case() {
        assert_eq!(parse("HSL(120, 50%, 50%)").unwrap().space, ColorSpace::Hsl);
    }
}
