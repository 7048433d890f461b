//! Exact base-10 numbers for user-typed literals.
//!
//! Channel values such as `33.3%` are kept as `333 × 10⁻³` until the very end,
//! so the only rounding step is the final, correctly rounded conversion to
//! `f64`. Dividing a percentage by 100 or a gradian count by 10 is a scale
//! change and never touches binary floating point.

use std::fmt;
use std::str::FromStr;

/// Longest literal accepted, in digits. Keeps the mantissa well inside `i128`.
const MAX_DIGITS: usize = 30;

/// A decimal number `mantissa × 10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalError(pub String);

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number: {}", self.0)
    }
}

impl std::error::Error for DecimalError {}

impl Decimal {
    /// Divide by `10^places` exactly.
    pub fn shift_right(self, places: u32) -> Self {
        Decimal {
            mantissa: self.mantissa,
            scale: self.scale + places,
        }
    }

    /// Multiply by an integer exactly. Saturates instead of overflowing.
    pub fn mul_int(self, factor: i64) -> Self {
        Decimal {
            mantissa: self.mantissa.saturating_mul(factor as i128),
            scale: self.scale,
        }
    }

    /// Nearest `f64` to the exact decimal value.
    pub fn to_f64(self) -> f64 {
        // Rust's float parser is correctly rounded, so going through the
        // scientific form gives the nearest double.
        format!("{}e-{}", self.mantissa, self.scale)
            .parse()
            .unwrap_or_default()
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Accepts `[+-]digits[.digits]` and `[+-].digits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DecimalError(s.to_string());
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if int_part.len() + frac_part.len() > MAX_DIGITS {
            return Err(err());
        }

        let mut mantissa: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            if !b.is_ascii_digit() {
                return Err(err());
            }
            mantissa = mantissa * 10 + i128::from(b - b'0');
        }
        if negative {
            mantissa = -mantissa;
        }
        Ok(Decimal {
            mantissa,
            scale: frac_part.len() as u32,
        })
    }
}
