use crate::error::ErrorKind;
use std::fmt;

/// Value of a numeric literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Convert the text of a numeral as the lexer read it
    ///
    /// Hexadecimal numerals without a point or binary exponent are integers
    /// and must fit in 64 bits; the bit pattern is reinterpreted as signed.
    /// With a point or `p` exponent they are floats. Decimal integers that
    /// overflow `i64` become floats. Anything with a fraction or exponent is
    /// a float and must be finite. Text that is none of these, such as `3x`
    /// or `1..2`, is rejected.
    pub fn from_literal(literal: &str) -> Result<Number, ErrorKind> {
        let malformed = |reason: &str| ErrorKind::NumberConversion {
            literal: literal.to_string(),
            reason: reason.to_string(),
        };

        if let Some(digits) = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
        {
            if !digits.contains(['.', 'p', 'P']) {
                return u64::from_str_radix(digits, 16)
                    .map(|value| Number::Integer(value as i64))
                    .map_err(|error| malformed(&error.to_string()));
            }
            return match hex_float(digits) {
                Some(value) if value.is_finite() => Ok(Number::Float(value)),
                Some(_) => Err(malformed("value out of range")),
                None => Err(malformed("invalid hexadecimal float")),
            };
        }

        if literal.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = literal.parse::<i64>() {
                return Ok(Number::Integer(value));
            }
        }

        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Float(value)),
            Ok(_) => Err(malformed("value out of range")),
            Err(error) => Err(malformed(&error.to_string())),
        }
    }
}

/// Value of the digits after `0x`: a hex mantissa with at most one point,
/// then an optional binary exponent `p[+-]digits`
fn hex_float(digits: &str) -> Option<f64> {
    let (mantissa, exponent) = match digits.find(['p', 'P']) {
        Some(at) => (&digits[..at], digits[at + 1..].parse::<i32>().ok()?),
        None => (digits, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for ch in whole.chars().chain(fraction.chars()) {
        value = value * 16.0 + f64::from(ch.to_digit(16)?);
    }
    let scale = exponent.checked_sub(i32::try_from(fraction.len()).ok()?.checked_mul(4)?)?;
    if value == 0.0 {
        return Some(0.0);
    }
    Some(value * 2f64.powi(scale))
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            // Integral floats keep a fraction so they read back as floats
            Number::Float(value) if value.fract() == 0.0 && value.abs() < 1e16 => {
                write!(f, "{:.1}", value)
            }
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}
