//! Floating-point precision settings for the computation.
//!
//! The precision is an explicit value handed to
//! [`fibonacci_with`](crate::fibonacci::fibonacci_with); nothing here touches
//! process-wide floating-point state.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use twofloat::TwoFloat;

use crate::math::Scalar;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown precision: {0:?} (expected single, double or extended)")]
    UnknownPrecision(String),
}

/// Floating-point width used for the matrix entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `f32`, 24-bit mantissa.
    Single,
    /// `f64`, 53-bit mantissa.
    Double,
    /// Double-double ([`TwoFloat`]), 106-bit mantissa with the exponent range
    /// of `f64`. The widest width available and the default.
    #[default]
    Extended,
}

impl Precision {
    /// Number of significant bits the type represents exactly.
    pub fn mantissa_bits(self) -> u32 {
        match self {
            Precision::Single => f32::MANTISSA_DIGITS,
            Precision::Double => f64::MANTISSA_DIGITS,
            Precision::Extended => 2 * f64::MANTISSA_DIGITS,
        }
    }

    /// Largest index whose Fibonacci number, and every one before it, is
    /// below `2^mantissa_bits`. Results up to here are integer-exact.
    pub fn exact_limit(self) -> u64 {
        match self {
            Precision::Single => 36,
            Precision::Double => 78,
            Precision::Extended => 154,
        }
    }

    /// Largest index whose Fibonacci number is finite at this width. Past it
    /// the result is `+inf`.
    pub fn finite_limit(self) -> u64 {
        match self {
            Precision::Single => 186,
            Precision::Double | Precision::Extended => 1476,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => f.write_str("single"),
            Precision::Double => f.write_str("double"),
            Precision::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for Precision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "f32" => Ok(Precision::Single),
            "double" | "f64" => Ok(Precision::Double),
            "extended" | "double-double" | "dd" => Ok(Precision::Extended),
            _ => Err(ConfigError::UnknownPrecision(s.to_string())),
        }
    }
}

/// Scalar types a Fibonacci number can be computed in.
pub trait Real: Scalar + fmt::Debug {
    const PRECISION: Precision;

    fn is_finite(self) -> bool;

    fn infinity() -> Self;
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    fn is_finite(self) -> bool {
        <f32 as Float>::is_finite(self)
    }

    fn infinity() -> Self {
        <f32 as Float>::infinity()
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    fn is_finite(self) -> bool {
        <f64 as Float>::is_finite(self)
    }

    fn infinity() -> Self {
        <f64 as Float>::infinity()
    }
}

// Overflow in double-double arithmetic yields NaN rather than inf
impl Real for TwoFloat {
    const PRECISION: Precision = Precision::Extended;

    fn is_finite(self) -> bool {
        self.hi().is_finite() && self.lo().is_finite()
    }

    fn infinity() -> Self {
        TwoFloat::from(f64::INFINITY)
    }
}

/// Settings for a single computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub precision: Precision,
}

impl Config {
    pub fn new(precision: Precision) -> Self {
        Config { precision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exact Fibonacci numbers; F(186) still fits in a u128
    fn exact_fib(n: u64) -> u128 {
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 0..n {
            let next = a + b;
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn mantissa_widths() {
        assert_eq!(Precision::Single.mantissa_bits(), 24);
        assert_eq!(Precision::Double.mantissa_bits(), 53);
        assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
        assert_eq!(Precision::Extended.mantissa_bits(), 106);
        assert_eq!(<f64 as Real>::PRECISION, Precision::Double);
        assert_eq!(<TwoFloat as Real>::PRECISION, Precision::Extended);
    }

    #[test]
    fn exact_limit_is_last_index_below_mantissa() {
        for precision in [Precision::Single, Precision::Double, Precision::Extended] {
            let ceiling = 1u128 << precision.mantissa_bits();
            let limit = precision.exact_limit();
            assert!(exact_fib(limit) < ceiling, "{precision}");
            assert!(exact_fib(limit + 1) >= ceiling, "{precision}");
        }
    }

    // First index whose value, summed in f64, exceeds `max`
    fn first_index_above(max: f64) -> u64 {
        let (mut a, mut b, mut n) = (0f64, 1f64, 0u64);
        while a <= max {
            let next = a + b;
            a = b;
            b = next;
            n += 1;
        }
        n
    }

    #[test]
    fn finite_limits() {
        assert_eq!(first_index_above(f32::MAX as f64), Precision::Single.finite_limit() + 1);
        assert_eq!(first_index_above(f64::MAX), Precision::Double.finite_limit() + 1);
        assert_eq!(first_index_above(f64::MAX), Precision::Extended.finite_limit() + 1);
    }

    #[test]
    fn double_double_overflow_is_not_finite() {
        assert!(Real::is_finite(TwoFloat::from(1.0e308)));
        assert!(!Real::is_finite(<TwoFloat as Real>::infinity()));
        assert!(!Real::is_finite(TwoFloat::from(f64::NAN)));
    }

    #[test]
    fn parse_precision() {
        assert_eq!("single".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!("F32".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!("Double".parse::<Precision>().unwrap(), Precision::Double);
        assert_eq!("f64".parse::<Precision>().unwrap(), Precision::Double);
        assert_eq!("extended".parse::<Precision>().unwrap(), Precision::Extended);
        assert_eq!("DD".parse::<Precision>().unwrap(), Precision::Extended);
        assert!(matches!(
            "quad".parse::<Precision>(),
            Err(ConfigError::UnknownPrecision(s)) if s == "quad"
        ));
    }

    #[test]
    fn display_round_trips() {
        for precision in [Precision::Single, Precision::Double, Precision::Extended] {
            assert_eq!(precision.to_string().parse::<Precision>().unwrap(), precision);
        }
    }

    #[test]
    fn default_is_widest() {
        assert_eq!(Config::default().precision, Precision::Extended);
        assert_eq!(Config::new(Precision::Single).precision, Precision::Single);
    }
}
