// ============================================================================
// Scaled Value
// Arbitrary-precision fixed-point numbers with a runtime scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

// ============================================================================
// Scale
// ============================================================================

/// The fixed-point scale factor `10^exponent`.
///
/// Every [`ScaledValue`] is only meaningful relative to the scale that
/// produced it. Values of different scales must not be mixed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    exponent: u32,
    factor: BigInt,
}

impl Scale {
    /// Default decimal exponent (`SCALE = 10^27`)
    pub const DEFAULT_EXPONENT: u32 = 27;

    /// Create the scale `10^exponent`.
    pub fn new(exponent: u32) -> Self {
        Self {
            exponent,
            factor: BigInt::from(10u32).pow(exponent),
        }
    }

    /// Number of decimal places.
    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The scale factor itself (10^exponent).
    #[inline]
    pub fn factor(&self) -> &BigInt {
        &self.factor
    }

    /// One whole unit (1.0) in this scale.
    #[inline]
    pub fn one(&self) -> ScaledValue {
        ScaledValue(self.factor.clone())
    }

    /// `n` whole units in this scale.
    #[inline]
    pub fn units(&self, n: i64) -> ScaledValue {
        ScaledValue(&self.factor * n)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPONENT)
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scale(10^{})", self.exponent)
    }
}

// ============================================================================
// Scaled Value
// ============================================================================

/// Fixed-point number stored as `trunc(value × SCALE)`.
///
/// The raw integer is unbounded, so products of large operands never wrap
/// before they are scaled back down.
///
/// # Example
/// ```
/// use quadratic_solver::numeric::{Scale, ScaledValue};
///
/// let scale = Scale::new(3);
/// let x: ScaledValue = "1500".parse().unwrap();
/// assert_eq!(x.display(&scale).to_string(), "1.5");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledValue(BigInt);

impl ScaledValue {
    /// Create from the raw scaled representation.
    #[inline]
    pub fn from_raw(raw: impl Into<BigInt>) -> Self {
        Self(raw.into())
    }

    /// Zero, in any scale.
    #[inline]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Get the raw scaled integer.
    #[inline]
    pub fn raw(&self) -> &BigInt {
        &self.0
    }

    /// Consume into the raw scaled integer.
    #[inline]
    pub fn into_raw(self) -> BigInt {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Render the human-readable value (`integer.fraction`) for `scale`.
    #[inline]
    pub fn display<'a>(&'a self, scale: &'a Scale) -> ScaledDisplay<'a> {
        ScaledDisplay { value: self, scale }
    }
}

impl Neg for ScaledValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &ScaledValue {
    type Output = ScaledValue;

    #[inline]
    fn neg(self) -> Self::Output {
        ScaledValue(-&self.0)
    }
}

impl From<i128> for ScaledValue {
    #[inline]
    fn from(raw: i128) -> Self {
        Self(BigInt::from(raw))
    }
}

impl From<BigInt> for ScaledValue {
    #[inline]
    fn from(raw: BigInt) -> Self {
        Self(raw)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// The raw scaled integer, in base 10.
impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaledValue(raw={})", self.0)
    }
}

/// Display adapter that divides a [`ScaledValue`] back down by its scale.
///
/// Trailing zeros of the fraction are trimmed unless a precision is given.
pub struct ScaledDisplay<'a> {
    value: &'a ScaledValue,
    scale: &'a Scale,
}

impl fmt::Display for ScaledDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.value.raw();
        let (integral, fraction) = raw.abs().div_rem(self.scale.factor());
        let sign = if raw.is_negative() { "-" } else { "" };

        let width = self.scale.exponent() as usize;
        if width == 0 {
            return write!(f, "{}{}", sign, integral);
        }

        let frac_str = format!("{:0>width$}", fraction, width = width);
        let final_frac_str = match f.precision() {
            Some(p) => &frac_str[..p.min(width)],
            None => {
                let trimmed = frac_str.trim_end_matches('0');
                if trimmed.is_empty() {
                    "0"
                } else {
                    trimmed
                }
            },
        };

        write!(f, "{}{}.{}", sign, integral, final_frac_str)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ScaledValue {
    /// Convert a human-readable decimal into `scale`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has digits below the scale's resolution
    pub fn from_decimal(d: rust_decimal::Decimal, scale: &Scale) -> NumericResult<Self> {
        let mantissa = BigInt::from(d.mantissa());
        let decimal_scale = d.scale();
        let target_scale = scale.exponent();

        if decimal_scale <= target_scale {
            let multiplier = BigInt::from(10u32).pow(target_scale - decimal_scale);
            return Ok(Self(mantissa * multiplier));
        }

        let divisor = BigInt::from(10u32).pow(decimal_scale - target_scale);
        let (quotient, remainder) = mantissa.div_rem(&divisor);
        if !remainder.is_zero() {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(Self(quotient))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// This is intended for display/debugging only.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than the 96-bit mantissa
    /// (or 28 decimal places) a `Decimal` can carry.
    pub fn to_decimal(&self, scale: &Scale) -> NumericResult<rust_decimal::Decimal> {
        let ten = BigInt::from(10u32);
        let mut mantissa = self.0.clone();
        let mut decimals = scale.exponent();

        // Drop trailing zeros so large whole numbers still fit.
        while decimals > 0 && !mantissa.is_zero() && mantissa.is_multiple_of(&ten) {
            mantissa /= &ten;
            decimals -= 1;
        }
        if mantissa.is_zero() {
            decimals = 0;
        }

        let mantissa = mantissa.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, decimals)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for ScaledValue {
    type Err = NumericError;

    /// Parse the raw scaled integer from base-10 text.
    ///
    /// # Examples
    /// - "2000000000000000000000000000" -> 2.0 at scale 10^27
    /// - "-15" -> raw -15
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        BigInt::from_str(s)
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Serialization (raw decimal string, never a JSON number)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
