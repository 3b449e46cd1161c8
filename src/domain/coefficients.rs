// ============================================================================
// Coefficients Domain Model
// Pre-scaled quadratic coefficients clipped to the signed 128-bit domain
// ============================================================================

use crate::numeric::{NumericError, NumericResult, ScaledValue};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrap an integer of any size into `i128` by two's-complement truncation.
///
/// Keeps the low 128 bits and reinterprets them as signed, so `2^127`
/// becomes `-2^127` and `2^128 + 5` becomes `5`. Never saturates.
pub fn wrap_i128(value: &BigInt) -> i128 {
    let modulus = BigInt::one() << 128usize;
    let half = BigInt::one() << 127usize;

    let mut low = value.mod_floor(&modulus);
    if low >= half {
        low -= &modulus;
    }
    // In [-2^127, 2^127) after the adjustment above.
    low.to_i128().unwrap_or_default()
}

/// Coefficients of `a·x² + b·x + c = 0`, each already scaled by the
/// solver's scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coefficients {
    pub a: i128,
    pub b: i128,
    pub c: i128,
}

impl Coefficients {
    pub fn new(a: i128, b: i128, c: i128) -> Self {
        Self { a, b, c }
    }

    /// Clip arbitrary-size integers into the 128-bit coefficient domain.
    pub fn wrapping(a: &BigInt, b: &BigInt, c: &BigInt) -> Self {
        Self::new(wrap_i128(a), wrap_i128(b), wrap_i128(c))
    }

    /// Parse three base-10 integers of any magnitude and wrap them.
    ///
    /// # Errors
    /// Returns `InvalidInput` if any argument is not an integer.
    pub fn parse(a: &str, b: &str, c: &str) -> NumericResult<Self> {
        Ok(Self::wrapping(
            &parse_integer(a)?,
            &parse_integer(b)?,
            &parse_integer(c)?,
        ))
    }

    /// The coefficients as scaled values `(a, b, c)`.
    pub fn scaled(&self) -> (ScaledValue, ScaledValue, ScaledValue) {
        (
            ScaledValue::from(self.a),
            ScaledValue::from(self.b),
            ScaledValue::from(self.c),
        )
    }
}

fn parse_integer(s: &str) -> NumericResult<BigInt> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumericError::InvalidInput);
    }
    BigInt::from_str(s).map_err(|_| NumericError::InvalidInput)
}
