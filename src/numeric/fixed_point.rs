// ============================================================================
// Fixed-Point Engine
// Truncating scaled arithmetic and Newton square root over big integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scaled_value::{Scale, ScaledValue};

/// Scaled-integer arithmetic engine for one [`Scale`].
///
/// Reproduces integer-VM semantics: addition and subtraction are exact,
/// multiplication and division truncate toward zero after the full-width
/// product has been formed.
///
/// # Example
/// ```
/// use quadratic_solver::numeric::{FixedPoint, Scale};
///
/// let fp = FixedPoint::new(Scale::default());
/// let two = fp.scale().units(2);
/// let root = fp.sqrt(&fp.mul(&two, &two)).unwrap();
/// assert_eq!(root, two);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedPoint {
    scale: Scale,
}

impl FixedPoint {
    pub fn new(scale: Scale) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    #[inline]
    pub fn add(&self, x: &ScaledValue, y: &ScaledValue) -> ScaledValue {
        ScaledValue::from_raw(x.raw() + y.raw())
    }

    /// Exact subtraction.
    #[inline]
    pub fn sub(&self, x: &ScaledValue, y: &ScaledValue) -> ScaledValue {
        ScaledValue::from_raw(x.raw() - y.raw())
    }

    /// Scaled multiplication: `(x × y) ÷ SCALE`, truncated toward zero.
    #[inline]
    pub fn mul(&self, x: &ScaledValue, y: &ScaledValue) -> ScaledValue {
        ScaledValue::from_raw((x.raw() * y.raw()) / self.scale.factor())
    }

    /// Scaled division: `(x × SCALE) ÷ y`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `y` is zero.
    #[inline]
    pub fn div(&self, x: &ScaledValue, y: &ScaledValue) -> NumericResult<ScaledValue> {
        if y.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(ScaledValue::from_raw(
            (x.raw() * self.scale.factor()) / y.raw(),
        ))
    }

    /// Raw doubling. Equal to `mul(2·SCALE, x)`, which is always exact.
    #[inline]
    pub fn double(&self, x: &ScaledValue) -> ScaledValue {
        ScaledValue::from_raw(x.raw() * 2)
    }

    // ========================================================================
    // Square Root
    // ========================================================================

    /// Scaled square root via integer Newton iteration.
    ///
    /// Converges toward `sqrt(value / SCALE) × SCALE` from above and returns
    /// the last estimate before the sequence stops decreasing.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` if `value` is negative.
    pub fn sqrt(&self, value: &ScaledValue) -> NumericResult<ScaledValue> {
        let mut root = ScaledValue::zero();
        let mut iterations = 0u32;
        for estimate in self.sqrt_estimates(value)? {
            root = estimate;
            iterations += 1;
        }
        tracing::trace!(%value, %root, iterations, "sqrt converged");
        Ok(root)
    }

    /// Successive Newton estimates for `sqrt(value)`: the seed first, the
    /// result last. Every yielded estimate is strictly smaller than the one
    /// before it.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` if `value` is negative.
    pub fn sqrt_estimates(&self, value: &ScaledValue) -> NumericResult<SqrtEstimates<'_>> {
        if value.is_negative() {
            return Err(NumericError::NegativeSquareRoot);
        }
        Ok(SqrtEstimates {
            engine: self,
            value: value.clone(),
            previous: None,
            pending: Some(self.newton_seed(value)),
        })
    }

    /// Starting point of the iteration; must not be below the scaled root.
    ///
    /// The raw `value / 2 + 1` over-estimates `sqrt(value × SCALE)` only
    /// when `value ≥ 4·SCALE`. Smaller values have a scaled root below
    /// `2·SCALE`, which is used instead.
    fn newton_seed(&self, value: &ScaledValue) -> ScaledValue {
        if value.is_zero() {
            return ScaledValue::zero();
        }
        let threshold = self.scale.factor() * 4u32;
        if value.raw() >= &threshold {
            ScaledValue::from_raw(value.raw() / 2u32 + 1u32)
        } else {
            ScaledValue::from_raw(self.scale.factor() * 2u32)
        }
    }

    /// `x ← (x² + value) / (2x)` in scaled arithmetic.
    fn newton_step(&self, x: &ScaledValue, value: &ScaledValue) -> NumericResult<ScaledValue> {
        let numerator = self.add(&self.mul(x, x), value);
        self.div(&numerator, &self.double(x))
    }
}

/// Iterator over Newton square-root estimates.
///
/// Created by [`FixedPoint::sqrt_estimates`].
pub struct SqrtEstimates<'a> {
    engine: &'a FixedPoint,
    value: ScaledValue,
    previous: Option<ScaledValue>,
    pending: Option<ScaledValue>,
}

impl Iterator for SqrtEstimates<'_> {
    type Item = ScaledValue;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.pending.take()?;
        if let Some(previous) = &self.previous {
            if candidate >= *previous {
                return None;
            }
        }

        // Estimates stay positive for positive input, so 2x never hits zero.
        if candidate.is_zero() {
            self.pending = None;
        } else {
            self.pending = self.engine.newton_step(&candidate, &self.value).ok();
        }
        self.previous = Some(candidate.clone());
        Some(candidate)
    }
}

// ============================================================================
// Tests
// ============================================================================
