// ============================================================================
// Solver Configuration
// Scale selection and validation for the quadratic solver
// ============================================================================

use crate::numeric::Scale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest exponent whose `1.0` (10^exponent) still fits a 128-bit coefficient.
pub const MAX_SCALE_EXPONENT: u32 = 38;

/// Configuration for a [`QuadraticSolver`](crate::solver::QuadraticSolver)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Decimal exponent of the fixed-point scale used for all arithmetic
    pub scale_exponent: u32,

    /// Optional: exponent the caller claims its inputs use.
    /// Informational only; it never changes `scale_exponent`.
    pub declared_exponent: Option<u32>,
}

impl SolverConfig {
    /// Create a configuration for the scale `10^scale_exponent`
    pub fn new(scale_exponent: u32) -> Self {
        Self {
            scale_exponent,
            declared_exponent: None,
        }
    }

    /// Builder method: Record the caller's declared scale exponent
    pub fn with_declared_exponent(mut self, exponent: u32) -> Self {
        self.declared_exponent = Some(exponent);
        self
    }

    /// Builder method: Override the arithmetic scale exponent
    pub fn with_scale_exponent(mut self, exponent: u32) -> Self {
        self.scale_exponent = exponent;
        self
    }

    /// The scale all arithmetic runs at.
    pub fn scale(&self) -> Scale {
        Scale::new(self.scale_exponent)
    }

    /// The declared exponent, if it disagrees with the arithmetic scale.
    pub fn declared_mismatch(&self) -> Option<u32> {
        self.declared_exponent
            .filter(|declared| *declared != self.scale_exponent)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.scale_exponent > MAX_SCALE_EXPONENT {
            return Err(format!(
                "Scale exponent {} exceeds the 128-bit coefficient domain (max {})",
                self.scale_exponent, MAX_SCALE_EXPONENT
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    /// 27 decimal places, the precision of the on-chain consumers.
    fn default() -> Self {
        Self::new(Scale::DEFAULT_EXPONENT)
    }
}
