// ============================================================================
// Solver Errors
// Terminal failures of a quadratic solve
// ============================================================================

use crate::numeric::{NumericError, ScaledValue};
use std::fmt;

/// Errors that terminate a quadratic solve. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// `b² − 4ac < 0`: only real roots are supported
    NegativeDiscriminant { discriminant: ScaledValue },
    /// The larger root is negative: no admissible solution
    NegativeRoot { root: ScaledValue },
    /// Failure inside the fixed-point engine (e.g. `a = 0`)
    Numeric(NumericError),
}

impl SolverError {
    /// Stable name of the error kind, for callers mapping failures.
    pub fn kind(&self) -> &'static str {
        match self {
            SolverError::NegativeDiscriminant { .. } => "NegativeDiscriminant",
            SolverError::NegativeRoot { .. } => "NegativeRoot",
            SolverError::Numeric(NumericError::DivisionByZero) => "DivisionByZero",
            SolverError::Numeric(NumericError::NegativeSquareRoot) => "NegativeSquareRoot",
            SolverError::Numeric(NumericError::PrecisionLoss) => "PrecisionLoss",
            SolverError::Numeric(NumericError::InvalidInput) => "InvalidInput",
            SolverError::Numeric(NumericError::Overflow) => "Overflow",
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::NegativeDiscriminant { discriminant } => write!(
                f,
                "discriminant should not be negative (discriminant = {})",
                discriminant
            ),
            SolverError::NegativeRoot { root } => {
                write!(f, "the x-intercept should not be negative (root = {})", root)
            },
            SolverError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for SolverError {
    fn from(err: NumericError) -> Self {
        SolverError::Numeric(err)
    }
}

/// Result type alias for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = SolverError::NegativeDiscriminant {
            discriminant: ScaledValue::from_raw(-4),
        };
        assert_eq!(
            err.to_string(),
            "discriminant should not be negative (discriminant = -4)"
        );

        let err = SolverError::from(NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            SolverError::NegativeRoot {
                root: ScaledValue::from_raw(-1)
            }
            .kind(),
            "NegativeRoot"
        );
        assert_eq!(
            SolverError::Numeric(NumericError::DivisionByZero).kind(),
            "DivisionByZero"
        );
    }

    #[test]
    fn test_error_source() {
        let err = SolverError::from(NumericError::NegativeSquareRoot);
        assert!(err.source().is_some());

        let err = SolverError::NegativeRoot {
            root: ScaledValue::from_raw(-1),
        };
        assert!(err.source().is_none());
    }
}
