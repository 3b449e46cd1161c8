// ============================================================================
// Quadratic Solver Library
// Deterministic fixed-point root finding with integer-VM truncation semantics
// ============================================================================

//! # Quadratic Solver
//!
//! Computes the non-negative root of `a·x² + b·x + c = 0` with scaled-integer
//! arithmetic that truncates exactly like an integer-only virtual machine,
//! so off-chain results match on-chain ones digit for digit.
//!
//! ## Features
//!
//! - **Arbitrary-precision intermediates**: wide products never wrap
//! - **Truncation toward zero** on every scaled multiply and divide
//! - **Newton integer square root** over the scaled representation
//! - **Explicit scale** threaded through the engine (default `10^27`)
//! - **Typed errors** for every rejection path
//!
//! ## Example
//!
//! ```rust
//! use quadratic_solver::prelude::*;
//!
//! // x² - 3x + 2 = 0, coefficients pre-scaled by 10^27
//! let solver = QuadraticSolver::default();
//! let scale = solver.engine().scale().clone();
//! let coefficients = Coefficients::new(
//!     1_000_000_000_000_000_000_000_000_000,
//!     -3_000_000_000_000_000_000_000_000_000,
//!     2_000_000_000_000_000_000_000_000_000,
//! );
//!
//! let solution = solver.solve(&coefficients).unwrap();
//! println!("Root: {}", solution.root.display(&scale));
//! assert_eq!(solution.root, scale.units(2));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
#[cfg(feature = "serde")]
pub mod output;
pub mod solver;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{wrap_i128, Coefficients, SolverConfig};
    pub use crate::interfaces::{LoggingObserver, NoOpObserver, SolveEvent, SolveObserver};
    pub use crate::numeric::{FixedPoint, NumericError, NumericResult, Scale, ScaledValue};
    #[cfg(feature = "serde")]
    pub use crate::output::RootReport;
    pub use crate::solver::{QuadraticSolver, Solution, SolverError, SolverResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_solve() {
        let config = SolverConfig::default().with_declared_exponent(27);
        let solver = QuadraticSolver::from_config(&config, Arc::new(LoggingObserver)).unwrap();

        let solution = solver
            .solve_str(
                "1000000000000000000000000000",
                "-3000000000000000000000000000",
                "2000000000000000000000000000",
            )
            .unwrap();

        assert_eq!(solution.root.to_string(), "2000000000000000000000000000");
        assert_eq!(
            solution.root.display(solver.engine().scale()).to_string(),
            "2.0"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_end_to_end_json() {
        let solver = QuadraticSolver::default();
        let root = solver
            .solve_root(&Coefficients::new(
                1_000_000_000_000_000_000_000_000_000,
                -3_000_000_000_000_000_000_000_000_000,
                2_000_000_000_000_000_000_000_000_000,
            ))
            .unwrap();

        assert_eq!(
            RootReport::new(&root).to_json().unwrap(),
            r#"{"root":"2000000000000000000000000000"}"#
        );
    }

    #[test]
    fn test_wrapped_inputs_reach_solver() {
        // 2^128 + 10^27 wraps to 10^27
        let solver = QuadraticSolver::default();
        let solution = solver
            .solve_str(
                "340282366921938463463374607431768211456",
                "-2000000000000000000000000000",
                "1000000000000000000000000000",
            )
            .unwrap();
        assert_eq!(solution.root, solver.engine().scale().one());
    }

    #[test]
    fn test_every_rejection_kind() {
        let solver = QuadraticSolver::default();
        let one = 1_000_000_000_000_000_000_000_000_000i128;

        let kinds: Vec<&str> = [
            Coefficients::new(one, 0, one),
            Coefficients::new(0, one, -one),
            Coefficients::new(one, 3 * one, 2 * one),
        ]
        .iter()
        .map(|c| solver.solve(c).unwrap_err().kind())
        .collect();

        assert_eq!(
            kinds,
            vec!["NegativeDiscriminant", "DivisionByZero", "NegativeRoot"]
        );
    }
}
