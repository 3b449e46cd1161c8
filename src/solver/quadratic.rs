// ============================================================================
// Quadratic Solver
// Larger real root of a·x² + b·x + c = 0 in fixed-point arithmetic
// ============================================================================

use super::errors::{SolverError, SolverResult};
use crate::domain::{Coefficients, SolverConfig};
use crate::interfaces::{NoOpObserver, SolveEvent, SolveObserver};
use crate::numeric::{FixedPoint, ScaledValue};
use std::sync::Arc;

/// Outcome of a successful solve, with the intermediates that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// `b² − 4ac`
    pub discriminant: ScaledValue,

    /// Newton square root of the discriminant
    pub sqrt_discriminant: ScaledValue,

    /// `(−b − √Δ) / 2a`
    pub root1: ScaledValue,

    /// `(−b + √Δ) / 2a`
    pub root2: ScaledValue,

    /// `max(root1, root2)`, guaranteed non-negative
    pub root: ScaledValue,
}

/// Quadratic root evaluator on top of the fixed-point engine
///
/// # Example
/// ```
/// use quadratic_solver::prelude::*;
///
/// let solver = QuadraticSolver::default();
/// let one = solver.engine().scale().units(1);
/// let coefficients = Coefficients::parse(
///     "1000000000000000000000000000",
///     "-3000000000000000000000000000",
///     "2000000000000000000000000000",
/// )
/// .unwrap();
///
/// let root = solver.solve_root(&coefficients).unwrap();
/// assert_eq!(root.to_string(), "2000000000000000000000000000");
/// assert!(root > one);
/// ```
pub struct QuadraticSolver {
    /// Arithmetic engine (carries the scale)
    engine: FixedPoint,

    /// Observer for intermediate values
    observer: Arc<dyn SolveObserver>,
}

impl QuadraticSolver {
    /// Create a new solver
    pub fn new(engine: FixedPoint, observer: Arc<dyn SolveObserver>) -> Self {
        Self { engine, observer }
    }

    /// Creates a solver from configuration
    ///
    /// # Returns
    /// * `Result<QuadraticSolver, String>` - Configured solver or validation error
    pub fn from_config(
        config: &SolverConfig,
        observer: Arc<dyn SolveObserver>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(FixedPoint::new(config.scale()), observer))
    }

    #[inline]
    pub fn engine(&self) -> &FixedPoint {
        &self.engine
    }

    /// `b² − 4ac`, with `4` applied as the scaled constant `4·SCALE`.
    pub fn discriminant(&self, a: &ScaledValue, b: &ScaledValue, c: &ScaledValue) -> ScaledValue {
        let fp = &self.engine;
        let four_ac = fp.mul(&fp.scale().units(4), &fp.mul(a, c));
        fp.sub(&fp.mul(b, b), &four_ac)
    }

    /// Solve for the larger root.
    ///
    /// # Errors
    /// - `NegativeDiscriminant` when there is no real root
    /// - `Numeric(DivisionByZero)` when `a = 0` (no linear fallback)
    /// - `NegativeRoot` when the larger root is below zero
    pub fn solve(&self, coefficients: &Coefficients) -> SolverResult<Solution> {
        let fp = &self.engine;
        let (a, b, c) = coefficients.scaled();

        let b_squared = fp.mul(&b, &b);
        let ac = fp.mul(&a, &c);
        let four_ac = fp.mul(&fp.scale().units(4), &ac);
        let discriminant = fp.sub(&b_squared, &four_ac);

        self.observer.on_event(SolveEvent::DiscriminantComputed {
            b_squared,
            ac,
            four_ac,
            discriminant: discriminant.clone(),
        });

        if discriminant.is_negative() {
            return Err(SolverError::NegativeDiscriminant { discriminant });
        }

        let sqrt_discriminant = fp.sqrt(&discriminant)?;
        self.observer.on_event(SolveEvent::SquareRootComputed {
            sqrt_discriminant: sqrt_discriminant.clone(),
            squared_back: fp.mul(&sqrt_discriminant, &sqrt_discriminant),
        });

        // a is already scaled, so raw doubling keeps the scale
        let two_a = fp.double(&a);
        let neg_b = -&b;
        let root1 = fp.div(&fp.sub(&neg_b, &sqrt_discriminant), &two_a)?;
        let root2 = fp.div(&fp.add(&neg_b, &sqrt_discriminant), &two_a)?;

        self.observer.on_event(SolveEvent::RootsComputed {
            root1: root1.clone(),
            root2: root2.clone(),
        });

        let root = root1.clone().max(root2.clone());
        if root.is_negative() {
            return Err(SolverError::NegativeRoot { root });
        }

        self.observer
            .on_event(SolveEvent::RootSelected { root: root.clone() });

        Ok(Solution {
            discriminant,
            sqrt_discriminant,
            root1,
            root2,
            root,
        })
    }

    /// Solve and keep only the selected root.
    pub fn solve_root(&self, coefficients: &Coefficients) -> SolverResult<ScaledValue> {
        self.solve(coefficients).map(|solution| solution.root)
    }

    /// Parse three base-10 coefficients (wrapped to 128 bits) and solve.
    pub fn solve_str(&self, a: &str, b: &str, c: &str) -> SolverResult<Solution> {
        let coefficients = Coefficients::parse(a, b, c)?;
        self.solve(&coefficients)
    }

    /// `a·x² + b·x + c` evaluated with the engine's truncating arithmetic.
    pub fn residual(&self, coefficients: &Coefficients, x: &ScaledValue) -> ScaledValue {
        let fp = &self.engine;
        let (a, b, c) = coefficients.scaled();
        let quadratic = fp.mul(&a, &fp.mul(x, x));
        fp.add(&fp.add(&quadratic, &fp.mul(&b, x)), &c)
    }
}

impl Default for QuadraticSolver {
    /// 10^27 scale, no observer.
    fn default() -> Self {
        Self::new(FixedPoint::default(), Arc::new(NoOpObserver))
    }
}
