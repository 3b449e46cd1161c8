// ============================================================================
// Solver Module
// Quadratic root evaluation on top of the fixed-point engine
// ============================================================================

mod errors;
mod quadratic;

pub use errors::{SolverError, SolverResult};
pub use quadratic::{QuadraticSolver, Solution};
