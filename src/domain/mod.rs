// ============================================================================
// Domain Models Module
// Solver inputs and configuration
// ============================================================================

pub mod coefficients;
pub mod config;

pub use coefficients::{wrap_i128, Coefficients};
pub use config::{SolverConfig, MAX_SCALE_EXPONENT};
