// ============================================================================
// Numeric Module
// Fixed-point arithmetic reproducing integer-VM truncation semantics
// ============================================================================
//
// This module provides:
// - Scale: the runtime scale factor 10^exponent (default 10^27)
// - ScaledValue: arbitrary-precision scaled integer
// - FixedPoint: add/sub/mul/div/sqrt engine bound to one Scale
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Truncation toward zero on every scaled multiply and divide
// - Unbounded intermediates (no silent wrap of wide products)
// - All fallible arithmetic returns Result (no panics)

mod errors;
mod fixed_point;
mod scaled_value;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{FixedPoint, SqrtEstimates};
pub use scaled_value::{Scale, ScaledDisplay, ScaledValue};
