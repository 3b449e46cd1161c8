// ============================================================================
// Solve Observer Interface
// Defines the contract for observing the intermediate values of a solve
// ============================================================================

use crate::numeric::ScaledValue;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Intermediate values emitted by the quadratic solver, in pipeline order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SolveEvent {
    /// `b² − 4ac` evaluated
    DiscriminantComputed {
        b_squared: ScaledValue,
        ac: ScaledValue,
        four_ac: ScaledValue,
        discriminant: ScaledValue,
    },

    /// Square root of the discriminant, and its square for comparison
    SquareRootComputed {
        sqrt_discriminant: ScaledValue,
        squared_back: ScaledValue,
    },

    /// Both algebraic roots
    RootsComputed {
        root1: ScaledValue,
        root2: ScaledValue,
    },

    /// The larger root, accepted as the result
    RootSelected { root: ScaledValue },
}

/// Observer trait for solver events
/// Implementations can handle logging, tracing of iteration, assertions in tests, etc.
pub trait SolveObserver: Send + Sync {
    /// Handle a solver event
    fn on_event(&self, event: SolveEvent);
}

/// No-op observer
pub struct NoOpObserver;

impl SolveObserver for NoOpObserver {
    fn on_event(&self, _event: SolveEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl SolveObserver for LoggingObserver {
    fn on_event(&self, event: SolveEvent) {
        match &event {
            SolveEvent::DiscriminantComputed {
                b_squared,
                ac,
                four_ac,
                discriminant,
            } => tracing::debug!(%b_squared, %ac, %four_ac, %discriminant, "discriminant computed"),
            SolveEvent::SquareRootComputed {
                sqrt_discriminant,
                squared_back,
            } => tracing::debug!(%sqrt_discriminant, %squared_back, "square root computed"),
            SolveEvent::RootsComputed { root1, root2 } => {
                tracing::debug!(%root1, %root2, "roots computed")
            },
            SolveEvent::RootSelected { root } => tracing::debug!(%root, "root selected"),
        }
    }
}
