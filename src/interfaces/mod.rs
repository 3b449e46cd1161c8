// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod solve_observer;

pub use solve_observer::{LoggingObserver, NoOpObserver, SolveEvent, SolveObserver};
