// ============================================================================
// Output
// JSON rendering of a solved root
// ============================================================================

use crate::numeric::ScaledValue;
use serde::{Deserialize, Serialize};

/// The machine-readable result: `{"root":"<raw scaled decimal>"}`.
///
/// The root stays in its scaled form; callers interpret the scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootReport {
    pub root: String,
}

impl RootReport {
    pub fn new(root: &ScaledValue) -> Self {
        Self {
            root: root.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
