//! Target-model profiles.

use serde::{Deserialize, Serialize};

/// Target used when none is given or the given one is unknown.
pub const DEFAULT_TARGET: &str = "claude-3.5-sonnet";

/// Assembler-time additions for one downstream model.
///
/// A profile only ever adds constraints; it never changes extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Target identifier, e.g. `claude-3.5-sonnet`.
    pub id: String,
    /// Appended after the request-derived constraints, in order.
    #[serde(default)]
    pub extra_constraints: Vec<String>,
}

impl ModelProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra_constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.extra_constraints.push(constraint.into());
        self
    }
}
