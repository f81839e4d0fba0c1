//! Answer payload returned by the policy backend

use serde::{Deserialize, Serialize};

/// The structured result of a successful policy query.
///
/// Deserialized directly from the backend response body:
/// `{"summary": "...", "bullets": ["...", ...]}`. Bullet order is rendering
/// order; an empty bullet list is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// Prose summary of the answer
    pub summary: String,
    /// Ordered key details
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl AnswerPayload {
    pub fn new(summary: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            bullets,
        }
    }

    /// Whether the payload carries any key details
    pub fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }
}
