// src/models/question.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single quiz question with its canonical answer.
///
/// Field names match the wire format (`q`/`a`) expected by existing
/// clients. `a` is stored already trimmed and lowercased; submitted
/// answers are normalized the same way before comparison.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// The question text.
    pub q: String,

    /// The canonical correct answer, lowercase and trimmed.
    pub a: String,
}

impl Question {
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}
