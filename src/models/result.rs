// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Represents the 'results' table in the database.
/// One row per scored submission; rows are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
}

/// DTO for returning a result to the client (excludes the row id).
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultEntry {
    pub name: String,
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
}

impl From<QuizResult> for ResultEntry {
    fn from(r: QuizResult) -> Self {
        Self {
            name: r.name,
            score: r.score,
            total: r.total,
            percentage: r.percentage,
        }
    }
}

/// DTO for submitting a quiz attempt.
///
/// `answers` is kept optional so an absent or mistyped field is reported
/// as a 400 at the boundary instead of a framework rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitRequest {
    /// Participant name; defaults to "Unknown" when omitted.
    /// Bounded to the width of the `name` column.
    #[validate(length(max = 100))]
    pub name: Option<String>,

    /// The participant's answers, matched positionally against the catalog.
    #[serde(default)]
    pub answers: Option<Vec<String>>,
}

/// DTO for the submit response. `total` is intentionally not part of the
/// payload; existing clients only consume name/score/percentage.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub name: String,
    pub score: i64,
    pub percentage: f64,
}
