// src/scorer.rs

use std::fmt;

use crate::models::question::Question;

/// Outcome of scoring one submission against the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
}

/// Errors a submission can fail with before any row is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Fewer answers than questions. Rejected outright instead of
    /// counting the missing positions as wrong.
    MalformedSubmission(String),

    /// The catalog has zero questions; a percentage cannot be computed.
    EmptyCatalog,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::MalformedSubmission(msg) => write!(f, "malformed submission: {}", msg),
            ScoreError::EmptyCatalog => write!(f, "question catalog is empty"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Scores `answers` against `questions` positionally.
///
/// An answer matches when, trimmed and lowercased, it equals the stored
/// canonical answer exactly. No partial credit. Extra answers beyond the
/// catalog length are ignored; a short answer list is an error.
/// Pure and deterministic; no side effects.
pub fn score(questions: &[Question], answers: &[String]) -> Result<Score, ScoreError> {
    if questions.is_empty() {
        return Err(ScoreError::EmptyCatalog);
    }

    if answers.len() < questions.len() {
        return Err(ScoreError::MalformedSubmission(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| answer.trim().to_lowercase() == question.a)
        .count() as i64;

    let total = questions.len() as i64;
    let percentage = (correct as f64 / total as f64) * 100.0;

    Ok(Score {
        correct,
        total,
        percentage,
    })
}
