// src/catalog.rs

use std::sync::Arc;

use crate::models::question::Question;

/// The fixed, process-wide question set.
///
/// Built once at startup and shared read-only across request handlers;
/// never mutated afterwards, so concurrent reads need no synchronization.
/// Order is significant: submitted answers are matched by index.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Arc<Vec<Question>>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }

    /// The built-in question set served by this deployment.
    pub fn builtin() -> Self {
        Self::new(vec![
            Question::new("What does CPU stand for?", "central processing unit"),
            Question::new("What does GPU stand for?", "graphical processing unit"),
            Question::new("What does RAM stand for?", "random access memory"),
            Question::new("What does ROM stand for?", "read only memory"),
            Question::new("Mouse is an input or output device?", "input"),
        ])
    }

    /// The full catalog, in fixed order. No randomization, no pagination.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_five_questions() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn builtin_catalog_order_is_stable() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.questions()[0].a, "central processing unit");
        assert_eq!(catalog.questions()[4].a, "input");
    }

    #[test]
    fn answers_are_canonical_lowercase() {
        for question in Catalog::builtin().questions() {
            assert_eq!(question.a, question.a.trim().to_lowercase());
        }
    }
}
