// FAQ Domain Model

use serde::{Deserialize, Serialize};

/// FAQ ID (UUID v4)
pub type FaqId = String;

/// Frequently asked question entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

impl Faq {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category,
        }
    }
}
