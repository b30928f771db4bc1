//! Question records, their learning resources, and the create/update draft.

use serde::{Deserialize, Serialize};
use validator::Validate;

use devinterview_core::category::{BadgeTone, Category};
use devinterview_core::question::excerpt;
use devinterview_core::search::Searchable;
use devinterview_core::types::{DbId, Timestamp};

/// A question in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: DbId,
    pub title: String,
    pub category: Category,
    pub model_answer: String,
    /// Markdown.
    pub deep_dive: String,
    #[serde(default)]
    pub learning_resources: Vec<LearningResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// A link attached to a question. Owned by the question; identified only by
/// its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[validate(length(min = 1, message = "Learning resource title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Learning resource URL is required"))]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LearningResource {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload for creating a question or fully replacing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Falls back to [`Category::Backend`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[validate(length(min = 1, message = "Model answer is required"))]
    pub model_answer: String,
    #[serde(default)]
    pub deep_dive: String,
    #[serde(default)]
    #[validate(nested)]
    pub learning_resources: Vec<LearningResource>,
}

impl QuestionDraft {
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Build the stored record for `id` from this draft.
    pub fn into_question(self, id: DbId, now: Timestamp) -> Question {
        let category = self.category_or_default();
        Question {
            id,
            title: self.title,
            category,
            model_answer: self.model_answer,
            deep_dive: self.deep_dive,
            learning_resources: self.learning_resources,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            title: question.title.clone(),
            category: Some(question.category),
            model_answer: question.model_answer.clone(),
            deep_dive: question.deep_dive.clone(),
            learning_resources: question.learning_resources.clone(),
        }
    }
}

/// Listing projection of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub id: DbId,
    pub title: String,
    pub category: Category,
    pub badge_tone: BadgeTone,
    pub excerpt: String,
}

impl Question {
    pub fn summary(&self) -> QuestionSummary {
        QuestionSummary {
            id: self.id,
            title: self.title.clone(),
            category: self.category,
            badge_tone: self.category.badge_tone(),
            excerpt: excerpt(&self.model_answer),
        }
    }
}

impl Searchable for Question {
    fn category(&self) -> Category {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn model_answer(&self) -> &str {
        &self.model_answer
    }
}
