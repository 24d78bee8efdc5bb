use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::visibility;

/// Identifier of a question, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a choice, unique across all questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub u64);

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A poll question.
///
/// Publication state is never stored; ask [`Question::is_published`] or
/// [`Question::was_published_recently`] with the current time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    /// Whether the question was published within the last day.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        visibility::was_published_recently(self, now)
    }

    /// Whether the question is visible at `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        visibility::is_currently_published(self, now)
    }

    /// Look up one of this question's choices.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Sum of votes over all choices.
    pub fn total_votes(&self) -> u64 {
        self.choices.iter().map(|c| c.votes).sum()
    }
}

/// A votable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub text: String,
    pub votes: u64,
}
