use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{QuestionStore, StoreFuture};
use crate::error::PollsError;
use crate::model::{Choice, ChoiceId, Question, QuestionId};
use crate::visibility::is_currently_published;

/// Message shown when a vote names no valid choice.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

#[derive(Debug, Default)]
struct Inner {
    questions: BTreeMap<QuestionId, Question>,
    next_question_id: u64,
    next_choice_id: u64,
}

/// In-memory question store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions, published or not.
    pub async fn len(&self) -> usize {
        self.inner.read().await.questions.len()
    }

    /// Whether the store holds no questions at all.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.questions.is_empty()
    }
}

fn require_text(text: String, what: &str) -> crate::Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PollsError::Validation(format!("{} text must not be empty", what)));
    }
    Ok(trimmed.to_string())
}

fn not_found(id: QuestionId) -> PollsError {
    PollsError::NotFound(format!("question {}", id))
}

impl QuestionStore for MemoryStore {
    fn create_question(&self, text: String, pub_date: DateTime<Utc>) -> StoreFuture<'_, Question> {
        Box::pin(async move {
            let text = require_text(text, "Question")?;
            let mut inner = self.inner.write().await;
            inner.next_question_id += 1;
            let question = Question {
                id: QuestionId(inner.next_question_id),
                text,
                pub_date,
                choices: Vec::new(),
            };
            inner.questions.insert(question.id, question.clone());
            tracing::debug!(id = %question.id, %pub_date, "Created question");
            Ok(question)
        })
    }

    fn add_choice(&self, question_id: QuestionId, text: String) -> StoreFuture<'_, Choice> {
        Box::pin(async move {
            let text = require_text(text, "Choice")?;
            let mut inner = self.inner.write().await;
            if !inner.questions.contains_key(&question_id) {
                return Err(not_found(question_id));
            }
            inner.next_choice_id += 1;
            let choice = Choice {
                id: ChoiceId(inner.next_choice_id),
                question_id,
                text,
                votes: 0,
            };
            if let Some(question) = inner.questions.get_mut(&question_id) {
                question.choices.push(choice.clone());
            }
            Ok(choice)
        })
    }

    fn published_questions(
        &self,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> StoreFuture<'_, Vec<Question>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            let mut questions: Vec<Question> = inner
                .questions
                .values()
                .filter(|q| is_currently_published(q, now))
                .cloned()
                .collect();
            questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
            if let Some(limit) = limit {
                questions.truncate(limit);
            }
            Ok(questions)
        })
    }

    fn published_question(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> StoreFuture<'_, Question> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner
                .questions
                .get(&id)
                .filter(|q| is_currently_published(q, now))
                .cloned()
                .ok_or_else(|| not_found(id))
        })
    }

    fn vote(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
        now: DateTime<Utc>,
    ) -> StoreFuture<'_, Choice> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let question = inner
                .questions
                .get_mut(&question_id)
                .filter(|q| is_currently_published(q, now))
                .ok_or_else(|| not_found(question_id))?;
            let choice = question
                .choices
                .iter_mut()
                .find(|c| c.id == choice_id)
                .ok_or_else(|| PollsError::Validation(NO_CHOICE_SELECTED.to_string()))?;
            choice.votes += 1;
            Ok(choice.clone())
        })
    }
}
