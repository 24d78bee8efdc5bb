//! Question storage.
//!
//! The read paths (`published_questions`, `published_question`) apply the
//! visibility policy themselves, so callers can never see a future-dated
//! question by accident.

mod memory;

pub use memory::{MemoryStore, NO_CHOICE_SELECTED};

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Choice, ChoiceId, Question, QuestionId};

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Persistence for questions and their choices.
pub trait QuestionStore: Send + Sync {
    /// Create a question. Blank text is rejected.
    fn create_question(&self, text: String, pub_date: DateTime<Utc>) -> StoreFuture<'_, Question>;

    /// Attach a choice to an existing question, published or not.
    fn add_choice(&self, question_id: QuestionId, text: String) -> StoreFuture<'_, Choice>;

    /// Questions published at `now`, latest first, at most `limit` of them.
    fn published_questions(
        &self,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> StoreFuture<'_, Vec<Question>>;

    /// A single question if it exists and is published at `now`.
    ///
    /// Returns `NotFound` both for unknown ids and for future-dated questions.
    fn published_question(&self, id: QuestionId, now: DateTime<Utc>)
        -> StoreFuture<'_, Question>;

    /// Record one vote for `choice_id` on a published question.
    fn vote(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
        now: DateTime<Utc>,
    ) -> StoreFuture<'_, Choice>;
}
