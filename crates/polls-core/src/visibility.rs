//! Publication visibility rules.
//!
//! Every function here takes the current time explicitly so results are
//! reproducible in tests. Nothing is cached: a question that is hidden now
//! becomes visible on the first evaluation after its `pub_date`.

use chrono::{DateTime, Duration, Utc};

use crate::model::Question;

/// Length of the trailing "recently published" window, in seconds.
pub const RECENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// The trailing "recently published" window.
pub fn recent_window() -> Duration {
    Duration::seconds(RECENT_WINDOW_SECS)
}

/// True when `pub_date` lies in `(now - 1 day, now]`.
pub fn was_published_recently(question: &Question, now: DateTime<Utc>) -> bool {
    now - recent_window() < question.pub_date && question.pub_date <= now
}

/// True when `pub_date` is not in the future.
pub fn is_currently_published(question: &Question, now: DateTime<Utc>) -> bool {
    question.pub_date <= now
}
