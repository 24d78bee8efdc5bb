//! Core types for the polls application: questions, the publication
//! visibility policy, storage, configuration and errors.

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod visibility;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PollsConfig;
pub use error::{PollsError, Result};
pub use model::{Choice, ChoiceId, Question, QuestionId};
pub use store::{MemoryStore, QuestionStore};
pub use visibility::{is_currently_published, recent_window, was_published_recently};
