//! Polls - a small question-and-vote web application.
//!
//! Questions become visible once their publication date has passed; the
//! index lists the latest published ones and each question has a detail
//! page, a vote form and a results page.

mod runtime;

pub use polls_core;
pub use polls_runtime;

pub use runtime::prelude;
pub use runtime::{Polls, PollsBuilder};
