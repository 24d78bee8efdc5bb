//! Testing utilities for polls applications.
//!
//! Assertion macros plus fixture helpers that create questions relative to
//! a fixed "now", so tests never race the wall clock.
//!
//! # Example
//!
//! ```ignore
//! use polls_core::testing::create_question;
//!
//! #[tokio::test]
//! async fn test_future_question_hidden() {
//!     let store = MemoryStore::new();
//!     let now = Utc::now();
//!     create_question(&store, "Future question.", 30, now).await?;
//!     assert!(store.published_questions(now, None).await?.is_empty());
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::{create_question, create_question_with_choices};
