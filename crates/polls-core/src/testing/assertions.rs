//! Test assertion macros and helpers.
//!
//! Provides ergonomic assertions for store results and rendered pages.

use crate::error::PollsError;

/// Assert that a result is Ok.
///
/// # Example
///
/// ```ignore
/// let result = store.published_question(id, now).await;
/// assert_ok!(result);
/// assert_ok!(result, "past question should be visible");
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match &$expr {
            Ok(_) => (),
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match &$expr {
            Ok(_) => (),
            Err(e) => panic!("assertion failed: {}: expected Ok, got Err({:?})", format_args!($($arg)+), e),
        }
    };
}

/// Assert that a result is Err.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match &$expr {
            Err(_) => (),
            Ok(v) => panic!("assertion failed: expected Err, got Ok({:?})", v),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match &$expr {
            Err(_) => (),
            Ok(v) => panic!("assertion failed: {}: expected Err, got Ok({:?})", format_args!($($arg)+), v),
        }
    };
}

/// Assert that an error matches a specific variant.
///
/// # Example
///
/// ```ignore
/// let result = store.published_question(QuestionId(99), now).await;
/// assert_err_variant!(result, PollsError::NotFound(_));
/// ```
#[macro_export]
macro_rules! assert_err_variant {
    ($expr:expr, $variant:pat) => {
        match &$expr {
            Err($variant) => (),
            Err(e) => panic!(
                "assertion failed: expected {}, got {:?}",
                stringify!($variant),
                e
            ),
            Ok(v) => panic!(
                "assertion failed: expected Err({}), got Ok({:?})",
                stringify!($variant),
                v
            ),
        }
    };
}

/// Check whether an error's message contains a substring.
pub fn error_contains(error: &PollsError, substring: &str) -> bool {
    error.to_string().contains(substring)
}

/// Assert that `haystack` contains each needle in order.
///
/// Used on rendered HTML to check list ordering without parsing markup.
pub fn assert_contains_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!(
                "assertion failed: '{}' not found in order within:\n{}",
                needle, haystack
            ),
        }
    }
}
