use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PollsError, Result};
use crate::store::QuestionStore;

/// A question loaded into the store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    /// Question text.
    pub text: String,

    /// Absolute publication date (RFC 3339).
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,

    /// Publication date relative to startup, in days. Negative is the past.
    #[serde(default)]
    pub days_from_now: Option<i64>,

    /// Choice texts, in display order.
    #[serde(default)]
    pub choices: Vec<String>,
}

impl SeedQuestion {
    /// Resolve the publication date against `now`.
    ///
    /// Exactly one of `pub_date` and `days_from_now` must be set.
    pub fn resolve_pub_date(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        match (self.pub_date, self.days_from_now) {
            (Some(date), None) => Ok(date),
            (None, Some(days)) => Duration::try_days(days)
                .and_then(|offset| now.checked_add_signed(offset))
                .ok_or_else(|| {
                    PollsError::Config(format!(
                        "days_from_now out of range for question '{}'",
                        self.text
                    ))
                }),
            (Some(_), Some(_)) => Err(PollsError::Config(format!(
                "question '{}' sets both pub_date and days_from_now",
                self.text
            ))),
            (None, None) => Err(PollsError::Config(format!(
                "question '{}' needs pub_date or days_from_now",
                self.text
            ))),
        }
    }
}

/// Check every seed question without touching a store.
pub fn validate_seed(questions: &[SeedQuestion], now: DateTime<Utc>) -> Result<()> {
    for seed in questions {
        seed.resolve_pub_date(now)?;
        if seed.text.trim().is_empty() {
            return Err(PollsError::Config("seed question text is empty".to_string()));
        }
        if seed.choices.iter().any(|c| c.trim().is_empty()) {
            return Err(PollsError::Config(format!(
                "question '{}' has an empty choice",
                seed.text
            )));
        }
    }
    Ok(())
}

/// Insert seed questions and their choices. Returns the number of questions created.
pub async fn load_seed(
    store: &dyn QuestionStore,
    questions: &[SeedQuestion],
    now: DateTime<Utc>,
) -> Result<usize> {
    validate_seed(questions, now)?;
    for seed in questions {
        let question = store
            .create_question(seed.text.clone(), seed.resolve_pub_date(now)?)
            .await?;
        for choice in &seed.choices {
            store.add_choice(question.id, choice.clone()).await?;
        }
    }
    tracing::info!(count = questions.len(), "Loaded seed questions");
    Ok(questions.len())
}
