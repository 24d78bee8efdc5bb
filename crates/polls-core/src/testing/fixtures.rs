use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::model::Question;
use crate::store::QuestionStore;

/// Create a question published `days` days from `now`.
///
/// Negative for questions published in the past, positive for questions
/// that have yet to be published.
pub async fn create_question(
    store: &dyn QuestionStore,
    text: &str,
    days: i64,
    now: DateTime<Utc>,
) -> Result<Question> {
    store
        .create_question(text.to_string(), now + Duration::days(days))
        .await
}

/// Create a question with the given choices.
pub async fn create_question_with_choices(
    store: &dyn QuestionStore,
    text: &str,
    days: i64,
    now: DateTime<Utc>,
    choices: &[&str],
) -> Result<Question> {
    let mut question = create_question(store, text, days, now).await?;
    for choice in choices {
        let choice = store.add_choice(question.id, choice.to_string()).await?;
        question.choices.push(choice);
    }
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_create_question_offsets_from_now() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let q = create_question(&store, "Past question.", -30, now).await.unwrap();
        assert_eq!(q.pub_date, now - Duration::days(30));
    }

    #[tokio::test]
    async fn test_create_question_with_choices() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let q = create_question_with_choices(&store, "Q", -1, now, &["a", "b"])
            .await
            .unwrap();
        assert_eq!(q.choices.len(), 2);
        assert_eq!(q.choices[1].text, "b");
    }
}
