//! Page handlers for the polls routes.
//!
//! Each handler reads the clock once and passes that instant to the store,
//! so a single request sees a consistent notion of "now".

pub mod templates;

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use polls_core::{ChoiceId, PollsError, QuestionId};

use crate::gateway::{PageError, PollsState};

/// Parse a path segment as a question id. Anything else is a 404.
///
/// Only canonical decimal ids are accepted, so each question has one URL:
/// no sign, no leading zeros.
fn parse_question_id(raw: &str) -> Result<QuestionId, PageError> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return Err(PageError::NotFound);
    }
    raw.parse::<u64>()
        .map(QuestionId)
        .map_err(|_| PageError::NotFound)
}

/// List of published questions, latest first.
pub async fn index(State(state): State<PollsState>) -> Result<Html<String>, PageError> {
    let now = state.clock.now();
    let questions = state
        .store
        .published_questions(now, Some(state.index_limit))
        .await?;
    Ok(Html(templates::index_page(&state.site_title, &questions)))
}

/// Question text and vote form.
pub async fn detail(
    State(state): State<PollsState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_question_id(&id)?;
    let question = state.store.published_question(id, state.clock.now()).await?;
    Ok(Html(templates::detail_page(&state.site_title, &question, None)))
}

/// Vote counts for a question.
pub async fn results(
    State(state): State<PollsState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_question_id(&id)?;
    let question = state.store.published_question(id, state.clock.now()).await?;
    Ok(Html(templates::results_page(&state.site_title, &question)))
}

/// Submitted vote form.
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

/// Record a vote and redirect to the results page.
///
/// A missing or foreign choice re-renders the detail page with an error.
/// An unreadable form body counts as no choice.
pub async fn vote(
    State(state): State<PollsState>,
    Path(id): Path<String>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response, PageError> {
    let id = parse_question_id(&id)?;
    let now = state.clock.now();
    // Resolve visibility first so an unpublished question is a 404 even
    // when the form is empty.
    let question = state.store.published_question(id, now).await?;

    let choice = form
        .ok()
        .and_then(|Form(form)| form.choice)
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(ChoiceId);

    let rejected = match choice {
        Some(choice_id) => match state.store.vote(id, choice_id, now).await {
            Ok(choice) => {
                tracing::info!(question = %id, choice = %choice.id, votes = choice.votes, "Vote recorded");
                return Ok(Redirect::to(&templates::results_path(id)).into_response());
            }
            Err(PollsError::Validation(msg)) => msg,
            Err(e) => return Err(e.into()),
        },
        None => polls_core::store::NO_CHOICE_SELECTED.to_string(),
    };

    tracing::debug!(question = %id, "Vote rejected: {}", rejected);
    Ok(Html(templates::detail_page(&state.site_title, &question, Some(&rejected))).into_response())
}
