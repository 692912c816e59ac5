//! `POST /api/chat` handler

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::ChatError;
use crate::request::parse_question;
use crate::AppState;

/// Content type of a successful answer
pub const ANSWER_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Validate the request, forward the question and return the assembled answer
pub async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response, ChatError> {
    let question = parse_question(&body, state.config.max_query_chars)?;
    debug!(chars = question.chars().count(), "forwarding question to twin");

    let answer = state.twin.ask(&question).await?;
    Ok(([(header::CONTENT_TYPE, ANSWER_CONTENT_TYPE)], answer).into_response())
}
