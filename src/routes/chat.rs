use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::json_body;
use crate::{
    error::AppError,
    message::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse},
    services::prompt_builder::{
        analysis_reply_or_fallback, build_analysis_prompt, build_letter_prompt,
    },
    state::SharedState,
};

const CHAT_FAILURE: &str = "Sorry, I'm having trouble right now.";
const ANALYZE_FAILURE: &str = "Failed to analyze letter. Please try again.";

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let payload = json_body(payload)?;

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    tracing::info!(tone = ?payload.tone, "drafting letter");
    let prompt = build_letter_prompt(trimmed, payload.tone);

    let reply = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::upstream(CHAT_FAILURE, e))?;

    Ok(Json(ChatResponse {
        reply: reply.trim().to_string(),
    }))
}

pub async fn analyze_letter_handler(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let payload = json_body(payload)?;

    let letter = payload.letter.trim();
    if letter.is_empty() {
        return Err(AppError::BadRequest(
            "Please provide a letter to analyze.".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(letter);

    let reply = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::upstream(ANALYZE_FAILURE, e))?;

    Ok(Json(AnalyzeResponse {
        reply: analysis_reply_or_fallback(&reply),
    }))
}
