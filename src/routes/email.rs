use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::json_body;
use crate::{
    error::AppError,
    message::{EmailRequest, EmailResponse},
    services::mailer::is_valid_address,
    state::SharedState,
};

const SEND_FAILURE: &str = "Failed to send email. Please try again.";

pub async fn send_email_handler(
    State(state): State<SharedState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>, AppError> {
    // Configuration is checked before the payload is even looked at.
    let Some(mailer) = state.mailer.as_ref() else {
        return Err(AppError::NotConfigured(
            "Email not configured. Check .env file.".to_string(),
        ));
    };

    let payload = json_body(payload)?;
    let letter = payload.letter.trim();
    let to = payload.to.trim();

    if letter.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest(
            "Letter and recipient email are required".to_string(),
        ));
    }
    if !is_valid_address(to) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    mailer
        .send_letter(to, letter)
        .await
        .map_err(|e| AppError::upstream(SEND_FAILURE, e))?;

    Ok(Json(EmailResponse {
        success: "Email sent successfully!".to_string(),
    }))
}
