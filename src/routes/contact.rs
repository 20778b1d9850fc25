use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use mailroom_contact::{ContactMessage, SubmitInput};
use serde_json::{Value, json};

use crate::{
    envelope::{Acknowledged, Listing, Reply, Single},
    error::{ApiError, StoreResultExt},
    routes::AppState,
};

const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const INVALID_BODY: &str = "Invalid request body";
const SUBMIT_SUCCEEDED: &str = "Message sent successfully!";
const SUBMIT_FAILED: &str = "Failed to send message. Please try again.";
const LIST_FAILED: &str = "Error getting messages";
const MARK_READ_FAILED: &str = "Error updating message";

/// POST /api/contact
///
/// Stores a new unread message. Every one of `name`, `email`, `subject` and
/// `message` must be present and non-empty; nothing is written otherwise.
#[tracing::instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Reply<Acknowledged>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        tracing::debug!("Unreadable contact body: {}", rejection.body_text());
        ApiError::Validation(INVALID_BODY)
    })?;

    if !body.is_object() {
        return Err(ApiError::Validation(INVALID_BODY));
    }

    // A field that is present but not text counts as missing
    let input: SubmitInput = serde_json::from_value(body).map_err(|e| {
        tracing::debug!("Contact field is not text: {e}");
        ApiError::Validation(ALL_FIELDS_REQUIRED)
    })?;

    let draft = match input.into_draft() {
        Ok(draft) => draft,
        Err(e) if e.is_validation() => return Err(ApiError::Validation(ALL_FIELDS_REQUIRED)),
        Err(e) => {
            return Err(ApiError::Store {
                message: SUBMIT_FAILED,
                source: e,
            });
        }
    };

    let message = state.store.create(draft).await.or_fail(SUBMIT_FAILED)?;

    tracing::info!(
        id = %message.id,
        name = %message.name,
        email = %message.email,
        "New message from {}",
        message.name
    );

    Ok(Reply(StatusCode::CREATED, Acknowledged::new(SUBMIT_SUCCEEDED)))
}

/// GET /api/contacts
///
/// Every message, newest first.
#[tracing::instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Reply<Listing<ContactMessage>>, ApiError> {
    let messages = state.store.find_all().await.or_fail(LIST_FAILED)?;

    Ok(Reply(StatusCode::OK, Listing::new(messages)))
}

/// PATCH /api/contacts/{id}/read
///
/// An id that matches no message still succeeds, with `data: null`.
#[tracing::instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Reply<Single<ContactMessage>>, ApiError> {
    let message = state.store.mark_read(&id).await.or_fail(MARK_READ_FAILED)?;

    if message.is_none() {
        tracing::debug!("No contact message to mark read");
    }

    Ok(Reply(StatusCode::OK, Single::new(message)))
}

/// GET /api/test
pub async fn test() -> impl IntoResponse {
    Json(json!({ "message": "Backend working!" }))
}
