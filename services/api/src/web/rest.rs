//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use mood_tracker_core::domain::{MoodEntry, NewMoodEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use utoipa::{OpenApi, ToSchema};

const MISSING_FIELDS_MESSAGE: &str = "Mood and date are required.";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_moods_handler,
        create_mood_handler,
    ),
    components(
        schemas(MoodEntryResponse, CreateMoodRequest, ErrorResponse)
    ),
    tags(
        (name = "Mood Tracker API", description = "Log moods and read back the history.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A stored mood entry as returned to clients.
#[derive(Serialize, ToSchema)]
pub struct MoodEntryResponse {
    id: String,
    mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    /// ISO-8601 timestamp, exactly as it was submitted.
    date: String,
}

impl From<MoodEntry> for MoodEntryResponse {
    fn from(entry: MoodEntry) -> Self {
        Self {
            id: entry.id,
            mood: entry.mood,
            note: entry.note,
            date: entry.date,
        }
    }
}

/// The payload for logging a new mood.
///
/// Every field is optional at the wire level so that a missing `mood` or
/// `date` is answered with the usual error body.
#[derive(Deserialize, ToSchema)]
pub struct CreateMoodRequest {
    mood: Option<String>,
    note: Option<String>,
    date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    error: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List every logged mood, newest first.
#[utoipa::path(
    get,
    path = "/moods",
    responses(
        (status = 200, description = "All mood entries, newest first", body = [MoodEntryResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_moods_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<MoodEntryResponse>>, ErrorReply> {
    match app_state.store.list().await {
        Ok(entries) => {
            debug!("Listing {} mood entries", entries.len());
            Ok(Json(entries.into_iter().map(MoodEntryResponse::from).collect()))
        }
        Err(e) => {
            error!("Failed to list moods: {:?}", e);
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
            ))
        }
    }
}

/// Log a new mood.
///
/// `mood` must not be blank and `date` must be present. The created entry is
/// returned with its assigned `id`.
#[utoipa::path(
    post,
    path = "/moods",
    request_body = CreateMoodRequest,
    responses(
        (status = 200, description = "Mood logged", body = MoodEntryResponse),
        (
            status = 400,
            description = "Missing mood or date, or a malformed body",
            body = ErrorResponse
        ),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_mood_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateMoodRequest>, JsonRejection>,
) -> Result<Json<MoodEntryResponse>, ErrorReply> {
    let Json(req) = payload.map_err(|rejection| {
        debug!("Rejected mood payload: {}", rejection.body_text());
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        error_reply(status, rejection.body_text())
    })?;

    let new_entry = NewMoodEntry::new(req.mood, req.note, req.date).map_err(|e| {
        debug!("Rejected mood entry: {}", e);
        error_reply(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
    })?;

    match app_state.store.create(new_entry).await {
        Ok(entry) => {
            info!("Logged mood entry {}", entry.id);
            Ok(Json(entry.into()))
        }
        Err(e) => {
            error!("Failed to create mood: {:?}", e);
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
            ))
        }
    }
}
