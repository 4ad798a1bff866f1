use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Note;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID
    pub id: Uuid,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title
    pub title: Option<String>,
    /// Note content
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request body that passed validation.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("title must be a non-empty string")]
    EmptyTitle,
    #[error("content must be a non-empty string")]
    EmptyContent,
}

impl CreateNoteRequest {
    pub fn validate(self) -> Result<NoteDraft, ValidationError> {
        validate_fields(self.title, self.content)
    }
}

impl UpdateNoteRequest {
    pub fn validate(self) -> Result<NoteDraft, ValidationError> {
        validate_fields(self.title, self.content)
    }
}

fn validate_fields(
    title: Option<String>,
    content: Option<String>,
) -> Result<NoteDraft, ValidationError> {
    let title = title
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::EmptyTitle)?;
    let content = content
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::EmptyContent)?;
    Ok(NoteDraft { title, content })
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Static liveness indicator
    pub status: String,
}
