use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored note. Column mapping lives in the repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
