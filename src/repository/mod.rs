mod embedded;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use embedded::migrations;
use tokio_postgres::{Client, NoTls, Row};
use uuid::Uuid;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),
}

/// Durable storage for notes. Implementations must not fail on zero rows
/// and must signal absence with `None` rather than an error.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, most recently updated first.
    async fn find_all(&self) -> Result<Vec<Note>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError>;

    /// Persists a new note; the store generates the id and sets
    /// `created_at == updated_at`.
    async fn create(&self, title: String, content: String) -> Result<Note, StoreError>;

    /// Persists the note's current field values, refreshing `updated_at`.
    /// Callers fetch the record first; `None` means the row vanished in
    /// between.
    async fn update(&self, note: &Note) -> Result<Option<Note>, StoreError>;

    /// Removes the record, reporting whether a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

const FIND_ALL_SQL: &str =
    "SELECT id, title, content, created_at, updated_at FROM notes ORDER BY updated_at DESC";
const FIND_BY_ID_SQL: &str =
    "SELECT id, title, content, created_at, updated_at FROM notes WHERE id = $1";
const CREATE_SQL: &str = "INSERT INTO notes (title, content) VALUES ($1, $2) \
     RETURNING id, title, content, created_at, updated_at";
const UPDATE_SQL: &str = "UPDATE notes SET title = $1, content = $2, updated_at = now() \
     WHERE id = $3 RETURNING id, title, content, created_at, updated_at";
const DELETE_SQL: &str = "DELETE FROM notes WHERE id = $1";

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB schema sync finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        tracing::debug!("{FIND_ALL_SQL}");
        let rows = self.client.query(FIND_ALL_SQL, &[]).await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        tracing::debug!("{FIND_BY_ID_SQL}");
        let row = self.client.query_opt(FIND_BY_ID_SQL, &[&id]).await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn create(&self, title: String, content: String) -> Result<Note, StoreError> {
        tracing::debug!("{CREATE_SQL}");
        let row = self.client.query_one(CREATE_SQL, &[&title, &content]).await?;

        Ok(note_from_row(&row))
    }

    async fn update(&self, note: &Note) -> Result<Option<Note>, StoreError> {
        tracing::debug!("{UPDATE_SQL}");
        let row = self
            .client
            .query_opt(UPDATE_SQL, &[&note.title, &note.content, &note.id])
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        tracing::debug!("{DELETE_SQL}");
        let rows = self.client.execute(DELETE_SQL, &[&id]).await?;

        Ok(rows == 1)
    }
}
