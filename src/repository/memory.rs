use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{NoteStore, StoreError};
use crate::models::Note;

/// In-memory store backing the handler and service tests.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Mutex<HashMap<Uuid, Note>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.lock().await;
        let mut all: Vec<Note> = notes.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.lock().await.get(&id).cloned())
    }

    async fn create(&self, title: String, content: String) -> Result<Note, StoreError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().await.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, note: &Note) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.lock().await;
        let Some(stored) = notes.get_mut(&note.id) else {
            return Ok(None);
        };
        stored.title = note.title.clone();
        stored.content = note.content.clone();
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.notes.lock().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn create_assigns_unique_ids_and_equal_timestamps() {
        let store = InMemoryStore::new();

        let first = store.create("a".into(), "1".into()).await.unwrap();
        let second = store.create("b".into(), "2".into()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(second.created_at, second.updated_at);
    }

    #[tokio::test]
    async fn update_refreshes_timestamp_and_preserves_identity() {
        let store = InMemoryStore::new();
        let created = store.create("a".into(), "1".into()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        let mut changed = created.clone();
        changed.title = "b".into();
        changed.content = "2".into();
        let updated = store.update(&changed).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.title, "b");
        assert_eq!(updated.content, "2");
    }

    #[tokio::test]
    async fn update_of_missing_note_reports_absence() {
        let store = InMemoryStore::new();
        let note = Note {
            id: Uuid::new_v4(),
            title: "ghost".into(),
            content: "gone".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(store.update(&note).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_orders_by_most_recently_updated() {
        let store = InMemoryStore::new();

        let first = store.create("a".into(), "1".into()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = store.create("b".into(), "2".into()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(
            all.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );

        tokio::time::sleep(Duration::from_millis(5)).await;
        store.update(&first).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(
            all.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemoryStore::new();
        let note = store.create("a".into(), "1".into()).await.unwrap();

        assert!(store.delete(note.id).await.unwrap());
        assert!(store.find_by_id(note.id).await.unwrap().is_none());
        assert!(!store.delete(note.id).await.unwrap());
    }

    #[tokio::test]
    async fn find_all_of_empty_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
