use std::sync::Arc;

use uuid::Uuid;

use crate::{
    dto::{NoteDraft, NoteResponse},
    repository::{NoteStore, StoreError},
};

/// Orchestration between the HTTP handlers and the injected note store.
/// Holds no note state of its own; every call is a store round trip.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn create_note(&self, draft: NoteDraft) -> Result<NoteResponse, StoreError> {
        self.store
            .create(draft.title, draft.content)
            .await
            .map(NoteResponse::from)
    }

    pub async fn update_note(
        &self,
        id: Uuid,
        draft: NoteDraft,
    ) -> Result<Option<NoteResponse>, StoreError> {
        let Some(mut note) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        note.title = draft.title;
        note.content = draft.content;

        Ok(self.store.update(&note).await?.map(NoteResponse::from))
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<bool, StoreError> {
        let Some(note) = self.store.find_by_id(id).await? else {
            return Ok(false);
        };

        self.store.delete(note.id).await
    }

    pub async fn get_one_note(&self, id: Uuid) -> Result<Option<NoteResponse>, StoreError> {
        Ok(self.store.find_by_id(id).await?.map(NoteResponse::from))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, StoreError> {
        Ok(self
            .store
            .find_all()
            .await?
            .into_iter()
            .map(NoteResponse::from)
            .collect())
    }
}
