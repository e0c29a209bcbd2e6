//! Trainer lifecycle: validate, persist, amend, revoke.

use registry_core::error::{Error, Result};
use registry_core::get_standard_validator;
use registry_core::models::{sanitize_patch, Trainer, TrainerDraft, TrainerPatch};
use registry_db::TrainerRepository;
use uuid::Uuid;

use crate::RegistryService;

impl RegistryService {
    /// All records, most recent first.
    pub async fn list_trainers(&self) -> Result<Vec<Trainer>> {
        TrainerRepository::new(self.pool.clone()).list().await
    }

    pub async fn trainer_count(&self) -> Result<i64> {
        TrainerRepository::new(self.pool.clone()).count().await
    }

    pub async fn get_trainer(&self, id: Uuid) -> Result<Trainer> {
        TrainerRepository::new(self.pool.clone()).get(id).await
    }

    /// Validates the draft, then persists it. Validation failures never reach
    /// the network layer.
    pub async fn register_trainer(&self, draft: &TrainerDraft) -> Result<Trainer> {
        let blocking: Vec<String> = get_standard_validator()
            .run(draft)
            .into_iter()
            .filter(|e| e.severity == "High Error")
            .map(|e| e.message)
            .collect();
        if !blocking.is_empty() {
            return Err(Error::Validation(blocking.join("; ")));
        }

        TrainerRepository::new(self.pool.clone()).create(draft).await
    }

    /// Applies a partial update from raw client JSON. Immutable fields are
    /// stripped before the patch is even typed, so a client echoing the full
    /// record back cannot touch identity, certification ID, creation
    /// timestamp or attachments.
    pub async fn amend_trainer(&self, id: Uuid, patch_json: serde_json::Value) -> Result<Trainer> {
        let cleaned = sanitize_patch(patch_json);
        let patch: TrainerPatch =
            serde_json::from_value(cleaned).map_err(|e| Error::Validation(e.to_string()))?;

        TrainerRepository::new(self.pool.clone()).update(id, &patch).await
    }

    /// Irreversible. Cascades to nothing: email logs keep their snapshot of
    /// the trainer's name.
    pub async fn revoke_trainer(&self, id: Uuid) -> Result<()> {
        TrainerRepository::new(self.pool.clone()).delete(id).await
    }
}
