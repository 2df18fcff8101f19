use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use super::domain::{ApplicantRecord, EntryId};
use super::form::{ApplicationForm, Collection, FormEditError};
use super::repository::{FormId, FormRepository, RepositoryError};
use crate::workflows::export::{self, ExportArtifact, ExportError};

/// Service owning draft forms: edits, entry management and export.
pub struct ApplicationFormService<R> {
    repository: Arc<R>,
}

impl<R> ApplicationFormService<R>
where
    R: FormRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Start a blank draft.
    pub fn create(&self) -> Result<(FormId, ApplicantRecord), FormServiceError> {
        let id = FormId(Uuid::new_v4().to_string());
        let record = ApplicantRecord::default();
        self.repository.insert(id.clone(), record.clone())?;
        info!(form_id = %id, "application form created");
        Ok((id, record))
    }

    pub fn get(&self, id: &FormId) -> Result<ApplicantRecord, FormServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn set_field(
        &self,
        id: &FormId,
        field: &str,
        value: Value,
    ) -> Result<ApplicantRecord, FormServiceError> {
        self.edit(id, |form| form.set_field(field, value))
            .map(|(record, ())| record)
    }

    pub fn set_flag(
        &self,
        id: &FormId,
        group: &str,
        flag: &str,
        enabled: bool,
    ) -> Result<ApplicantRecord, FormServiceError> {
        self.edit(id, |form| form.set_flag(group, flag, enabled))
            .map(|(record, ())| record)
    }

    pub fn add_entry(
        &self,
        id: &FormId,
        collection: Collection,
    ) -> Result<EntryId, FormServiceError> {
        self.edit(id, |form| Ok(form.add_entry(collection)))
            .map(|(_, entry_id)| entry_id)
    }

    pub fn update_entry(
        &self,
        id: &FormId,
        collection: Collection,
        entry_id: &EntryId,
        field: &str,
        value: Value,
    ) -> Result<ApplicantRecord, FormServiceError> {
        self.edit(id, |form| form.update_entry(collection, entry_id, field, value))
            .map(|(record, ())| record)
    }

    pub fn remove_entry(
        &self,
        id: &FormId,
        collection: Collection,
        entry_id: &EntryId,
    ) -> Result<ApplicantRecord, FormServiceError> {
        self.edit(id, |form| form.remove_entry(collection, entry_id))
            .map(|(record, ())| record)
    }

    pub fn discard(&self, id: &FormId) -> Result<(), FormServiceError> {
        self.repository.remove(id)?;
        info!(form_id = %id, "application form discarded");
        Ok(())
    }

    /// Export a snapshot of the draft; the stored record is never modified.
    pub fn export(&self, id: &FormId) -> Result<ExportArtifact, FormServiceError> {
        let record = self.get(id)?;
        let artifact = export::export(&record).map_err(|err| {
            warn!(form_id = %id, error = %err, "application export failed");
            err
        })?;
        info!(
            form_id = %id,
            file_name = %artifact.file_name,
            bytes = artifact.bytes.len(),
            "application exported"
        );
        Ok(artifact)
    }

    /// Apply an edit to an owned copy and store it only if the edit succeeds.
    /// The repository holds the draft for the whole read-modify-write.
    fn edit<T>(
        &self,
        id: &FormId,
        apply: impl FnOnce(&mut ApplicationForm) -> Result<T, FormEditError>,
    ) -> Result<(ApplicantRecord, T), FormServiceError> {
        self.repository.modify(id, |stored| -> Result<_, FormServiceError> {
            let mut form = ApplicationForm::from_record(stored.clone());
            let outcome = apply(&mut form)?;
            *stored = form.into_record();
            Ok((stored.clone(), outcome))
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormServiceError {
    #[error(transparent)]
    Edit(#[from] FormEditError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
