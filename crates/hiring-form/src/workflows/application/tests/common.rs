use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::workflows::application::domain::ApplicantRecord;
use crate::workflows::application::repository::{FormId, FormRepository, RepositoryError};
use crate::workflows::application::{form_router, ApplicationFormService};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) forms: Arc<Mutex<HashMap<FormId, ApplicantRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &FormId) -> Option<ApplicantRecord> {
        self.forms
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl FormRepository for MemoryRepository {
    fn insert(&self, id: FormId, record: ApplicantRecord) -> Result<(), RepositoryError> {
        let mut guard = self.forms.lock().expect("repository mutex poisoned");
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, record);
        Ok(())
    }

    fn fetch(&self, id: &FormId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        let guard = self.forms.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &FormId) -> Result<(), RepositoryError> {
        let mut guard = self.forms.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn modify<T, E>(
        &self,
        id: &FormId,
        apply: impl FnOnce(&mut ApplicantRecord) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RepositoryError>,
    {
        let mut guard = self.forms.lock().expect("repository mutex poisoned");
        let slot = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut draft = slot.clone();
        let outcome = apply(&mut draft)?;
        *slot = draft;
        Ok(outcome)
    }
}

pub(super) struct UnavailableRepository;

impl FormRepository for UnavailableRepository {
    fn insert(&self, _id: FormId, _record: ApplicantRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &FormId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &FormId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<T, E>(
        &self,
        _id: &FormId,
        _apply: impl FnOnce(&mut ApplicantRecord) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()).into())
    }
}

pub(super) fn build_service() -> (ApplicationFormService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ApplicationFormService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: ApplicationFormService<MemoryRepository>) -> Router {
    form_router(Arc::new(service))
}

pub(super) fn named_record() -> ApplicantRecord {
    ApplicantRecord {
        first_name: "Ali".to_string(),
        last_name: "Rezai".to_string(),
        ..ApplicantRecord::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}
