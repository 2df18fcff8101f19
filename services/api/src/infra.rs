use hiring_form::workflows::application::{
    ApplicantRecord, FormId, FormRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Draft forms live only as long as the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFormRepository {
    forms: Arc<Mutex<HashMap<FormId, ApplicantRecord>>>,
}

impl FormRepository for InMemoryFormRepository {
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
        guard
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
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
