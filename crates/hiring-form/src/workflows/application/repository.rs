use serde::{Deserialize, Serialize};

use super::domain::ApplicantRecord;

/// Identifier of one draft form held by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub String);

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draft storage so the service can be exercised without a running server.
pub trait FormRepository: Send + Sync {
    fn insert(&self, id: FormId, record: ApplicantRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &FormId) -> Result<Option<ApplicantRecord>, RepositoryError>;
    fn remove(&self, id: &FormId) -> Result<(), RepositoryError>;

    /// Read-modify-write of one draft, atomic with respect to every other
    /// call on the same repository. `apply` runs with the draft locked; when
    /// it fails the stored draft must be left as it was.
    fn modify<T, E>(
        &self,
        id: &FormId,
        apply: impl FnOnce(&mut ApplicantRecord) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("form already exists")]
    Conflict,
    #[error("form not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
