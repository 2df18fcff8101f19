use std::fmt::Debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::workflows::application::domain::ApplicantRecord;

const FIRST_NAME_FALLBACK: &str = "Form";
const LAST_NAME_FALLBACK: &str = "Estekhdam";
const EXTENSION: &str = "docx";

/// A finished document ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: mime::Mime,
    pub bytes: Vec<u8>,
}

/// `{first}_{last}.docx`, with fixed fallbacks for blank names.
pub fn suggested_file_name(record: &ApplicantRecord) -> String {
    let first = non_blank(&record.first_name).unwrap_or(FIRST_NAME_FALLBACK);
    let last = non_blank(&record.last_name).unwrap_or(LAST_NAME_FALLBACK);
    format!("{first}_{last}.{EXTENSION}").replace(['/', '\\'], "-")
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("export directory {path} is not usable: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to save {file_name}: {source}")]
    Write {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file name '{0}' would escape the export directory")]
    UnsafeFileName(String),
}

/// Destination for finished exports (the save step of a download).
pub trait ArtifactSink: Debug + Send + Sync {
    fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, SinkError>;
}

/// Saves artifacts into a directory; a file only appears once fully written.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, SinkError> {
        let file_name = Path::new(&artifact.file_name);
        if file_name.components().count() != 1 || file_name.file_name().is_none() {
            return Err(SinkError::UnsafeFileName(artifact.file_name.clone()));
        }

        std::fs::create_dir_all(&self.root).map_err(|source| SinkError::Directory {
            path: self.root.clone(),
            source,
        })?;

        let target = self.root.join(file_name);
        let write_err = |source: std::io::Error| SinkError::Write {
            file_name: artifact.file_name.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        staged.write_all(&artifact.bytes).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;
        staged
            .persist(&target)
            .map_err(|err| write_err(err.error))?;

        tracing::info!(path = %target.display(), bytes = artifact.bytes.len(), "export saved");
        Ok(target)
    }
}
