//! Transcription of a completed application into a downloadable Word document.

pub mod artifact;
pub mod document;
pub mod docx;
pub mod labels;
pub mod transcriber;

pub use artifact::{suggested_file_name, ArtifactSink, DirectorySink, ExportArtifact, SinkError};
pub use document::{Block, ExportDocument, Table, TitleSize};
pub use docx::{render_docx, DocxError, DOCX_CONTENT_TYPE};
pub use transcriber::transcribe;

use tracing::{debug, error};

use crate::workflows::application::domain::ApplicantRecord;
use crate::workflows::application::validation::{validate_for_export, ValidationError};

/// Generic notice shown for any failure while building or saving the document.
pub const EXPORT_FAILED_NOTICE: &str = "خطا در تولید فایل";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("document assembly failed: {0}")]
    Render(#[from] DocxError),
    #[error("document could not be saved: {0}")]
    Save(#[from] SinkError),
}

impl ExportError {
    /// Text suitable for showing to the person filling in the form.
    pub fn notice(&self) -> &'static str {
        match self {
            ExportError::Validation(err) => err.notice(),
            ExportError::Render(_) | ExportError::Save(_) => EXPORT_FAILED_NOTICE,
        }
    }
}

/// Validates, transcribes and serializes a record. The record is only read.
pub fn export(record: &ApplicantRecord) -> Result<ExportArtifact, ExportError> {
    validate_for_export(record)?;

    let document = transcribe(record);
    let title = format!("{} {}", record.first_name.trim(), record.last_name.trim());
    let bytes = render_docx(&document, &title).map_err(|err| {
        error!(error = %err, "failed to assemble application document");
        err
    })?;

    let file_name = suggested_file_name(record);
    debug!(%file_name, blocks = document.blocks.len(), bytes = bytes.len(), "application document assembled");

    Ok(ExportArtifact {
        file_name,
        content_type: docx_mime(),
        bytes,
    })
}

/// Exports the record and hands the artifact to `sink`.
pub fn export_to<S: ArtifactSink + ?Sized>(
    record: &ApplicantRecord,
    sink: &S,
) -> Result<std::path::PathBuf, ExportError> {
    let artifact = export(record)?;
    sink.save(&artifact).map_err(|err| {
        error!(error = %err, file_name = %artifact.file_name, "failed to save application document");
        ExportError::from(err)
    })
}

fn docx_mime() -> mime::Mime {
    DOCX_CONTENT_TYPE
        .parse()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}
