use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::application::{FormEditError, FormServiceError, RepositoryError};
use crate::workflows::export::ExportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Record(serde_json::Error),
    Form(FormServiceError),
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Record(err) => write!(f, "applicant record is not valid JSON: {}", err),
            AppError::Form(err) => write!(f, "{}", err),
            AppError::Export(err) => write!(f, "export failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Record(err) => Some(err),
            AppError::Form(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Export(err @ ExportError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.notice().to_string())
            }
            AppError::Export(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.notice().to_string()),
            AppError::Record(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Form(err) => (form_status(err), self.to_string()),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

fn form_status(err: &FormServiceError) -> StatusCode {
    match err {
        FormServiceError::Repository(RepositoryError::NotFound)
        | FormServiceError::Edit(FormEditError::EntryNotFound { .. }) => StatusCode::NOT_FOUND,
        FormServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        FormServiceError::Repository(RepositoryError::Unavailable(_))
        | FormServiceError::Edit(FormEditError::Encoding(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        FormServiceError::Edit(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FormServiceError::Export(ExportError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        FormServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Record(value)
    }
}

impl From<FormServiceError> for AppError {
    fn from(value: FormServiceError) -> Self {
        match value {
            FormServiceError::Export(err) => Self::Export(err),
            other => Self::Form(other),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}
