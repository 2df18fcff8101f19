use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::{ApplicantRecord, EntryId};
use super::form::{Collection, FormEditError};
use super::repository::{FormId, FormRepository};
use super::service::{ApplicationFormService, FormServiceError};
use crate::error::AppError;
use crate::workflows::export::{self, ExportArtifact};

/// Body of every field or flag edit.
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub value: Value,
}

/// Router exposing draft editing and document download.
pub fn form_router<R>(service: Arc<ApplicationFormService<R>>) -> Router
where
    R: FormRepository + 'static,
{
    Router::new()
        .route("/api/v1/export", post(export_record_handler))
        .route("/api/v1/forms", post(create_handler::<R>))
        .route(
            "/api/v1/forms/:form_id",
            get(get_handler::<R>).delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/forms/:form_id/fields/:field",
            put(set_field_handler::<R>),
        )
        .route(
            "/api/v1/forms/:form_id/flags/:group/:flag",
            put(set_flag_handler::<R>),
        )
        .route(
            "/api/v1/forms/:form_id/collections/:collection",
            post(add_entry_handler::<R>),
        )
        .route(
            "/api/v1/forms/:form_id/collections/:collection/:entry_id",
            delete(remove_entry_handler::<R>),
        )
        .route(
            "/api/v1/forms/:form_id/collections/:collection/:entry_id/:field",
            put(update_entry_handler::<R>),
        )
        .route("/api/v1/forms/:form_id/export", get(export_form_handler::<R>))
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
) -> Result<Response, AppError>
where
    R: FormRepository + 'static,
{
    let (form_id, record) = service.create()?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "form_id": form_id, "record": record })),
    )
        .into_response())
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path(form_id): Path<String>,
) -> Result<Json<ApplicantRecord>, AppError>
where
    R: FormRepository + 'static,
{
    Ok(Json(service.get(&FormId(form_id))?))
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path(form_id): Path<String>,
) -> Result<StatusCode, AppError>
where
    R: FormRepository + 'static,
{
    service.discard(&FormId(form_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn set_field_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path((form_id, field)): Path<(String, String)>,
    Json(request): Json<EditRequest>,
) -> Result<Json<ApplicantRecord>, AppError>
where
    R: FormRepository + 'static,
{
    Ok(Json(service.set_field(&FormId(form_id), &field, request.value)?))
}

pub(crate) async fn set_flag_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path((form_id, group, flag)): Path<(String, String, String)>,
    Json(request): Json<EditRequest>,
) -> Result<Json<ApplicantRecord>, AppError>
where
    R: FormRepository + 'static,
{
    let enabled = request
        .value
        .as_bool()
        .ok_or_else(|| FormEditError::InvalidValue {
            field: format!("{group}.{flag}"),
            source: serde::de::Error::custom("expected true or false"),
        })
        .map_err(FormServiceError::from)?;
    Ok(Json(service.set_flag(&FormId(form_id), &group, &flag, enabled)?))
}

pub(crate) async fn add_entry_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path((form_id, collection)): Path<(String, String)>,
) -> Result<Response, AppError>
where
    R: FormRepository + 'static,
{
    let collection = parse_collection(&collection)?;
    let entry_id = service.add_entry(&FormId(form_id), collection)?;
    Ok((StatusCode::CREATED, Json(json!({ "entry_id": entry_id }))).into_response())
}

pub(crate) async fn update_entry_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path((form_id, collection, entry_id, field)): Path<(String, String, String, String)>,
    Json(request): Json<EditRequest>,
) -> Result<Json<ApplicantRecord>, AppError>
where
    R: FormRepository + 'static,
{
    let collection = parse_collection(&collection)?;
    let record = service.update_entry(
        &FormId(form_id),
        collection,
        &EntryId(entry_id),
        &field,
        request.value,
    )?;
    Ok(Json(record))
}

pub(crate) async fn remove_entry_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path((form_id, collection, entry_id)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError>
where
    R: FormRepository + 'static,
{
    let collection = parse_collection(&collection)?;
    service.remove_entry(&FormId(form_id), collection, &EntryId(entry_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn export_form_handler<R>(
    State(service): State<Arc<ApplicationFormService<R>>>,
    Path(form_id): Path<String>,
) -> Result<Response, AppError>
where
    R: FormRepository + 'static,
{
    Ok(attachment(service.export(&FormId(form_id))?))
}

pub(crate) async fn export_record_handler(
    Json(record): Json<ApplicantRecord>,
) -> Result<Response, AppError> {
    Ok(attachment(export::export(&record)?))
}

fn parse_collection(name: &str) -> Result<Collection, FormServiceError> {
    Ok(name.parse::<Collection>()?)
}

fn attachment(artifact: ExportArtifact) -> Response {
    let disposition = HeaderValue::from_str(&content_disposition(&artifact.file_name))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    let content_type = HeaderValue::from_str(artifact.content_type.as_ref())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response()
}

/// `attachment` header carrying an ASCII fallback plus the UTF-8 name (RFC 6266).
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
