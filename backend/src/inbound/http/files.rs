//! File download and upload handlers.
//!
//! Downloads render the shared dataset in portable formats; the upload
//! endpoint accepts a raw body, infers the format from the supplied
//! file name, and reports a small parsed preview without storing
//! anything.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::DomainError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

const SAMPLE_TEXT: &str = "This is a sample text file.\n\
    It demonstrates plain-text downloads from the demo backend.\n";

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadParams {
    /// Original file name; the extension selects the parser.
    pub name: Option<String>,
}

/// Format detected from an uploaded file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Csv,
    Json,
    Text,
}

/// Parsed preview of an uploaded file.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadPreview {
    /// Data rows for CSV, excluding the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Header column names for CSV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Top-level records for JSON: array length, or 1 otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Line count for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
}

/// Upload acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub name: String,
    /// Body size in bytes.
    pub size: usize,
    pub kind: UploadKind,
    pub preview: UploadPreview,
}

/// The sales table as CSV with a header row.
#[utoipa::path(
    get,
    path = "/api/v1/files/sales.csv",
    responses(
        (status = 200, description = "Sales table as CSV", content_type = "text/csv")
    ),
    tags = ["files"],
    operation_id = "downloadSalesCsv"
)]
#[get("/files/sales.csv")]
pub async fn download_sales_csv(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in state.sales() {
        writer
            .serialize(record)
            .map_err(|error| DomainError::internal(format!("failed to encode CSV: {error}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| DomainError::internal(format!("failed to flush CSV: {error}")))?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            actix_web::http::header::CONTENT_DISPOSITION,
            "attachment; filename=\"sales.csv\"",
        ))
        .body(bytes))
}

/// The user table as a JSON array.
#[utoipa::path(
    get,
    path = "/api/v1/files/users.json",
    responses(
        (status = 200, description = "User table as JSON", content_type = "application/json")
    ),
    tags = ["files"],
    operation_id = "downloadUsersJson"
)]
#[get("/files/users.json")]
pub async fn download_users_json(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let body = serde_json::to_vec_pretty(state.users())
        .map_err(|error| DomainError::internal(format!("failed to encode JSON: {error}")))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((
            actix_web::http::header::CONTENT_DISPOSITION,
            "attachment; filename=\"users.json\"",
        ))
        .body(body))
}

/// A fixed plain-text sample.
#[utoipa::path(
    get,
    path = "/api/v1/files/sample.txt",
    responses(
        (status = 200, description = "Plain-text sample", content_type = "text/plain")
    ),
    tags = ["files"],
    operation_id = "downloadSampleText"
)]
#[get("/files/sample.txt")]
pub async fn download_sample_text() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            actix_web::http::header::CONTENT_DISPOSITION,
            "attachment; filename=\"sample.txt\"",
        ))
        .body(SAMPLE_TEXT)
}

fn detect_kind(name: &str) -> Result<UploadKind, DomainError> {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv") => Ok(UploadKind::Csv),
        Some("json") => Ok(UploadKind::Json),
        Some("txt") => Ok(UploadKind::Text),
        _ => Err(DomainError::invalid_request(format!(
            "unsupported file extension for '{name}': expected .csv, .json, or .txt"
        ))
        .with_details(serde_json::json!({ "field": "name", "code": "unknown_name" }))),
    }
}

fn preview_csv(body: &[u8]) -> Result<UploadPreview, DomainError> {
    let mut reader = csv::Reader::from_reader(body);
    let columns = reader
        .headers()
        .map_err(|error| DomainError::invalid_request(format!("malformed CSV: {error}")))?
        .iter()
        .map(str::to_owned)
        .collect();
    let mut rows = 0;
    for record in reader.records() {
        record
            .map_err(|error| DomainError::invalid_request(format!("malformed CSV: {error}")))?;
        rows += 1;
    }
    Ok(UploadPreview {
        rows: Some(rows),
        columns: Some(columns),
        ..UploadPreview::default()
    })
}

fn preview_json(body: &[u8]) -> Result<UploadPreview, DomainError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|error| DomainError::invalid_request(format!("malformed JSON: {error}")))?;
    let records = value.as_array().map_or(1, Vec::len);
    Ok(UploadPreview {
        records: Some(records),
        ..UploadPreview::default()
    })
}

fn preview_text(body: &[u8]) -> Result<UploadPreview, DomainError> {
    let text = std::str::from_utf8(body)
        .map_err(|_| DomainError::invalid_request("text upload is not valid UTF-8"))?;
    Ok(UploadPreview {
        lines: Some(text.lines().count()),
        ..UploadPreview::default()
    })
}

/// Accept a raw upload and report what was parsed.
#[utoipa::path(
    post,
    path = "/api/v1/files/upload",
    params(UploadParams),
    request_body(content = String, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Parsed upload summary", body = UploadResponse),
        (status = 400, description = "Missing name, unknown extension, or malformed content")
    ),
    tags = ["files"],
    operation_id = "uploadFile"
)]
#[post("/files/upload")]
pub async fn upload(
    params: web::Query<UploadParams>,
    body: web::Bytes,
) -> ApiResult<web::Json<UploadResponse>> {
    let name = params
        .into_inner()
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    let kind = detect_kind(&name)?;
    let preview = match kind {
        UploadKind::Csv => preview_csv(&body)?,
        UploadKind::Json => preview_json(&body)?,
        UploadKind::Text => preview_text(&body)?,
    };
    Ok(web::Json(UploadResponse {
        name,
        size: body.len(),
        kind,
        preview,
    }))
}
