//! Echo API handlers.
//!
//! ```text
//! GET /items/{item_id}?skip=0&limit=10
//! POST /items {"name":"Widget","description":"optional"}
//! PUT /items/{item_id} {"name":"Widget"}
//! ```
//!
//! Each handler is a pure request-to-response mapping: it validates
//! its inputs, then echoes them back with a fixed message. Nothing is
//! persisted, and concurrent identical requests are independent.
//!
//! These DTOs keep snake_case field names; the wire shape is a
//! published contract consumed by external API test suites.

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::validation::{FieldName, missing_field_error, out_of_range_error};

/// Placeholder identifier returned by `POST /items`.
const NEW_ITEM_ID: &str = "new_item";

/// Pagination bounds declared by the API contract.
const SKIP_DEFAULT: i64 = 0;
const LIMIT_DEFAULT: i64 = 10;
const LIMIT_MIN: i64 = 1;
const LIMIT_MAX: i64 = 100;

/// Query parameters for `GET /items/{item_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemQuery {
    /// Number of items to skip; defaults to 0.
    pub skip: Option<i64>,
    /// Maximum number of items to return; defaults to 10.
    pub limit: Option<i64>,
}

/// Request body shared by `POST /items` and `PUT /items/{item_id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    /// Item name; required.
    pub name: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Response for `GET /items/{item_id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetItemResponse {
    pub item_id: String,
    pub skip: i64,
    pub limit: i64,
    pub message: String,
}

/// Response for item create/update.
///
/// `description` is always present, serialised as `null` when absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item_id: String,
    pub name: String,
    pub description: Option<String>,
    pub message: String,
}

/// Validates pagination parameters, applying the declared defaults.
fn validate_pagination(query: &ItemQuery) -> Result<(i64, i64), DomainError> {
    let skip = query.skip.unwrap_or(SKIP_DEFAULT);
    if skip < 0 {
        return Err(out_of_range_error(
            FieldName::new("skip"),
            skip,
            "greater than or equal to 0",
        ));
    }
    let limit = query.limit.unwrap_or(LIMIT_DEFAULT);
    if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
        return Err(out_of_range_error(
            FieldName::new("limit"),
            limit,
            "between 1 and 100",
        ));
    }
    Ok((skip, limit))
}

/// Extracts the required name from an item payload.
fn validate_item_payload(payload: ItemPayload) -> Result<(String, Option<String>), DomainError> {
    let name = payload
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    Ok((name, payload.description))
}

/// Echo the path and query parameters back to the caller.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "Opaque item identifier"),
        ("skip" = Option<i64>, Query, description = "Number of items to skip, >= 0"),
        ("limit" = Option<i64>, Query, description = "Maximum number of items, 1-100")
    ),
    responses(
        (status = 200, description = "Echoed parameters", body = GetItemResponse),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{item_id}")]
pub async fn get_item(
    path: web::Path<String>,
    query: web::Query<ItemQuery>,
) -> ApiResult<web::Json<GetItemResponse>> {
    let (skip, limit) = validate_pagination(&query)?;
    Ok(web::Json(GetItemResponse {
        item_id: path.into_inner(),
        skip,
        limit,
        message: "GET request processed successfully".to_owned(),
    }))
}

/// Echo the created item back with a placeholder identifier.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Echoed item", body = ItemResponse),
        (status = 400, description = "Missing required name")
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(payload: web::Json<ItemPayload>) -> ApiResult<web::Json<ItemResponse>> {
    let (name, description) = validate_item_payload(payload.into_inner())?;
    Ok(web::Json(ItemResponse {
        item_id: NEW_ITEM_ID.to_owned(),
        name,
        description,
        message: "POST request processed successfully".to_owned(),
    }))
}

/// Echo the updated item back, keyed by the path identifier.
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    params(("item_id" = String, Path, description = "Opaque item identifier")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Echoed item", body = ItemResponse),
        (status = 400, description = "Missing required name")
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{item_id}")]
pub async fn update_item(
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<web::Json<ItemResponse>> {
    let (name, description) = validate_item_payload(payload.into_inner())?;
    Ok(web::Json(ItemResponse {
        item_id: path.into_inner(),
        name,
        description,
        message: "PUT request processed successfully".to_owned(),
    }))
}
