//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] aggregate used by Swagger UI in debug builds.
//! Every HTTP handler registers its path here; schemas cover the
//! request and response bodies the handlers exchange.

use utoipa::OpenApi;

use crate::domain::analytics::SalesSummary;
use crate::domain::error::ErrorCode;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::{dashboard, files, health, items, session_state, users};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo dashboard backend API",
        description = "Echo endpoints, dashboard analytics over a deterministic \
            synthetic dataset, cookie-session state, and file transfer."
    ),
    paths(
        health::health,
        items::get_item,
        items::create_item,
        items::update_item,
        dashboard::summary,
        dashboard::by_date,
        dashboard::by_category,
        dashboard::by_region,
        dashboard::records,
        users::list_users,
        session_state::get_counter,
        session_state::increment_counter,
        session_state::decrement_counter,
        session_state::get_cart,
        session_state::add_cart_item,
        session_state::remove_cart_item_at,
        session_state::clear_cart,
        session_state::get_form,
        session_state::submit_form,
        files::download_sales_csv,
        files::download_users_json,
        files::download_sample_text,
        files::upload,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        SalesSummary,
        health::HealthResponse,
        items::GetItemResponse,
        items::ItemPayload,
        items::ItemResponse,
        dashboard::DateTotal,
        dashboard::CategoryTotal,
        dashboard::RegionTotal,
        dashboard::RecordsResponse,
        session_state::CounterResponse,
        session_state::CartResponse,
        session_state::CartItemPayload,
        session_state::FormPayload,
        files::UploadKind,
        files::UploadPreview,
        files::UploadResponse,
    ))
)]
pub struct ApiDoc;
