//! Dashboard data handlers.
//!
//! Every endpoint takes the same filter parameters, recomputes the
//! filtered subset from the shared dataset on each request, and
//! serialises a derived view of it. There is no per-request state and
//! no caching beyond the memoized dataset itself.

use actix_web::{get, web};
use chrono::NaiveDate;
use mock_data::{Category, Region, SalesRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    DomainError, SalesFilter, SalesSummary, filter_sales, sales_by_category, sales_by_date,
    sales_by_region,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, check_date_interval, out_of_range_error, parse_category_list, parse_optional_date,
    parse_region_list,
};

/// Default number of rows in the records preview.
const RECORDS_DEFAULT_LIMIT: i64 = 100;

/// Filter parameters shared by every dashboard endpoint.
///
/// Lists are comma-separated display names; dates are `YYYY-MM-DD`.
/// Absent or empty parameters are inactive predicates.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterParams {
    /// Comma-separated category names; absent keeps all.
    pub categories: Option<String>,
    /// Comma-separated region names; absent keeps all.
    pub regions: Option<String>,
    /// First day to keep, inclusive, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day to keep, inclusive, `YYYY-MM-DD`.
    pub end: Option<String>,
}

impl FilterParams {
    /// Validates the raw parameters into a domain filter.
    fn to_filter(&self) -> Result<SalesFilter, DomainError> {
        let categories =
            parse_category_list(self.categories.as_deref(), FieldName::new("categories"))?;
        let regions = parse_region_list(self.regions.as_deref(), FieldName::new("regions"))?;
        let start = parse_optional_date(self.start.as_deref(), FieldName::new("start"))?;
        let end = parse_optional_date(self.end.as_deref(), FieldName::new("end"))?;
        check_date_interval(start, end)?;
        Ok(SalesFilter {
            categories,
            regions,
            start,
            end,
        })
    }
}

/// Extra query parameters for the records preview. Extracted
/// separately from [`FilterParams`] because `serde_urlencoded` cannot
/// flatten nested structs.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecordsParams {
    /// Maximum number of rows to return; defaults to 100.
    pub limit: Option<i64>,
}

/// One row of the sales-by-date chart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateTotal {
    pub date: NaiveDate,
    pub total_sales: f64,
}

/// One row of the sales-by-category chart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    #[schema(value_type = String, example = "Electronics")]
    pub category: Category,
    pub total_sales: f64,
}

/// One row of the sales-by-region chart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionTotal {
    #[schema(value_type = String, example = "North")]
    pub region: Region,
    pub total_sales: f64,
}

/// Records preview with the size of the full filtered subset.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<SalesRecord>,
    /// Number of records matching the filter before the limit applies.
    pub total_count: usize,
}

fn filtered(state: &HttpState, params: &FilterParams) -> Result<Vec<SalesRecord>, DomainError> {
    let filter = params.to_filter()?;
    Ok(filter_sales(state.sales(), &filter))
}

/// Summary statistics over the filtered sales subset.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/summary",
    params(FilterParams),
    responses(
        (status = 200, description = "Summary statistics", body = SalesSummary),
        (status = 400, description = "Invalid filter parameters")
    ),
    tags = ["dashboard"],
    operation_id = "dashboardSummary"
)]
#[get("/dashboard/summary")]
pub async fn summary(
    state: web::Data<HttpState>,
    params: web::Query<FilterParams>,
) -> ApiResult<web::Json<SalesSummary>> {
    let subset = filtered(&state, &params)?;
    Ok(web::Json(SalesSummary::compute(&subset)))
}

/// Total sales per day over the filtered subset, sorted by date.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/sales-by-date",
    params(FilterParams),
    responses(
        (status = 200, description = "Daily totals", body = [DateTotal]),
        (status = 400, description = "Invalid filter parameters")
    ),
    tags = ["dashboard"],
    operation_id = "dashboardSalesByDate"
)]
#[get("/dashboard/sales-by-date")]
pub async fn by_date(
    state: web::Data<HttpState>,
    params: web::Query<FilterParams>,
) -> ApiResult<web::Json<Vec<DateTotal>>> {
    let subset = filtered(&state, &params)?;
    let rows = sales_by_date(&subset)
        .into_iter()
        .map(|(date, total_sales)| DateTotal { date, total_sales })
        .collect();
    Ok(web::Json(rows))
}

/// Total sales per category over the filtered subset.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/sales-by-category",
    params(FilterParams),
    responses(
        (status = 200, description = "Category totals", body = [CategoryTotal]),
        (status = 400, description = "Invalid filter parameters")
    ),
    tags = ["dashboard"],
    operation_id = "dashboardSalesByCategory"
)]
#[get("/dashboard/sales-by-category")]
pub async fn by_category(
    state: web::Data<HttpState>,
    params: web::Query<FilterParams>,
) -> ApiResult<web::Json<Vec<CategoryTotal>>> {
    let subset = filtered(&state, &params)?;
    let rows = sales_by_category(&subset)
        .into_iter()
        .map(|(category, total_sales)| CategoryTotal {
            category,
            total_sales,
        })
        .collect();
    Ok(web::Json(rows))
}

/// Total sales per region over the filtered subset.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/sales-by-region",
    params(FilterParams),
    responses(
        (status = 200, description = "Region totals", body = [RegionTotal]),
        (status = 400, description = "Invalid filter parameters")
    ),
    tags = ["dashboard"],
    operation_id = "dashboardSalesByRegion"
)]
#[get("/dashboard/sales-by-region")]
pub async fn by_region(
    state: web::Data<HttpState>,
    params: web::Query<FilterParams>,
) -> ApiResult<web::Json<Vec<RegionTotal>>> {
    let subset = filtered(&state, &params)?;
    let rows = sales_by_region(&subset)
        .into_iter()
        .map(|(region, total_sales)| RegionTotal {
            region,
            total_sales,
        })
        .collect();
    Ok(web::Json(rows))
}

/// Preview of the filtered records, truncated to `limit` rows.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/records",
    params(FilterParams, RecordsParams),
    responses(
        (status = 200, description = "Filtered records preview", body = RecordsResponse),
        (status = 400, description = "Invalid filter parameters")
    ),
    tags = ["dashboard"],
    operation_id = "dashboardRecords"
)]
#[get("/dashboard/records")]
pub async fn records(
    state: web::Data<HttpState>,
    filter: web::Query<FilterParams>,
    params: web::Query<RecordsParams>,
) -> ApiResult<web::Json<RecordsResponse>> {
    let limit = params.limit.unwrap_or(RECORDS_DEFAULT_LIMIT);
    if limit < 1 {
        return Err(out_of_range_error(FieldName::new("limit"), limit, "at least 1").into());
    }
    let mut subset = filtered(&state, &filter)?;
    let total_count = subset.len();
    subset.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    Ok(web::Json(RecordsResponse {
        records: subset,
        total_count,
    }))
}
