//! Derived aggregation over the sales table.
//!
//! The dashboard recomputes these views synchronously on every
//! interaction: a filtered subset, summary statistics over it, and
//! grouped totals for the charts. Filtering is the conjunction of all
//! active predicates; an empty selection for a dimension means
//! "select all" for that dimension.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mock_data::{Category, Region, SalesRecord};
use serde::Serialize;

/// User-selected filter predicates for the sales table.
///
/// Empty category/region selections and absent dates are inactive
/// predicates; the date interval is inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    /// Categories to keep; empty keeps all.
    pub categories: Vec<Category>,
    /// Regions to keep; empty keeps all.
    pub regions: Vec<Region>,
    /// First day to keep, inclusive.
    pub start: Option<NaiveDate>,
    /// Last day to keep, inclusive.
    pub end: Option<NaiveDate>,
}

impl SalesFilter {
    /// Returns true when the record satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, record: &SalesRecord) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if !self.regions.is_empty() && !self.regions.contains(&record.region) {
            return false;
        }
        if self.start.is_some_and(|start| record.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| record.date > end) {
            return false;
        }
        true
    }
}

/// Summary statistics over a filtered subset.
///
/// Defined for the empty subset: all totals are zero and the mean is
/// reported as `0.0` rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Sum of sales amounts.
    pub total_sales: f64,
    /// Number of records in the subset.
    pub order_count: u64,
    /// Mean sales amount, `0.0` when the subset is empty.
    pub mean_order_value: f64,
    /// Sum of quantities.
    pub total_quantity: u64,
}

impl SalesSummary {
    /// Computes summary statistics over the given records.
    #[must_use]
    pub fn compute(records: &[SalesRecord]) -> Self {
        let total_sales: f64 = records.iter().map(|r| r.sales_amount).sum();
        let total_quantity: u64 = records.iter().map(|r| u64::from(r.quantity)).sum();
        let order_count = records.len() as u64;
        let mean_order_value = if records.is_empty() {
            0.0
        } else {
            total_sales / order_count as f64
        };
        Self {
            total_sales,
            order_count,
            mean_order_value,
            total_quantity,
        }
    }
}

/// Returns the subset of records satisfying the filter, in input order.
#[must_use]
pub fn filter_sales(records: &[SalesRecord], filter: &SalesFilter) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Total sales per day, one row per distinct date, sorted by date.
#[must_use]
pub fn sales_by_date(records: &[SalesRecord]) -> Vec<(NaiveDate, f64)> {
    group_totals(records, |record| record.date)
}

/// Total sales per category, one row per distinct category.
#[must_use]
pub fn sales_by_category(records: &[SalesRecord]) -> Vec<(Category, f64)> {
    group_totals(records, |record| record.category)
}

/// Total sales per region, one row per distinct region.
#[must_use]
pub fn sales_by_region(records: &[SalesRecord]) -> Vec<(Region, f64)> {
    group_totals(records, |record| record.region)
}

/// Sums sales amounts per group key. A `BTreeMap` keeps the output
/// sorted by key so JSON responses are stable.
fn group_totals<K, F>(records: &[SalesRecord], key: F) -> Vec<(K, f64)>
where
    K: Ord,
    F: Fn(&SalesRecord) -> K,
{
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(key(record)).or_insert(0.0) += record.sales_amount;
    }
    totals.into_iter().collect()
}
