//! Domain types and pure computation for the dashboard backend.

pub mod analytics;
pub mod error;
pub mod session_state;

pub use analytics::{
    SalesFilter, SalesSummary, filter_sales, sales_by_category, sales_by_date, sales_by_region,
};
pub use error::{DomainError, ErrorCode};
pub use session_state::{
    CartValidationError, FormValidationError, SubmittedForm, remove_cart_item, validate_cart_item,
};
