//! Shared HTTP adapter state.
//!
//! The only dependency shared across sessions is the memoized mock
//! dataset, which is read-only after first generation; handlers accept
//! it via `actix_web::web::Data` so tests can supply small fixture
//! tables instead.

use std::sync::Arc;

use mock_data::{Dataset, SalesRecord, UserRecord};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    sales: Arc<Vec<SalesRecord>>,
    users: Arc<Vec<UserRecord>>,
}

impl HttpState {
    /// Construct state over explicit tables.
    pub fn new(sales: Vec<SalesRecord>, users: Vec<UserRecord>) -> Self {
        Self {
            sales: Arc::new(sales),
            users: Arc::new(users),
        }
    }

    /// Construct state over the process-wide memoized dataset.
    #[must_use]
    pub fn from_default_dataset() -> Self {
        let dataset = Dataset::get();
        Self::new(dataset.sales.clone(), dataset.users.clone())
    }

    /// The sales table.
    #[must_use]
    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    /// The user table.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }
}
