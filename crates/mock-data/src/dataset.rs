//! Process-wide memoized dataset.
//!
//! The generated tables are immutable after creation and shared
//! read-only across sessions, so a lazily initialised static is all
//! the caching the dashboard needs. The cache is keyed by the fixed
//! default configuration and never invalidated.

use std::sync::OnceLock;

use crate::generator::{GeneratorConfig, generate_sales, generate_users};
use crate::records::{SalesRecord, UserRecord};

static DATASET: OnceLock<Dataset> = OnceLock::new();

/// The two generated tables backing every dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Daily sales records for the configured range.
    pub sales: Vec<SalesRecord>,
    /// Generated user profiles.
    pub users: Vec<UserRecord>,
}

impl Dataset {
    /// Generates a dataset from the given configuration.
    #[must_use]
    pub fn generate(config: &GeneratorConfig) -> Self {
        Self {
            sales: generate_sales(config),
            users: generate_users(config),
        }
    }

    /// Returns the memoized default dataset, generating it on first
    /// access.
    #[must_use]
    pub fn get() -> &'static Dataset {
        DATASET.get_or_init(|| Self::generate(&GeneratorConfig::default()))
    }
}
