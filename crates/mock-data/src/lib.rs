//! Deterministic mock sales and user tables for the demo dashboard.
//!
//! The dashboard and its export endpoints are driven entirely by
//! synthetic data. This crate generates that data from a fixed seed so
//! that every field is bit-for-bit reproducible: charts, aggregates,
//! and tests can all assert against the same records.
//!
//! # Overview
//!
//! - One [`SalesRecord`] per day of a configurable date range.
//! - A fixed number of [`UserRecord`]s with bounded ages and scores.
//! - A process-wide memoized [`Dataset`] generated once under the
//!   default configuration and shared read-only thereafter.
//!
//! # Example
//!
//! ```
//! use mock_data::{GeneratorConfig, generate_sales, generate_users};
//!
//! let config = GeneratorConfig::default();
//! let sales = generate_sales(&config);
//! let users = generate_users(&config);
//!
//! // 2024 is a leap year.
//! assert_eq!(sales.len(), 366);
//! assert_eq!(users.len(), 100);
//! // Same seed, same records.
//! assert_eq!(sales, generate_sales(&config));
//! ```

mod dataset;
mod generator;
mod records;

pub use dataset::Dataset;
pub use generator::{GeneratorConfig, generate_sales, generate_users};
pub use records::{Category, City, Region, SalesRecord, UserRecord};
