//! Seeded generation of the sales and user tables.
//!
//! Both generators draw from a `ChaCha8Rng` initialised from the
//! configured seed, so the same configuration always produces
//! identical records. Generation cannot fail: every parameter is a
//! fixed, valid constant.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::records::{Category, City, Region, SalesRecord, UserRecord};

/// Mean of the daily sales distribution.
const SALES_MEAN: f64 = 1000.0;

/// Standard deviation of the daily sales distribution.
const SALES_STD_DEV: f64 = 200.0;

/// Mean of the user score distribution.
const SCORE_MEAN: f64 = 75.0;

/// Standard deviation of the user score distribution.
const SCORE_STD_DEV: f64 = 15.0;

/// Probability that a generated user is active.
const ACTIVE_PROBABILITY: f64 = 0.7;

/// Parameters for table generation.
///
/// The default configuration matches the dashboard's fixed dataset:
/// seed 42, one year of daily dates, and 100 users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the deterministic RNG.
    pub seed: u64,
    /// First day of the sales range, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the sales range, inclusive.
    pub end_date: NaiveDate,
    /// Number of user records to generate.
    pub user_count: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid calendar date"),
            user_count: 100,
        }
    }
}

/// Generates one sales record per day of the configured range.
///
/// `sales_amount` is sampled from `Normal(1000, 200)` and forced
/// non-negative with `abs`; `quantity` is uniform in `[10, 100)`;
/// category and region are uniform choices.
///
/// # Example
///
/// ```
/// use mock_data::{GeneratorConfig, generate_sales};
///
/// let sales = generate_sales(&GeneratorConfig::default());
/// assert!(sales.iter().all(|r| r.sales_amount >= 0.0));
/// ```
#[must_use]
pub fn generate_sales(config: &GeneratorConfig) -> Vec<SalesRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let sales_amounts = normal_distribution(SALES_MEAN, SALES_STD_DEV);

    let mut records = Vec::new();
    for date in config.start_date.iter_days() {
        if date > config.end_date {
            break;
        }
        records.push(SalesRecord {
            date,
            sales_amount: sales_amounts.sample(&mut rng).abs(),
            quantity: rng.random_range(10..100),
            category: choose(&mut rng, &Category::ALL),
            region: choose(&mut rng, &Region::ALL),
        });
    }
    records
}

/// Generates `user_count` user records with ids `1..=user_count`.
///
/// `age` is uniform in `[18, 65)`; `score` is sampled from
/// `Normal(75, 15)` and clamped into `[0, 100]`; roughly 70% of users
/// are active. Only `score` is post-processed; `age` relies on its
/// generator bounds.
#[must_use]
pub fn generate_users(config: &GeneratorConfig) -> Vec<UserRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let scores = normal_distribution(SCORE_MEAN, SCORE_STD_DEV);

    (1..=config.user_count)
        .map(|user_id| UserRecord {
            user_id,
            display_name: format!("User {user_id}"),
            age: rng.random_range(18..65),
            city: choose(&mut rng, &City::ALL),
            score: scores.sample(&mut rng).clamp(0.0, 100.0),
            active: rng.random_bool(ACTIVE_PROBABILITY),
        })
        .collect()
}

/// Builds a normal distribution from compile-time constants.
fn normal_distribution(mean: f64, std_dev: f64) -> Normal<f64> {
    // The parameters are fixed constants; a finite positive standard
    // deviation cannot be rejected.
    Normal::new(mean, std_dev).expect("standard deviation is finite and positive")
}

/// Uniformly picks one element from a non-empty slice.
fn choose<T: Copy>(rng: &mut ChaCha8Rng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}
