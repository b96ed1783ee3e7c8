//! Record types for the generated tables.
//!
//! These types are independent of backend domain types so the backend
//! can convert them at the point of use without a circular dependency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Product category attached to a sales record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Books,
}

impl Category {
    /// All categories, in generation order.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Books,
    ];

    /// Parse a category from its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Display name as it appears in exports and filter parameters.
    pub fn name(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Books => "Books",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sales region attached to a sales record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// All regions, in generation order.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    /// Parse a region from its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Display name as it appears in exports and filter parameters.
    pub fn name(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Home city attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
    Houston,
    Phoenix,
}

impl City {
    /// All cities, in generation order.
    pub const ALL: [City; 5] = [
        City::NewYork,
        City::LosAngeles,
        City::Chicago,
        City::Houston,
        City::Phoenix,
    ];

    /// Display name as it appears in exports.
    pub fn name(self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
            City::Houston => "Houston",
            City::Phoenix => "Phoenix",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of synthetic sales.
///
/// `sales_amount` is always non-negative; generation forces the
/// absolute value after sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Calendar day the sales occurred on.
    pub date: NaiveDate,
    /// Total sales value for the day, non-negative.
    pub sales_amount: f64,
    /// Number of units sold.
    pub quantity: u32,
    /// Product category.
    pub category: Category,
    /// Sales region.
    pub region: Region,
}

/// A synthetic user profile.
///
/// `score` is clamped into `[0, 100]` after sampling; `age` relies on
/// its generator bounds of `[18, 65)` and is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique positive identifier.
    pub user_id: u32,
    /// Human-readable name.
    pub display_name: String,
    /// Age in years, within `[18, 65)`.
    pub age: u8,
    /// Home city.
    pub city: City,
    /// Engagement score in `[0, 100]`.
    pub score: f64,
    /// Whether the user is currently active.
    pub active: bool,
}
