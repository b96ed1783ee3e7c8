//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use mock_data::{Category, Region};
use serde_json::json;

use crate::domain::DomainError;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    OutOfRange,
    InvalidDate,
    UnknownName,
    InvertedInterval,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::UnknownName => "unknown_name",
            ErrorCode::InvertedInterval => "inverted_interval",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> DomainError {
        DomainError::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> DomainError {
        DomainError::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> DomainError {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn out_of_range_error(
    field: FieldName,
    value: i64,
    constraint: &str,
) -> DomainError {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be {constraint}"))
        .with_value(ErrorCode::OutOfRange, value.to_string())
}

pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let field_name = field.as_str();
        ValidationError::new(
            field_name,
            format!("{field_name} must be a YYYY-MM-DD date"),
        )
        .with_value(ErrorCode::InvalidDate, value)
    })
}

pub(crate) fn parse_optional_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, DomainError> {
    value.map(|raw| parse_date(raw, field)).transpose()
}

/// Rejects inverted date intervals before any filtering runs.
pub(crate) fn check_date_interval(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), DomainError> {
    if let (Some(start), Some(end)) = (start, end)
        && start > end
    {
        return Err(ValidationError::new(
            "start",
            format!("start date {start} is after end date {end}"),
        )
        .with_code(ErrorCode::InvertedInterval));
    }
    Ok(())
}

fn unknown_name_error(field: FieldName, value: &str, expected: &str) -> DomainError {
    let field_name = field.as_str();
    ValidationError::new(field_name, format!("{field_name} must be one of: {expected}"))
        .with_value(ErrorCode::UnknownName, value)
}

/// Parses a comma-separated category list; `None`/empty means all.
pub(crate) fn parse_category_list(
    value: Option<&str>,
    field: FieldName,
) -> Result<Vec<Category>, DomainError> {
    parse_name_list(value, field, Category::from_name, || {
        Category::ALL.map(Category::name).join(", ")
    })
}

/// Parses a comma-separated region list; `None`/empty means all.
pub(crate) fn parse_region_list(
    value: Option<&str>,
    field: FieldName,
) -> Result<Vec<Region>, DomainError> {
    parse_name_list(value, field, Region::from_name, || {
        Region::ALL.map(Region::name).join(", ")
    })
}

fn parse_name_list<T>(
    value: Option<&str>,
    field: FieldName,
    parse: impl Fn(&str) -> Option<T>,
    expected: impl Fn() -> String,
) -> Result<Vec<T>, DomainError> {
    let Some(raw) = value else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| parse(name).ok_or_else(|| unknown_name_error(field, name, &expected())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail_str<'a>(err: &'a DomainError, key: &str) -> Option<&'a str> {
        err.details()
            .and_then(|details| details.get(key))
            .and_then(Value::as_str)
    }

    #[test]
    fn missing_field_errors_carry_field_details() {
        let err = missing_field_error(FieldName::new("name"));
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(detail_str(&err, "field"), Some("name"));
        assert_eq!(detail_str(&err, "code"), Some("missing_field"));
    }

    #[rstest]
    #[case("2024-06-01", true)]
    #[case("01/06/2024", false)]
    #[case("2024-13-01", false)]
    #[case("yesterday", false)]
    fn parse_date_accepts_iso_dates_only(#[case] raw: &str, #[case] ok: bool) {
        let result = parse_date(raw, FieldName::new("start"));
        assert_eq!(result.is_ok(), ok, "unexpected result for {raw}");
    }

    #[test]
    fn inverted_intervals_are_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1);
        let end = NaiveDate::from_ymd_opt(2024, 6, 1);
        let err = check_date_interval(start, end).expect_err("inverted");
        assert_eq!(detail_str(&err, "code"), Some("inverted_interval"));
        assert!(check_date_interval(end, start).is_ok());
        assert!(check_date_interval(start, None).is_ok());
    }

    #[test]
    fn category_lists_parse_known_names() {
        let parsed = parse_category_list(Some("Food, Books"), FieldName::new("categories"))
            .expect("known names");
        assert_eq!(parsed, vec![Category::Food, Category::Books]);
    }

    #[test]
    fn absent_or_empty_lists_mean_select_all() {
        assert!(
            parse_category_list(None, FieldName::new("categories"))
                .expect("absent")
                .is_empty()
        );
        assert!(
            parse_region_list(Some(""), FieldName::new("regions"))
                .expect("empty")
                .is_empty()
        );
    }

    #[test]
    fn unknown_names_are_rejected_with_the_offending_value() {
        let err = parse_region_list(Some("North,Central"), FieldName::new("regions"))
            .expect_err("unknown region");
        assert_eq!(detail_str(&err, "value"), Some("Central"));
        assert_eq!(detail_str(&err, "code"), Some("unknown_name"));
    }
}
