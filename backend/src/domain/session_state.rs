//! Session-scoped dashboard state.
//!
//! The counter, cart, and submitted form live only for the lifetime of
//! one user's session. They are mutated exclusively by user-initiated
//! actions and carry no invariants beyond "cart order reflects
//! add/remove order", so the types here are small value objects plus
//! the validation the inbound adapter maps to HTTP errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for form submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must contain '@'")]
    InvalidEmail,
}

/// The last form submitted in this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedForm {
    /// Submitted name, non-blank.
    pub name: String,
    /// Submitted email, contains `@`.
    pub email: String,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedForm {
    /// Validates the raw fields and stamps the submission time.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, FormValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(FormValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(FormValidationError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(FormValidationError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            submitted_at,
        })
    }
}

/// Validation failures for cart mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartValidationError {
    #[error("cart item must not be empty")]
    EmptyItem,
    #[error("cart index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Validates and normalises a cart item before it is appended.
pub fn validate_cart_item(item: &str) -> Result<String, CartValidationError> {
    let item = item.trim();
    if item.is_empty() {
        return Err(CartValidationError::EmptyItem);
    }
    Ok(item.to_owned())
}

/// Removes the item at `index`, preserving the order of the rest.
pub fn remove_cart_item(items: &mut Vec<String>, index: usize) -> Result<String, CartValidationError> {
    if index >= items.len() {
        return Err(CartValidationError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}
