//! Attribute validation helpers for incoming resources.
//!
//! Structs derive [`validator::Validate`] and point their `custom` rules at the
//! functions below. [`field_errors`] flattens the result into an ordered list
//! the HTTP layer renders one entry per failure.

use std::borrow::Cow;

use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::decimal::{is_blank, parse_decimal};

/// Message for a missing or blank attribute.
pub const MSG_BLANK: &str = "can't be blank";

/// Message for a non-positive amount.
pub const MSG_NOT_POSITIVE: &str = "must be greater than 0";

/// Message for an amount that does not parse as a decimal.
pub const MSG_NOT_A_NUMBER: &str = "is not a number";

/// A single failed rule on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject empty and whitespace-only text.
pub fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(MSG_BLANK)));
    }
    Ok(())
}

/// Reject zero and negative amounts.
pub fn validate_positive(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value <= BigDecimal::from(0) {
        return Err(
            ValidationError::new("greater_than").with_message(Cow::Borrowed(MSG_NOT_POSITIVE))
        );
    }
    Ok(())
}

/// Check a raw JSON amount: present, numeric, then greater than zero.
///
/// Reports only the first rule that fails.
pub fn validate_amount(value: &Value) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(MSG_BLANK)));
    }
    match parse_decimal(value) {
        Some(amount) => validate_positive(&amount),
        None => Err(
            ValidationError::new("not_a_number").with_message(Cow::Borrowed(MSG_NOT_A_NUMBER))
        ),
    }
}

/// Flatten `errors` into one [`FieldError`] per failed rule.
///
/// Fields listed in `field_order` come first, in that order; any others follow
/// alphabetically so the output never depends on hash ordering.
pub fn field_errors(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    let mut fields: Vec<&str> = field_order
        .iter()
        .copied()
        .filter(|f| by_field.contains_key(*f))
        .collect();

    let mut rest: Vec<&str> = by_field
        .keys()
        .map(|k| &**k)
        .filter(|k| !field_order.contains(k))
        .collect();
    rest.sort_unstable();
    fields.extend(rest);

    fields
        .into_iter()
        .flat_map(|field| {
            by_field
                .get(field)
                .into_iter()
                .flat_map(|errs| errs.iter())
                .map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::new(field, message)
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
