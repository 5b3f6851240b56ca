//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection is an `invalid_request` error whose details name the
//! offending field, the rejected value and a machine-readable code.

use std::str::FromStr;

use serde_json::json;
use uuid::Uuid;

use crate::domain::{AccessCode, CodeNamespace, DomainError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidNamespace,
    InvalidAccessCode,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidNamespace => "invalid_namespace",
            Self::InvalidAccessCode => "invalid_access_code",
        }
    }
}

fn rejected(field: &str, value: &str, code: ValidationCode, message: String) -> DomainError {
    DomainError::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: &str) -> DomainError {
    DomainError::invalid_request(format!("{field} is required")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Parse a UUID-backed identifier such as `GroupId`.
pub(crate) fn parse_id<T>(raw: &str, field: &str) -> Result<T, DomainError>
where
    T: FromStr,
{
    T::from_str(raw).map_err(|_| {
        rejected(
            field,
            raw,
            ValidationCode::InvalidUuid,
            format!("{field} must be a valid UUID"),
        )
    })
}

pub(crate) fn parse_optional_uuid(
    raw: Option<&str>,
    field: &str,
) -> Result<Option<Uuid>, DomainError> {
    raw.map(|value| parse_id::<Uuid>(value, field)).transpose()
}

pub(crate) fn parse_namespace(
    raw: Option<&str>,
    field: &str,
) -> Result<CodeNamespace, DomainError> {
    let raw = raw.ok_or_else(|| missing_field_error(field))?;
    raw.parse().map_err(|_| {
        rejected(
            field,
            raw,
            ValidationCode::InvalidNamespace,
            format!("{field} must be member or group"),
        )
    })
}

pub(crate) fn parse_access_code(raw: &str, field: &str) -> Result<AccessCode, DomainError> {
    AccessCode::parse(raw).map_err(|error| {
        rejected(
            field,
            raw,
            ValidationCode::InvalidAccessCode,
            error.to_string(),
        )
    })
}
