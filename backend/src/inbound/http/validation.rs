//! Shared validation helpers for inbound HTTP adapters.
//!
//! Portal forms post either JSON or `application/x-www-form-urlencoded`
//! bodies. Handlers take a [`JsonOrForm`] extractor and flatten it with
//! [`into_payload`]; missing inputs are reported with a stable
//! `{"field", "code"}` details object.

use actix_web::{Either, web};
use serde_json::json;

use crate::domain::{Error, MissingField};

pub(crate) const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Request body accepted as JSON first, then as an urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
        }
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: &'static str,
}

impl ValidationError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }
}

/// Unwrap whichever body representation the client sent.
pub fn into_payload<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub(crate) fn missing_field_error(MissingField(field): MissingField) -> Error {
    ValidationError::new(field.form_name(), ALL_FIELDS_REQUIRED).with_code(ErrorCode::MissingField)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialField, ErrorCode as DomainErrorCode};
    use rstest::rstest;

    #[rstest]
    #[case(CredentialField::Name, "Username")]
    #[case(CredentialField::Email, "Email")]
    #[case(CredentialField::Password, "Password")]
    #[case(CredentialField::Role, "Role")]
    fn missing_field_names_the_form_input(#[case] field: CredentialField, #[case] name: &str) {
        let err = missing_field_error(MissingField(field));
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), ALL_FIELDS_REQUIRED);
        assert_eq!(
            err.details(),
            Some(&json!({"field": name, "code": "missing_field"}))
        );
    }
}
