//! Common validation utilities and helpers.

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Walks nested structs and lists so that certificate errors surface next to
/// the user's own field errors. Messages are sorted to keep responses stable.
///
/// # Example
/// ```ignore
/// user.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors = Vec::new();
    collect_messages(&e, &mut errors);
    errors.sort();
    ApiError::validation(errors)
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for kind in errors.errors().values() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
