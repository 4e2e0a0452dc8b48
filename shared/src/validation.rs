//! Input validation
//!
//! Request types derive `validator::Validate`; this turns the resulting
//! errors into a single message for the `{error, code}` body.

use validator::{Validate, ValidationErrors};

/// Run derive-based validation and flatten the first failure into a message
pub fn validate_request<T: Validate>(request: &T) -> Result<(), String> {
    request.validate().map_err(|e| first_message(&e))
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid {}", field),
            })
        })
        .unwrap_or_else(|| "Invalid request".to_string())
}
