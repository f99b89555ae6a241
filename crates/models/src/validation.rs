use crate::errors::ModelError;

/// Semantic checks that run after an input shape has been deserialized.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Patch variant: absent is fine, present must not be blank.
pub(crate) fn optional_non_blank(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}
