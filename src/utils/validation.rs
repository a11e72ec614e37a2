use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_input(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        tracing::debug!("Field '{}' is empty or whitespace-only", field_name);
        return Err(ConvertError::InvalidInput {
            input: value.to_string(),
        });
    }
    Ok(())
}
