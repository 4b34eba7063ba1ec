//! Field validation shared by tickets and responses

use crate::error::{Result, SupportCenterError};

/// Maximum number of characters in ticket text, response text and device names
pub const MAX_TEXT_LENGTH: usize = 100;

/// Validate a required text field
///
/// Fails when the text is absent, empty, or longer than
/// [`MAX_TEXT_LENGTH`] characters. Length is counted in characters, not
/// bytes. Returns the validated text.
pub fn validate_text<'a>(field: &str, text: Option<&'a str>) -> Result<&'a str> {
    let Some(text) = text else {
        return Err(SupportCenterError::validation(field, "is required"));
    };
    if text.is_empty() {
        return Err(SupportCenterError::validation(field, "cannot be empty"));
    }
    let length = text.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(SupportCenterError::validation(
            field,
            format!("at most {MAX_TEXT_LENGTH} characters are allowed, got {length}"),
        ));
    }
    Ok(text)
}
