//! Player name validation and save-slot filename encoding

/// Maximum length of a player name, in characters.
pub const MAX_NAME_LENGTH: usize = 24;

/// Player name validation errors with helpful messages
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Name contains control characters: {chars}")]
    ControlChars { chars: String },
}

/// Validate a player name. Surrounding whitespace is trimmed; the trimmed
/// name is returned on success.
pub fn validate_player_name(name: &str) -> Result<String, NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    if trimmed.chars().any(|c| c.is_control()) {
        let chars = trimmed
            .chars()
            .filter(|c| c.is_control())
            .map(|c| format!("\\u{{{:04x}}}", c as u32))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(NameError::ControlChars { chars });
    }
    Ok(trimmed.to_string())
}

/// Generate a safe filename from a save slot name using URL encoding
pub fn safe_filename(slot: &str) -> String {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    utf8_percent_encode(slot, NON_ALPHANUMERIC).to_string()
}
