//! Error types for the Valentine Card

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Card configuration is not valid TOML or does not match the schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A deck needs at least one page
    #[error("Deck has no pages")]
    EmptyDeck,

    /// A page entry in the configuration is malformed
    #[error("Invalid page {index}: {reason}")]
    InvalidPage { index: usize, reason: String },

    /// Background audio could not be started
    #[error("Audio playback failed: {0}")]
    Playback(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidPage {
            index: 2,
            reason: "both image and video".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid page 2: both image and video");

        let err = CardError::Playback("NotAllowedError".to_string());
        assert_eq!(format!("{}", err), "Audio playback failed: NotAllowedError");
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("title = ").unwrap_err();
        let card_err: CardError = toml_err.into();
        assert!(matches!(card_err, CardError::ConfigParse(_)));
    }
}
