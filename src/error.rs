//! Error types for the gallery

use thiserror::Error;

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Errors surfaced by the gallery. None of them are fatal; the UI layer
/// logs them and shows a notice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalleryError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("rendering surface error: {0}")]
    Surface(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            GalleryError::UnknownModel("z-9".into()).to_string(),
            "unknown model: z-9"
        );
        assert_eq!(
            GalleryError::InvalidColor("teal".into()).to_string(),
            "invalid color: \"teal\""
        );
    }
}
