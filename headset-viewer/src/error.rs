//! Error types for viewer startup and model loading.

use thiserror::Error;

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Errors the viewer recognises. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("host element \"{0}\" not found in the document")]
    MissingHostElement(String),

    #[error("failed to load model: {0}")]
    AssetLoadFailure(String),

    #[error("invalid viewer configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_input() {
        let missing = ViewerError::MissingHostElement("vr-headset-container".into());
        assert!(missing.to_string().contains("vr-headset-container"));

        let load = ViewerError::AssetLoadFailure("404 Not Found".into());
        assert_eq!(load.to_string(), "failed to load model: 404 Not Found");
    }
}
