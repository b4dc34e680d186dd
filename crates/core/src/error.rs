/// Result alias that carries the custom [`LyricVizError`] type.
pub type Result<T> = std::result::Result<T, LyricVizError>;

/// Common error type for the core crate.
///
/// Lyric parsing and projection never fail; these variants only surface at the
/// resource-loading, configuration and session boundaries.
#[derive(Debug, thiserror::Error)]
pub enum LyricVizError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// A configuration value or argument was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Playback was requested before the studio resources finished loading.
    #[error("studio resources are not loaded yet")]
    NotReady,
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// JSON that could not be read into or written from a value.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl LyricVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_messages() {
        let err = LyricVizError::msg("lyrics missing");
        assert_eq!(err.to_string(), "lyrics missing");
    }

    #[test]
    fn describes_invalid_input() {
        let err = LyricVizError::InvalidInput("tick_ms must be positive");
        assert_eq!(err.to_string(), "invalid input: tick_ms must be positive");
    }
}
