//! Error types for strip-tags.
//!
//! Extraction never fails on malformed markup (the parser recovers) and
//! byte input is decoded lossily, so the only failure is a selector the
//! matcher cannot compile.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A CSS selector (from the selector list or the remove list) failed to parse.
    #[error("Invalid CSS selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The selector exactly as supplied by the caller.
        selector: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selector_message_names_selector() {
        let err = Error::InvalidSelector {
            selector: "p[".to_string(),
            reason: "unexpected end of input".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("\"p[\""));
        assert!(message.contains("unexpected end of input"));
    }
}
