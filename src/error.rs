//! Error types for tokenization and fulltext parsing.
//!
//! The variants mirror the return codes of the original fulltext-parser
//! plugin interface (init-twice, invalid-argument, plugin-error).

use thiserror::Error;

/// Errors produced by the tokenizer and the fulltext parser
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// A scan was started while another one is still in progress
    #[error("parser is already scanning, call scan_end first")]
    InitTwice,

    /// Bad input handed to the parser
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The segmentation engine reported a failure
    #[error("segmentation engine '{engine}' failed: {reason}")]
    Engine {
        /// Name of the engine that failed
        engine: String,
        /// Failure description from the engine
        reason: String,
    },

    /// Failure while writing a report
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenizeError::Engine {
            engine: "space".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "segmentation engine 'space' failed: boom"
        );

        let err = TokenizeError::InvalidArgument("empty text");
        assert_eq!(err.to_string(), "invalid argument: empty text");
    }
}
