//! The tokenizer front-end.
//!
//! A [`Tokenizer`] wraps a segmentation engine and normalizes input before
//! delegating to it. Construction takes no arguments and cannot fail; any
//! failure surfaces from `split`, never earlier.

use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::engine::{self, SegmentEngine};
use crate::error::TokenizeError;

/// A Thai tokenizer backed by a segmentation engine
pub struct Tokenizer {
    /// The engine doing the actual segmentation (shared reference)
    engine: Arc<dyn SegmentEngine>,
}

impl Tokenizer {
    /// Create a tokenizer using the process-wide default engine
    pub fn new() -> Self {
        Tokenizer {
            engine: engine::default_engine(),
        }
    }

    /// Create a tokenizer with a specific engine
    pub fn with_engine(engine: Arc<dyn SegmentEngine>) -> Self {
        Tokenizer { engine }
    }

    /// Name of the engine backing this tokenizer
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Get the Arc reference to the engine (for sharing)
    pub fn engine_arc(&self) -> Arc<dyn SegmentEngine> {
        Arc::clone(&self.engine)
    }

    /// Split a text into an ordered sequence of tokens.
    ///
    /// The input is NFC-normalized before being handed to the engine, so
    /// decomposed and pre-composed spellings segment identically.
    pub fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let normalized: String = text.nfc().collect();
        self.engine.split(&normalized)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
