//! Segmentation engine abstraction.
//!
//! The actual Thai word segmentation is performed by an external engine that
//! this crate treats as opaque: it is constructed without arguments and
//! exposes a single `split` operation returning an ordered token sequence.
//! The trait below is that seam. The built-in [`SpaceEngine`] reproduces the
//! whitespace fallback the original fulltext parser used whenever the real
//! engine was unavailable.
//!
//! A process-wide default engine is shared by every [`Tokenizer`] created
//! through `Tokenizer::new()`, the same way the original plugin shared one
//! engine instance across all parser instances.
//!
//! [`Tokenizer`]: crate::tokenizer::Tokenizer

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::error::TokenizeError;

/// An external word-segmentation capability.
///
/// `split` takes a text and returns the ordered sequence of tokens the engine
/// computed for it. The engine decides what a token is; callers make no
/// assumption about coverage or reconstruction.
pub trait SegmentEngine: Send + Sync {
    /// Engine name, used in logs and error messages
    fn name(&self) -> &str;

    /// Segment `text` into an ordered sequence of tokens
    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

/// Whitespace segmentation, the degraded mode of the fulltext parser.
///
/// Splits on Unicode whitespace and drops empty fields. An empty or
/// whitespace-only input yields an empty token sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceEngine;

impl SegmentEngine for SpaceEngine {
    fn name(&self) -> &str {
        "space"
    }

    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(text.split_whitespace().map(|w| w.to_string()).collect())
    }
}

/// The process-wide default engine, shared across tokenizer instances
static DEFAULT_ENGINE: Lazy<RwLock<Arc<dyn SegmentEngine>>> =
    Lazy::new(|| RwLock::new(Arc::new(SpaceEngine)));

/// Get a handle to the process-wide default engine
pub fn default_engine() -> Arc<dyn SegmentEngine> {
    DEFAULT_ENGINE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// Install a new process-wide default engine.
///
/// Tokenizers created afterwards with `Tokenizer::new()` will use it;
/// existing tokenizers keep the engine they were built with.
pub fn install_default_engine(engine: Arc<dyn SegmentEngine>) {
    let mut guard = DEFAULT_ENGINE.write().unwrap_or_else(|e| e.into_inner());
    log::info!("installing default segmentation engine '{}'", engine.name());
    *guard = engine;
}
