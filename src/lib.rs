//! # thaitok-rs
//!
//! A Thai word tokenizer and fulltext parser written in Rust.
//!
//! Thai is written without spaces between words, so word segmentation is
//! delegated to a pluggable engine (the [`SegmentEngine`] trait). The crate
//! ships the whitespace fallback engine the original fulltext parser degraded
//! to, and can optionally bind the real Python `thai_tokenizer` module behind
//! the `python` cargo feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use thaitok_rs::Tokenizer;
//!
//! // Zero-argument construction, uses the process-wide default engine
//! let tokenizer = Tokenizer::new();
//! let tokens = tokenizer.split("สวัสดีค่ะ ยินดีต้อนรับ").unwrap();
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```
//!
//! ## Fulltext scanning
//!
//! The streaming parser pulls tokens one at a time, the way a fulltext index
//! consumes them:
//!
//! ```rust
//! use thaitok_rs::{FtParser, Tokenizer};
//!
//! let mut parser = FtParser::new(Tokenizer::new());
//! parser.scan_begin("สวัสดีค่ะ ยินดีต้อนรับ").unwrap();
//! while let Some(word) = parser.next_token() {
//!     println!("{} ({} chars)", word.text, word.char_len);
//! }
//! parser.scan_end();
//! ```

pub mod char_categories;
pub mod engine;
pub mod error;
pub mod ftparser;
pub mod harness;
pub mod tokenizer;

// Embedded-Python engine (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use char_categories::{get_char_category, is_thai_text, CharCategory, ThaiString};
pub use engine::{default_engine, install_default_engine, SegmentEngine, SpaceEngine};
pub use error::TokenizeError;
pub use ftparser::{parse, AddWordPolicy, FtParser, Word};
pub use harness::{write_report, SAMPLE_TEXTS};
pub use tokenizer::Tokenizer;

#[cfg(feature = "python")]
pub use python::PyThaiEngine;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
