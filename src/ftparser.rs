//! Streaming fulltext parser.
//!
//! This is the surface the original plugin exposed to its host: begin a scan
//! over a piece of fulltext, pull tokens one at a time, end the scan. Thai
//! text is segmented by the tokenizer's engine; non-Thai text is tokenized by
//! whitespace. An engine failure degrades to whitespace tokenization instead
//! of failing the scan.

use serde::{Deserialize, Serialize};

use crate::char_categories::is_thai_text;
use crate::engine::{SegmentEngine, SpaceEngine};
use crate::error::TokenizeError;
use crate::tokenizer::Tokenizer;

/// A single token produced by a fulltext scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The token text
    pub text: String,
    /// Length of the token in bytes
    pub byte_len: usize,
    /// Length of the token in characters
    pub char_len: usize,
    /// Token frequency within the document (always 1, per the plugin contract)
    pub freq: u32,
}

impl Word {
    /// Build a word from its text, computing both length fields
    pub fn from_text(text: String) -> Self {
        let byte_len = text.len();
        let char_len = text.chars().count();
        Word {
            text,
            byte_len,
            char_len,
            freq: 1,
        }
    }
}

/// Indexing policy advertised to the host, one flag per plugin add-word bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddWordPolicy {
    /// Honor the host's minimum/maximum word length limits
    pub respect_min_max_len: bool,
    /// Apply the host's stopword list
    pub apply_stopwords: bool,
    /// Lowercase tokens before indexing
    pub casedown: bool,
    /// Merge duplicate tokens and accumulate their frequency
    pub group_by_word: bool,
}

impl Default for AddWordPolicy {
    fn default() -> Self {
        AddWordPolicy {
            respect_min_max_len: true,
            apply_stopwords: true,
            casedown: true,
            group_by_word: true,
        }
    }
}

/// A fulltext parser that scans one document at a time.
///
/// The parser owns a [`Tokenizer`] and may be reused for any number of
/// documents, but only one scan can be in progress at a time: starting a
/// second scan before [`scan_end`](FtParser::scan_end) is an error, matching
/// the init-twice check of the original plugin.
pub struct FtParser {
    tokenizer: Tokenizer,
    words: Vec<Word>,
    cursor: usize,
    scanning: bool,
}

impl FtParser {
    /// Create a parser backed by the given tokenizer
    pub fn new(tokenizer: Tokenizer) -> Self {
        FtParser {
            tokenizer,
            words: Vec::new(),
            cursor: 0,
            scanning: false,
        }
    }

    /// Begin scanning a document.
    ///
    /// Tokenization happens eagerly here; [`next_token`](FtParser::next_token)
    /// then iterates the result in order. Thai text goes through the
    /// segmentation engine, non-Thai text through whitespace splitting. If the
    /// engine fails, the scan degrades to whitespace tokens and logs a
    /// warning rather than failing.
    pub fn scan_begin(&mut self, text: &str) -> Result<(), TokenizeError> {
        if self.scanning {
            log::warn!("scan_begin called while a scan is in progress");
            return Err(TokenizeError::InitTwice);
        }
        if text.is_empty() {
            return Err(TokenizeError::InvalidArgument("empty fulltext"));
        }

        let tokens = if is_thai_text(text) {
            log::debug!("thai text detected, segmenting with engine '{}'", self.tokenizer.engine_name());
            match self.tokenizer.split(text) {
                Ok(tokens) => tokens,
                Err(e) => {
                    log::warn!("engine failed ({e}), falling back to whitespace tokenization");
                    SpaceEngine.split(text)?
                }
            }
        } else {
            log::debug!("non-thai text, tokenizing by whitespace");
            SpaceEngine.split(text)?
        };

        self.words = tokens.into_iter().map(Word::from_text).collect();
        self.cursor = 0;
        self.scanning = true;
        log::debug!("scan started, {} token(s)", self.words.len());
        Ok(())
    }

    /// Pull the next token of the current scan, in order.
    ///
    /// Returns `None` once the scan is exhausted or if no scan is in
    /// progress.
    pub fn next_token(&mut self) -> Option<Word> {
        if !self.scanning {
            return None;
        }
        let word = self.words.get(self.cursor).cloned();
        if word.is_some() {
            self.cursor += 1;
        }
        word
    }

    /// Number of tokens remaining in the current scan
    pub fn remaining(&self) -> usize {
        if self.scanning {
            self.words.len() - self.cursor
        } else {
            0
        }
    }

    /// End the current scan and reset all state, allowing a new scan
    pub fn scan_end(&mut self) {
        self.words.clear();
        self.cursor = 0;
        self.scanning = false;
    }

    /// The indexing policy this parser advertises
    pub fn add_word_policy(&self) -> AddWordPolicy {
        AddWordPolicy::default()
    }
}

/// Scan a whole document in one call, returning all tokens
pub fn parse(tokenizer: Tokenizer, text: &str) -> Result<Vec<Word>, TokenizeError> {
    let mut parser = FtParser::new(tokenizer);
    parser.scan_begin(text)?;
    let mut words = Vec::with_capacity(parser.remaining());
    while let Some(word) = parser.next_token() {
        words.push(word);
    }
    parser.scan_end();
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SpaceEngine;
    use std::sync::Arc;

    struct FailingEngine;

    impl SegmentEngine for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }

        fn split(&self, _text: &str) -> Result<Vec<String>, TokenizeError> {
            Err(TokenizeError::Engine {
                engine: "failing".to_string(),
                reason: "unavailable".to_string(),
            })
        }
    }

    fn space_parser() -> FtParser {
        FtParser::new(Tokenizer::with_engine(Arc::new(SpaceEngine)))
    }

    #[test]
    fn test_scan_iterates_in_order() {
        let mut parser = space_parser();
        parser.scan_begin("hello brave world").unwrap();

        assert_eq!(parser.next_token().unwrap().text, "hello");
        assert_eq!(parser.next_token().unwrap().text, "brave");
        assert_eq!(parser.next_token().unwrap().text, "world");
        assert!(parser.next_token().is_none());
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let mut parser = space_parser();
        assert!(matches!(
            parser.scan_begin(""),
            Err(TokenizeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_double_scan_begin() {
        let mut parser = space_parser();
        parser.scan_begin("a b").unwrap();
        assert!(matches!(
            parser.scan_begin("c d"),
            Err(TokenizeError::InitTwice)
        ));

        // After scan_end a new scan is legal again
        parser.scan_end();
        parser.scan_begin("c d").unwrap();
        assert_eq!(parser.next_token().unwrap().text, "c");
    }

    #[test]
    fn test_next_token_without_scan() {
        let mut parser = space_parser();
        assert!(parser.next_token().is_none());
    }

    #[test]
    fn test_word_lengths() {
        let mut parser = space_parser();
        parser.scan_begin("ไทย ok").unwrap();

        let word = parser.next_token().unwrap();
        assert_eq!(word.text, "ไทย");
        assert_eq!(word.byte_len, 9); // 3 chars x 3 UTF-8 bytes
        assert_eq!(word.char_len, 3);
        assert_eq!(word.freq, 1);

        let word = parser.next_token().unwrap();
        assert_eq!(word.byte_len, 2);
        assert_eq!(word.char_len, 2);
    }

    #[test]
    fn test_engine_failure_falls_back_to_whitespace() {
        let tokenizer = Tokenizer::with_engine(Arc::new(FailingEngine));
        let mut parser = FtParser::new(tokenizer);

        // Thai input routes to the failing engine, then degrades
        parser.scan_begin("สวัสดีค่ะ ยินดี").unwrap();
        assert_eq!(parser.remaining(), 2);
        assert_eq!(parser.next_token().unwrap().text, "สวัสดีค่ะ");
    }

    #[test]
    fn test_non_thai_never_touches_engine() {
        // The failing engine would error, so reaching tokens proves routing
        let tokenizer = Tokenizer::with_engine(Arc::new(FailingEngine));
        let words = parse(tokenizer, "plain ascii words").unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_parse_convenience() {
        let words = parse(
            Tokenizer::with_engine(Arc::new(SpaceEngine)),
            "ตลาดน้ำ สงกรานต์",
        )
        .unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "ตลาดน้ำ");
        assert_eq!(words[1].text, "สงกรานต์");
    }

    #[test]
    fn test_add_word_policy() {
        let parser = space_parser();
        let policy = parser.add_word_policy();
        assert!(policy.respect_min_max_len);
        assert!(policy.apply_stopwords);
        assert!(policy.casedown);
        assert!(policy.group_by_word);
    }

    #[test]
    fn test_word_serializes() {
        let word = Word::from_text("ไทย".to_string());
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }
}
