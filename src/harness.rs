//! Smoke-test report over the six reference samples.
//!
//! Reproduces the original acceptance script: for each fixed sample string,
//! call `split` once and print the text, the token list and the token count,
//! as one numbered block per sample between fixed-width separators.

use std::io::Write;

use crate::error::TokenizeError;
use crate::tokenizer::Tokenizer;
use crate::VERSION;

/// The six reference sample strings, in report order
pub const SAMPLE_TEXTS: [&str; 6] = [
    "อาหารไทยเป็นที่นิยมมากในโลก",
    "ไทย",
    "ตลาดน้ำ",
    "สงกรานต์",
    "เพลงลูกทุ่ง",
    "สวัสดีค่ะ ยินดีต้อนรับสู่เว็บไซต์ของเรา",
];

/// Write the full smoke-test report for all six samples.
///
/// Samples are processed strictly in order, one `split` call each, and each
/// block is written before the next sample is tokenized. Engine failures
/// propagate unmodified; no retry or translation happens here.
pub fn write_report<W: Write>(tokenizer: &Tokenizer, out: &mut W) -> Result<(), TokenizeError> {
    writeln!(
        out,
        "Testing thaitok-rs {} with engine '{}'",
        VERSION,
        tokenizer.engine_name()
    )?;
    writeln!(out, "{}", "=".repeat(60))?;

    for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
        let tokens = tokenizer.split(text)?;
        writeln!(out, "{}. Text: '{}'", i + 1, text)?;
        writeln!(out, "   Tokens: {:?}", tokens)?;
        writeln!(out, "   Token count: {}", tokens.len())?;
        writeln!(out, "{}", "-".repeat(50))?;
    }

    Ok(())
}
