//! Character classification for Thai Unicode characters.
//!
//! This module categorizes each character of an input string (consonant,
//! vowel sign, tone mark, digit, etc.) and provides the Thai-text detection
//! predicate used to route input between the segmentation engine and the
//! whitespace fallback.

/// Character categories used in Thai text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Thai consonant (ก..ฮ)
    Cons,
    /// Leading vowel, written before its consonant (เ แ โ ใ ไ)
    LeadVow,
    /// Following vowel, written after its consonant (ะ า ำ ๅ)
    FollowVow,
    /// Combining vowel sign written above or below (ั ิ ี ึ ื ุ ู)
    CombVow,
    /// Tone mark (่ ้ ๊ ๋)
    ToneMark,
    /// Other combining diacritic (็ ์ ํ ๎ ฺ)
    Diacritic,
    /// Thai digit (๐..๙)
    Digit,
    /// Thai punctuation (ฯ ๆ ๏ ๚ ๛)
    ThaiPunct,
    /// Symbol (฿)
    Symbol,
    /// Transparent characters (spaces, etc.) - ignored in word processing
    Transparent,
    /// Latin character
    Latin,
    /// Other/unknown character
    #[default]
    Other,
}

impl CharCategory {
    /// Check if this category represents a character that can be part of a
    /// Thai word (script characters, as opposed to punctuation or digits)
    pub fn is_word_part(&self) -> bool {
        matches!(
            self,
            CharCategory::Cons
                | CharCategory::LeadVow
                | CharCategory::FollowVow
                | CharCategory::CombVow
                | CharCategory::ToneMark
                | CharCategory::Diacritic
        )
    }

    /// Check if this is a Thai-script character (anything from the Thai block)
    pub fn is_thai(&self) -> bool {
        !matches!(
            self,
            CharCategory::Transparent | CharCategory::Latin | CharCategory::Other
        )
    }
}

/// List of characters that should be treated as transparent (spaces, etc.)
const TRANSPARENT_CHARS: &[char] = &[
    ' ',      // SPACE
    '\t',     // TAB
    '\n',     // NEWLINE
    '\r',     // CARRIAGE RETURN
    '\u{00A0}', // NO-BREAK SPACE
    '\u{1680}', // OGHAM SPACE MARK
    '\u{2000}', // EN QUAD
    '\u{2001}', // EM QUAD
    '\u{2002}', // EN SPACE
    '\u{2003}', // EM SPACE
    '\u{2004}', // THREE-PER-EM SPACE
    '\u{2005}', // FOUR-PER-EM SPACE
    '\u{2006}', // SIX-PER-EM SPACE
    '\u{2007}', // FIGURE SPACE
    '\u{2008}', // PUNCTUATION SPACE
    '\u{2009}', // THIN SPACE
    '\u{200A}', // HAIR SPACE
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{202F}', // NARROW NO-BREAK SPACE
    '\u{205F}', // MEDIUM MATHEMATICAL SPACE
    '\u{3000}', // IDEOGRAPHIC SPACE
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE
];

/// Get the category of a character
///
/// The Thai block (U+0E00 to U+0E7F) is small and fully structured, so the
/// mapping is done with range matches rather than a lookup table.
pub fn get_char_category(c: char) -> CharCategory {
    // Check for transparent (space-like) characters first
    if TRANSPARENT_CHARS.contains(&c) {
        return CharCategory::Transparent;
    }

    match c {
        // Consonants ก..ฮ (the range also carries ฤ and ฦ, which behave
        // like consonants for word-formation purposes)
        '\u{0E01}'..='\u{0E2E}' => CharCategory::Cons,
        // ฯ paiyannoi (abbreviation mark)
        '\u{0E2F}' => CharCategory::ThaiPunct,
        // ะ sara a
        '\u{0E30}' => CharCategory::FollowVow,
        // ั mai han-akat
        '\u{0E31}' => CharCategory::CombVow,
        // า sara aa, ำ sara am
        '\u{0E32}' | '\u{0E33}' => CharCategory::FollowVow,
        // ิ ี ึ ื ุ ู
        '\u{0E34}'..='\u{0E39}' => CharCategory::CombVow,
        // ฺ phinthu
        '\u{0E3A}' => CharCategory::Diacritic,
        // ฿ baht sign
        '\u{0E3F}' => CharCategory::Symbol,
        // เ แ โ ใ ไ
        '\u{0E40}'..='\u{0E44}' => CharCategory::LeadVow,
        // ๅ lakkhangyao
        '\u{0E45}' => CharCategory::FollowVow,
        // ๆ maiyamok (repetition mark)
        '\u{0E46}' => CharCategory::ThaiPunct,
        // ็ maitaikhu
        '\u{0E47}' => CharCategory::Diacritic,
        // ่ ้ ๊ ๋
        '\u{0E48}'..='\u{0E4B}' => CharCategory::ToneMark,
        // ์ thanthakhat, ํ nikhahit, ๎ yamakkan
        '\u{0E4C}'..='\u{0E4E}' => CharCategory::Diacritic,
        // ๏ fongman
        '\u{0E4F}' => CharCategory::ThaiPunct,
        // ๐..๙
        '\u{0E50}'..='\u{0E59}' => CharCategory::Digit,
        // ๚ angkhankhu, ๛ khomut
        '\u{0E5A}' | '\u{0E5B}' => CharCategory::ThaiPunct,
        // Basic Latin letters plus the common Latin extensions
        'a'..='z' | 'A'..='Z' => CharCategory::Latin,
        '\u{00C0}'..='\u{024F}' => CharCategory::Latin,
        _ => CharCategory::Other,
    }
}

/// Check whether a text contains any Thai-script character.
///
/// This is the routing predicate of the fulltext parser: text that contains
/// Thai goes through the segmentation engine, everything else is tokenized by
/// whitespace.
pub fn is_thai_text(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{0E00}'..='\u{0E7F}').contains(&c))
}

/// A string with character category information for each character
#[derive(Debug, Clone)]
pub struct ThaiString {
    /// The original string
    pub string: String,
    /// Category for each character (by index)
    pub categories: Vec<CharCategory>,
}

impl ThaiString {
    /// Create a new ThaiString from a string
    pub fn new(s: &str) -> Self {
        let categories: Vec<CharCategory> = s.chars().map(get_char_category).collect();
        ThaiString {
            string: s.to_string(),
            categories,
        }
    }

    /// Get the length (number of characters)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Get the category at a specific index
    pub fn get_category(&self, idx: usize) -> Option<CharCategory> {
        self.categories.get(idx).copied()
    }

    /// Get a slice of categories
    pub fn get_categories(&self, start: usize, len: usize) -> &[CharCategory] {
        let end = (start + len).min(self.categories.len());
        &self.categories[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_consonants() {
        assert_eq!(get_char_category('ก'), CharCategory::Cons);
        assert_eq!(get_char_category('ท'), CharCategory::Cons);
        assert_eq!(get_char_category('ฮ'), CharCategory::Cons);
    }

    #[test]
    fn test_thai_vowels() {
        assert_eq!(get_char_category('เ'), CharCategory::LeadVow);
        assert_eq!(get_char_category('ไ'), CharCategory::LeadVow);
        assert_eq!(get_char_category('า'), CharCategory::FollowVow);
        assert_eq!(get_char_category('ิ'), CharCategory::CombVow);
        assert_eq!(get_char_category('ุ'), CharCategory::CombVow);
    }

    #[test]
    fn test_tone_marks() {
        assert_eq!(get_char_category('\u{0E48}'), CharCategory::ToneMark); // mai ek
        assert_eq!(get_char_category('\u{0E49}'), CharCategory::ToneMark); // mai tho
    }

    #[test]
    fn test_thai_digits() {
        assert_eq!(get_char_category('๐'), CharCategory::Digit);
        assert_eq!(get_char_category('๙'), CharCategory::Digit);
    }

    #[test]
    fn test_thai_punct_and_symbol() {
        assert_eq!(get_char_category('ๆ'), CharCategory::ThaiPunct);
        assert_eq!(get_char_category('ฯ'), CharCategory::ThaiPunct);
        assert_eq!(get_char_category('฿'), CharCategory::Symbol);
    }

    #[test]
    fn test_space() {
        assert_eq!(get_char_category(' '), CharCategory::Transparent);
        assert_eq!(get_char_category('\t'), CharCategory::Transparent);
    }

    #[test]
    fn test_latin() {
        assert_eq!(get_char_category('a'), CharCategory::Latin);
        assert_eq!(get_char_category('Z'), CharCategory::Latin);
    }

    #[test]
    fn test_is_thai_text() {
        assert!(is_thai_text("ไทย"));
        assert!(is_thai_text("hello ไทย world"));
        assert!(!is_thai_text("hello world"));
        assert!(!is_thai_text(""));
    }

    #[test]
    fn test_thai_string() {
        let ts = ThaiString::new("ไทย");
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.get_category(0), Some(CharCategory::LeadVow)); // ไ
        assert_eq!(ts.get_category(1), Some(CharCategory::Cons)); // ท
        assert_eq!(ts.get_category(2), Some(CharCategory::Cons)); // ย
    }

    #[test]
    fn test_word_part() {
        assert!(CharCategory::Cons.is_word_part());
        assert!(CharCategory::ToneMark.is_word_part());
        assert!(!CharCategory::Digit.is_word_part());
        assert!(!CharCategory::ThaiPunct.is_word_part());
        assert!(!CharCategory::Transparent.is_word_part());
    }
}
