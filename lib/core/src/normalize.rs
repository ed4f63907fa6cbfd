//! Text normalisation for bag-of-words scoring
//!
//! Turns a raw free-text query into the same kind of token sequence the
//! catalog's `content_processed` column was built from:
//!
//! 1. lowercase
//! 2. strip every character that is neither a word character nor whitespace
//! 3. split on whitespace
//! 4. drop purely numeric tokens and the fixed punctuation/emoji set
//! 5. drop stop words, when a stop-word list is supplied

use ahash::AHashSet;

/// Tokens that never carry meaning for the topic model
pub const SPECIAL_TOKENS: &[&str] = &[
    "", " ", ",", ".", "...", "-", ":", ";", "?", "%", "(", ")", "+", "/", "'", "&",
    "⭐", "💢", "🏘", "☎", "📖", "🌱", "❤", "📞", "🎯", "💥", "⛔",
];

/// A set of words removed from queries before scoring
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse a stop-word file: one word per line, `#` starts a comment line
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_numeric_token(token: &str) -> bool {
    token.chars().all(char::is_numeric)
}

/// Normalise raw text into scoring tokens
///
/// An input that normalises to nothing yields an empty vector; that is a
/// valid query, not an error.
pub fn normalize(text: &str, stop_words: Option<&StopWords>) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !is_numeric_token(token))
        .filter(|token| !SPECIAL_TOKENS.contains(token))
        .filter(|token| stop_words.map_or(true, |sw| !sw.contains(token)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mixed_query() {
        let stop_words = StopWords::new(["off"]);
        let tokens = normalize("Great deal!!! 50% off šample", Some(&stop_words));
        assert_eq!(tokens, vec!["great", "deal", "šample"]);
    }

    #[test]
    fn test_normalize_vietnamese() {
        let tokens = normalize("Áo Thun NAM, cổ tròn (size L)", None);
        assert_eq!(tokens, vec!["áo", "thun", "nam", "cổ", "tròn", "size", "l"]);
    }

    #[test]
    fn test_numeric_tokens_dropped_but_mixed_kept() {
        let tokens = normalize("iphone 15 128gb 2024", None);
        assert_eq!(tokens, vec!["iphone", "128gb"]);
    }

    #[test]
    fn test_emoji_and_punctuation_removed() {
        let tokens = normalize("⭐⭐ giảm giá 💥 ... - ;", None);
        assert_eq!(tokens, vec!["giảm", "giá"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("", None).is_empty());
        assert!(normalize("  !!! 100 % ", None).is_empty());
    }

    #[test]
    fn test_normalize_is_pure() {
        let first = normalize("Sữa rửa mặt", None);
        let second = normalize("Sữa rửa mặt", None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stop_words_parse() {
        let sw = StopWords::parse("# vietnamese\nVà\n\n  của  \n");
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("và"));
        assert!(sw.contains("của"));
        assert!(!sw.contains("# vietnamese"));
    }
}
