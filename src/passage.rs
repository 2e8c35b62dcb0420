//! The Passage type: one typing exercise cut from a chapter.

use crate::normalize::is_blank;

/// A chunk of chapter text sized for one typing session.
///
/// Passages come out of the segmenter in source order. `index` is zero-based;
/// persistence layers usually want the 1-based [`Passage::position`].
///
/// ```rust
/// use quire::Passage;
///
/// let passage = Passage::new("It was a bright cold day in April.", 0);
/// assert_eq!(passage.position(), 1);
/// assert_eq!(passage.word_count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// The passage text.
    pub text: String,
    /// Zero-based index of this passage in its chapter.
    pub index: usize,
}

impl Passage {
    /// Create a new passage.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// One-based position of this passage in its chapter.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index + 1
    }

    /// Length in Unicode scalar values.
    ///
    /// Always scalar values, whatever [`crate::LengthUnit`] the segmenter
    /// packed with. Use [`crate::PassageBounds::measure`] to get the length
    /// the bounds were checked against.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-delimited words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// Whether the passage is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the passage, keeping only its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Passage {{ position: {}, chars: {}, words: {} }}",
            self.position(),
            self.char_len(),
            self.word_count()
        )
    }
}

/// Count tokens delimited by ASCII whitespace.
///
/// Unicode spaces such as U+3000 are part of a word, the same way
/// [`crate::normalize`] keeps them as content.
///
/// ```rust
/// assert_eq!(quire::word_count("  two\n\nwords "), 2);
/// assert_eq!(quire::word_count("a\u{3000}b"), 1);
/// assert_eq!(quire::word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(is_blank).filter(|word| !word.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_one_based() {
        assert_eq!(Passage::new("x", 0).position(), 1);
        assert_eq!(Passage::new("x", 4).position(), 5);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        let passage = Passage::new("na\u{ef}ve", 0);
        assert_eq!(passage.char_len(), 5);
        assert_eq!(passage.text.len(), 6);
    }

    #[test]
    fn test_char_len_ignores_grapheme_unit() {
        let bounds = crate::PassageBounds::default().with_unit(crate::LengthUnit::Graphemes);
        let passage = Passage::new("e\u{301}e\u{301}", 0);
        assert_eq!(passage.char_len(), 4);
        assert_eq!(bounds.measure(&passage.text), 2);
    }

    #[test]
    fn test_word_count_splits_on_ascii_whitespace_only() {
        assert_eq!(word_count("a\u{3000}b c"), 2);
        assert_eq!(word_count("one\x0Btwo\x0Cthree"), 3);
        assert_eq!(word_count("\u{2007}"), 1);
    }

    #[test]
    fn test_word_count_across_paragraphs() {
        let passage = Passage::new("One two.\n\nThree\tfour five.", 0);
        assert_eq!(passage.word_count(), 5);
    }

    #[test]
    fn test_into_text() {
        let passage = Passage::new("kept", 0);
        assert!(!passage.is_empty());
        assert_eq!(passage.into_text(), "kept");
    }

    #[test]
    fn test_display() {
        let passage = Passage::new("a b", 2);
        assert_eq!(
            passage.to_string(),
            "Passage { position: 3, chars: 3, words: 2 }"
        );
    }
}
