//! Sentence-level fallback segmentation.
//!
//! When a paragraph (or a short run of paragraphs plus the next one) is too
//! long for a single passage, the segmenter gives up on paragraph structure
//! and packs sentences instead.
//!
//! ## Finding Sentences
//!
//! Boundaries are found by punctuation alone:
//!
//! ```text
//! [.!?]["']?\s+
//!
//! "He left. \"Why?\" she asked!  Then silence."
//!  ^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^
//! ```
//!
//! The terminal punctuation, an optional closing quote, and the whitespace
//! after them stay attached to the sentence they end, then each sentence is
//! trimmed. Abbreviations like "Dr." do produce a split; packing sentences
//! back together hides that in practice.
//!
//! ## Packing
//!
//! Sentences are packed with the same greedy rules as paragraphs, joined by a
//! single space. A sentence that is longer than the maximum on its own is
//! emitted whole: nothing is ever split below sentence granularity.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{has_content, is_blank};
use crate::pack::pack;
use crate::{Passage, PassageBounds, Segmenter};

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]["']?[ \t\n\r\x0B\x0C]+"#).expect("invalid sentence boundary regex")
});

static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("invalid newline regex"));

/// Split text into sentences on terminal punctuation.
///
/// Newlines are flattened to spaces first. Blank sentences are dropped.
///
/// ```rust
/// use quire::split_sentences;
///
/// let sentences = split_sentences("One. \"Two?\" Three!\nFour");
/// assert_eq!(sentences, ["One.", "\"Two?\"", "Three!", "Four"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let flat = NEWLINES.replace_all(text, " ");

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(&flat) {
        push_trimmed(&mut sentences, &flat[start..boundary.end()]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &flat[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim_matches(is_blank);
    if has_content(sentence) {
        sentences.push(sentence.to_string());
    }
}

/// Pack the sentences of `block` into `out`.
///
/// `out` is shared with the caller, so a short final remainder can merge into
/// a passage the caller emitted earlier.
pub(crate) fn pack_sentences(block: &str, bounds: &PassageBounds, out: &mut Vec<String>) {
    let sentences = split_sentences(block);
    pack(
        sentences.iter().map(String::as_str),
        " ",
        bounds,
        out,
        |candidate, out| {
            tracing::debug!(
                len = bounds.measure(&candidate),
                max = bounds.max_length(),
                "sentence exceeds max length, emitting oversized passage"
            );
            out.push(candidate);
        },
    );
}

/// Sentence-packing segmenter.
///
/// Ignores paragraph structure entirely; useful on its own for text without
/// blank-line paragraph breaks. [`crate::PassageSegmenter`] uses the same
/// packing as its fallback.
///
/// ## Example
///
/// ```rust
/// use quire::{PassageBounds, Segmenter, SentenceSegmenter};
///
/// let segmenter = SentenceSegmenter::new(PassageBounds::new(40, 60).unwrap());
/// let passages = segmenter.segment("First sentence here. Second one too. Third.");
///
/// assert_eq!(passages.len(), 1);
/// assert_eq!(passages[0].text, "First sentence here. Second one too. Third.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    bounds: PassageBounds,
}

impl SentenceSegmenter {
    /// Create a new sentence segmenter.
    #[must_use]
    pub const fn new(bounds: PassageBounds) -> Self {
        Self { bounds }
    }

    /// The bounds this segmenter packs to.
    #[must_use]
    pub const fn bounds(&self) -> &PassageBounds {
        &self.bounds
    }
}

impl Segmenter for SentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<Passage> {
        let mut out = Vec::new();
        pack_sentences(text, &self.bounds, &mut out);
        crate::into_passages(out)
    }

    fn estimate_passages(&self, text_len: usize) -> usize {
        (text_len / self.bounds.min_length()).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split_sentences("Hello world. How are you? I am fine!"),
            ["Hello world.", "How are you?", "I am fine!"]
        );
    }

    #[test]
    fn test_closing_quote_stays_attached() {
        assert_eq!(
            split_sentences("\"Stop!\" he cried. 'Now.' Done"),
            ["\"Stop!\"", "he cried.", "'Now.'", "Done"]
        );
    }

    #[test]
    fn test_requires_whitespace_after_punctuation() {
        assert_eq!(split_sentences("3.14 is pi.Really"), ["3.14 is pi.Really"]);
        assert_eq!(split_sentences("Wait...what? Yes."), ["Wait...what?", "Yes."]);
    }

    #[test]
    fn test_abbreviations_split() {
        assert_eq!(split_sentences("Dr. Smith left."), ["Dr.", "Smith left."]);
    }

    #[test]
    fn test_newlines_flattened() {
        assert_eq!(
            split_sentences("A line\nwrapped. Next\n\npara."),
            ["A line wrapped.", "Next para."]
        );
    }

    #[test]
    fn test_no_punctuation_single_sentence() {
        assert_eq!(split_sentences("no ending at all"), ["no ending at all"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n\n ").is_empty());
        assert!(split_sentences("\u{3000}").is_empty());
        assert_eq!(split_sentences("One. \u{2005}"), ["One."]);
        assert!(SentenceSegmenter::default().segment("\u{205F}\u{1680}").is_empty());
    }

    #[test]
    fn test_oversized_sentence_emitted_whole() {
        let bounds = PassageBounds::new(10, 20).unwrap();
        let long = "This sentence is far longer than twenty characters.";
        let segmenter = SentenceSegmenter::new(bounds);
        let passages = segmenter.segment(&format!("Short. {long}"));

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, format!("Short. {long}"));
    }

    #[test]
    fn test_packs_to_bounds() {
        let bounds = PassageBounds::new(10, 20).unwrap();
        let segmenter = SentenceSegmenter::new(bounds);
        let passages = segmenter.segment("Aaaa. Bbbb. Cccc. Dddd. Eeee. Ffff.");

        let texts: Vec<_> = passages.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["Aaaa. Bbbb.", "Cccc. Dddd.", "Eeee. Ffff."]);
        assert_eq!(passages[2].index, 2);
    }
}
