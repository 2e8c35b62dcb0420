//! Paragraph-first passage segmentation.
//!
//! ## The Algorithm
//!
//! ```text
//! 1. Split on blank lines into paragraphs
//! 2. Pack paragraphs greedily, joined by "\n\n", emitting as soon as the
//!    accumulated text lands in min..=max
//! 3. A block that overflows before reaching min is re-packed by sentences
//! 4. A short tail is merged into the previous passage
//! ```
//!
//! The packer never looks ahead, so it does not minimize length variance
//! across passages. What it does guarantee is that every passage ends on a
//! paragraph or sentence boundary and that the output is fully determined by
//! the input.
//!
//! ## Worked Example
//!
//! With the default bounds (500..=1000):
//!
//! ```text
//! Paragraphs: [300] [250] [1400] [600] [120]
//!
//! [300]                  -> accumulate
//! [300]+[250] = 552      -> emit
//! [1400]                 -> too long alone: sentence fallback
//! [600]                  -> emit
//! [120]                  -> short tail: merged into [600] -> 722
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{has_content, is_blank};
use crate::pack::pack;
use crate::sentence::pack_sentences;
use crate::{Passage, PassageBounds, Segmenter};

/// Separator placed between paragraphs packed into one passage.
pub const PARAGRAPH_BREAK: &str = "\n\n";

static PARAGRAPH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("invalid paragraph break regex"));

/// Paragraph-first segmenter with sentence fallback.
///
/// Expects text that has already been through [`crate::normalize`]; it does
/// not normalize again.
///
/// ## Example
///
/// ```rust
/// use quire::{PassageSegmenter, Segmenter};
///
/// let first = "a".repeat(300);
/// let second = "b".repeat(250);
/// let text = format!("{first}\n\n{second}");
///
/// let passages = PassageSegmenter::default().segment(&text);
/// assert_eq!(passages.len(), 1);
/// assert_eq!(passages[0].char_len(), 552);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PassageSegmenter {
    bounds: PassageBounds,
}

impl PassageSegmenter {
    /// Create a segmenter packing to `bounds`.
    #[must_use]
    pub const fn new(bounds: PassageBounds) -> Self {
        Self { bounds }
    }

    /// The bounds this segmenter packs to.
    #[must_use]
    pub const fn bounds(&self) -> &PassageBounds {
        &self.bounds
    }

    /// Segment `text` into plain passage strings.
    ///
    /// Same output as [`Segmenter::segment`] without the [`Passage`] wrapper.
    #[must_use]
    pub fn segment_to_strings(&self, text: &str) -> Vec<String> {
        let bounds = &self.bounds;
        let mut out = Vec::new();

        pack(
            paragraphs(text),
            PARAGRAPH_BREAK,
            bounds,
            &mut out,
            |block, out| {
                tracing::debug!(
                    len = bounds.measure(&block),
                    max = bounds.max_length(),
                    "paragraph block exceeds max length, falling back to sentences"
                );
                pack_sentences(&block, bounds, out);
            },
        );

        out
    }
}

/// Trimmed paragraphs of `text` that have content, in order.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_SPLIT
        .split(text.trim_matches(is_blank))
        .map(|p| p.trim_matches(is_blank))
        .filter(|p| has_content(p))
}

impl Segmenter for PassageSegmenter {
    fn segment(&self, text: &str) -> Vec<Passage> {
        crate::into_passages(self.segment_to_strings(text))
    }

    fn estimate_passages(&self, text_len: usize) -> usize {
        let target = (self.bounds.min_length() + self.bounds.max_length()) / 2;
        (text_len / target.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> PassageSegmenter {
        PassageSegmenter::new(PassageBounds::new(10, 20).unwrap())
    }

    fn texts(passages: &[Passage]) -> Vec<&str> {
        passages.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_paragraphs_split_and_trimmed() {
        let got: Vec<_> = paragraphs("  one \n\n\n two\nlines \n\n\n\n").collect();
        assert_eq!(got, ["one", "two\nlines"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(PassageSegmenter::default().segment("").is_empty());
        assert!(PassageSegmenter::default().segment(" \n\n \t").is_empty());
    }

    #[test]
    fn test_unicode_blank_paragraphs_dropped() {
        let got: Vec<_> = paragraphs("a\n\n\u{3000}\n\n\u{2004}\u{2005}\n\nb").collect();
        assert_eq!(got, ["a", "b"]);
        assert!(PassageSegmenter::default().segment("\u{3000}").is_empty());
        assert!(PassageSegmenter::default().segment("\u{2007}\n\n\u{202F}").is_empty());
    }

    #[test]
    fn test_short_text_single_passage() {
        let passages = PassageSegmenter::default().segment("Just a line.");
        assert_eq!(texts(&passages), ["Just a line."]);
    }

    #[test]
    fn test_paragraphs_joined_with_blank_line() {
        let passages = small().segment("Aaaaa.\n\nBbbbb.\n\nCccccccccc.");
        assert_eq!(texts(&passages), ["Aaaaa.\n\nBbbbb.", "Cccccccccc."]);
    }

    #[test]
    fn test_long_paragraph_falls_back_to_sentences() {
        let passages = small().segment("Aaaaaaaa. Bbbbbbbb. Cccccccc. Dddddddd.");
        assert_eq!(
            texts(&passages),
            ["Aaaaaaaa. Bbbbbbbb.", "Cccccccc. Dddddddd."]
        );
    }

    #[test]
    fn test_short_current_plus_long_paragraph_repacked() {
        // "Hi." is short, adding the next paragraph overflows: both are
        // re-packed by sentences with the paragraph break flattened.
        let passages = small().segment("Hi.\n\nAaaaaaaaaa. Bbbbbbbbbbb.");
        assert_eq!(texts(&passages), ["Hi. Aaaaaaaaaa.", "Bbbbbbbbbbb."]);
    }

    #[test]
    fn test_short_tail_merged_back() {
        let passages = small().segment("Aaaaaaaaaaaa.\n\nBb.");
        assert_eq!(texts(&passages), ["Aaaaaaaaaaaa.\n\nBb."]);
    }

    #[test]
    fn test_oversized_sentence_kept_whole() {
        let long = "x".repeat(50);
        let passages = small().segment(&long);
        assert_eq!(texts(&passages), [long.as_str()]);
    }

    #[test]
    fn test_indices_sequential() {
        let passages = small().segment("Aaaaaaaaaa.\n\nBbbbbbbbbb.\n\nCccccccccc.");
        let indices: Vec<_> = passages.iter().map(|p| p.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_estimate() {
        let segmenter = PassageSegmenter::default();
        assert_eq!(segmenter.bounds().max_length(), 1000);
        assert_eq!(segmenter.estimate_passages(0), 1);
        assert_eq!(segmenter.estimate_passages(7500), 10);
    }
}
