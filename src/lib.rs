//! # quire
//!
//! Split book chapters into passages sized for typing practice.
//!
//! ## The Problem
//!
//! A typing exercise wants a few hundred words of real prose: long enough to
//! get into a rhythm, short enough to finish. Book chapters are thousands of
//! words, full of curly quotes and em-dashes nobody can type, and split into
//! paragraphs of wildly different sizes.
//!
//! Cutting every N characters would break sentences mid-thought. Cutting at
//! every paragraph would produce one-line passages next to page-long ones.
//!
//! ## The Pipeline
//!
//! ```text
//! raw chapter ──> normalize ──> segment ──> [passage, passage, ...]
//!
//! normalize: “smart” punctuation → ASCII, whitespace tidied
//! segment:   paragraphs packed into min..=max characters,
//!            falling back to sentences when a block is too long
//! ```
//!
//! ### Normalization
//!
//! Curly quotes, dashes, ellipses, special spaces and a handful of symbols
//! become their ASCII equivalents (see [`REPLACEMENTS`]). Runs of spaces
//! collapse, lines are trimmed, and blank-line runs shrink to one blank line.
//!
//! ### Segmentation
//!
//! Paragraphs are accumulated until the running text lands between the
//! minimum and maximum length (500 and 1000 characters by default), then
//! emitted. A block that jumps past the maximum before reaching the minimum
//! is re-packed sentence by sentence. A short tail is merged into the
//! passage before it.
//!
//! Sentences are never split. A single sentence longer than the maximum
//! becomes an oversized passage of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use quire::{normalize, segment};
//!
//! let raw = "\u{201C}It was the best of times\u{2026}\u{201D}\n\n\n\nIt was the worst.";
//! let text = normalize(raw);
//! assert_eq!(text, "\"It was the best of times...\"\n\nIt was the worst.");
//!
//! // Too short for two passages: one passage, paragraphs intact
//! let passages = segment(&text);
//! assert_eq!(passages, [text.clone()]);
//! ```
//!
//! ## Custom Bounds
//!
//! ```rust
//! use quire::{PassageBounds, PassageSegmenter, Segmenter};
//!
//! let bounds = PassageBounds::new(200, 400)?;
//! let segmenter = PassageSegmenter::new(bounds);
//! let passages = segmenter.segment("A short chapter.");
//! assert_eq!(passages.len(), 1);
//! # Ok::<(), quire::Error>(())
//! ```
//!
//! ## Importing Chapters
//!
//! [`ChapterImporter`] runs both steps for titled chapters and whole books
//! and reports word counts. An empty result is valid ("nothing to import");
//! check [`ImportedChapter::is_empty`].
//!
//! ## Concurrency
//!
//! Everything here is a pure function of its input. Segmenters are
//! `Send + Sync` and can be shared freely across threads.

mod bounds;
mod chapter;
mod error;
mod normalize;
mod pack;
mod passage;
mod segment;
mod sentence;

pub use bounds::{LengthUnit, PassageBounds, MAX_LENGTH, MIN_LENGTH};
pub use chapter::{import_book, Chapter, ChapterImporter, ImportedChapter};
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_bytes, REPLACEMENTS};
pub use passage::{word_count, Passage};
pub use segment::{PassageSegmenter, PARAGRAPH_BREAK};
pub use sentence::{split_sentences, SentenceSegmenter};

/// A passage segmentation strategy.
///
/// ```rust
/// use quire::{PassageSegmenter, Segmenter, SentenceSegmenter};
///
/// fn count(segmenter: &dyn Segmenter, text: &str) -> usize {
///     segmenter.segment(text).len()
/// }
///
/// let text = "One paragraph.\n\nAnother paragraph.";
/// assert_eq!(count(&PassageSegmenter::default(), text), 1);
/// assert_eq!(count(&SentenceSegmenter::default(), text), 1);
/// ```
pub trait Segmenter: Send + Sync {
    /// Split normalized text into passages, in order.
    ///
    /// Blank input yields no passages. Never fails.
    fn segment(&self, text: &str) -> Vec<Passage>;

    /// Estimate the number of passages for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_passages(&self, text_len: usize) -> usize {
        (text_len / MIN_LENGTH).max(1)
    }
}

/// Segment normalized text with the default bounds.
///
/// ```rust
/// assert!(quire::segment("").is_empty());
/// assert_eq!(quire::segment("Hello."), ["Hello."]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    PassageSegmenter::default().segment_to_strings(text)
}

fn into_passages(texts: Vec<String>) -> Vec<Passage> {
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Passage::new(text, index))
        .collect()
}
