//! Chapter import: normalize, then segment.
//!
//! This is the whole contract with the storage side: a titled chapter goes
//! in, an ordered list of passages (with positions and word counts) comes
//! out. Persisting them is the caller's job.

use crate::{normalize, Passage, PassageBounds, PassageSegmenter, Segmenter};

/// One chapter of raw book text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter title, carried through unchanged.
    pub title: String,
    /// Raw chapter text, paragraphs separated by blank lines.
    pub text: String,
}

impl Chapter {
    /// Create a new chapter.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A chapter after segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedChapter {
    /// Chapter title.
    pub title: String,
    /// One-based position of the chapter in its book.
    pub position: usize,
    /// Passages in reading order.
    pub passages: Vec<Passage>,
}

impl ImportedChapter {
    /// Whether segmentation produced nothing to import.
    ///
    /// Blank chapters are valid input; callers decide what to do with them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Total words across all passages.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.passages.iter().map(Passage::word_count).sum()
    }
}

/// Runs the normalize → segment pipeline for chapters and books.
///
/// ```rust
/// use quire::{Chapter, ChapterImporter};
///
/// let importer = ChapterImporter::default();
/// let chapter = Chapter::new("One", "\u{201C}Hello,\u{201D} she said.");
/// let imported = importer.import(&chapter);
///
/// assert_eq!(imported.position, 1);
/// assert_eq!(imported.passages[0].text, "\"Hello,\" she said.");
/// assert_eq!(imported.word_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChapterImporter {
    segmenter: PassageSegmenter,
}

impl ChapterImporter {
    /// Create an importer packing passages to `bounds`.
    #[must_use]
    pub const fn new(bounds: PassageBounds) -> Self {
        Self {
            segmenter: PassageSegmenter::new(bounds),
        }
    }

    /// Import a single chapter as the first chapter of its book.
    #[must_use]
    pub fn import(&self, chapter: &Chapter) -> ImportedChapter {
        self.import_at(chapter, 1)
    }

    /// Import chapters in order, numbering them from 1.
    ///
    /// Blank chapters are kept (with no passages) so positions line up with
    /// the input.
    #[must_use]
    pub fn import_book(&self, chapters: &[Chapter]) -> Vec<ImportedChapter> {
        let imported: Vec<_> = chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| self.import_at(chapter, i + 1))
            .collect();

        tracing::info!(
            chapters = imported.len(),
            passages = imported.iter().map(|c| c.passages.len()).sum::<usize>(),
            words = imported.iter().map(ImportedChapter::word_count).sum::<usize>(),
            "imported book"
        );

        imported
    }

    fn import_at(&self, chapter: &Chapter, position: usize) -> ImportedChapter {
        let normalized = normalize(&chapter.text);
        let passages = self.segmenter.segment(&normalized);

        let imported = ImportedChapter {
            title: chapter.title.clone(),
            position,
            passages,
        };

        if imported.is_empty() {
            tracing::warn!(title = %chapter.title, position, "chapter has no text to import");
        } else {
            tracing::info!(
                title = %chapter.title,
                position,
                passages = imported.passages.len(),
                words = imported.word_count(),
                "imported chapter"
            );
        }

        imported
    }
}

/// Import chapters with the default bounds.
#[must_use]
pub fn import_book(chapters: &[Chapter]) -> Vec<ImportedChapter> {
    ChapterImporter::default().import_book(chapters)
}
