//! Error types for quire.

/// Errors that can occur while configuring or feeding the segmenter.
///
/// Segmentation itself never fails; these only surface at the edges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid passage length (must be > 0).
    #[error("invalid passage length: {0} (must be > 0)")]
    InvalidLength(usize),

    /// Minimum passage length is above the maximum.
    #[error("min length {min} exceeds max length {max}")]
    MinExceedsMax {
        /// The requested minimum.
        min: usize,
        /// The requested maximum.
        max: usize,
    },

    /// Input bytes are not valid UTF-8.
    #[error("chapter text is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type for quire operations.
pub type Result<T> = std::result::Result<T, Error>;
