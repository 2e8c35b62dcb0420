//! Passage length bounds.
//!
//! ## Why Two Limits?
//!
//! A typing passage has to be long enough to be worth a session and short
//! enough to finish in one sitting:
//!
//! ```text
//! min_length = 500, max_length = 1000
//!
//!   "Call me Ishmael."                      -> too short, keep packing
//!   [~700 chars, two paragraphs]            -> in range, emit
//!   [~1400 chars, one paragraph]            -> too long, fall back to sentences
//! ```
//!
//! The segmenter asks [`PassageBounds::fits`] about every candidate and acts
//! on the answer. Both limits are inclusive.
//!
//! ## Measuring Length
//!
//! Lengths are counted in Unicode scalar values by default. Text that is
//! heavy in combining marks can opt into grapheme clusters instead, which is
//! closer to what a reader perceives as one character.

use std::cmp::Ordering;

use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result};

/// Default minimum passage length, in characters.
pub const MIN_LENGTH: usize = 500;

/// Default maximum passage length, in characters.
pub const MAX_LENGTH: usize = 1000;

/// How passage length is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthUnit {
    /// Unicode scalar values (`char`s).
    #[default]
    Chars,
    /// Extended grapheme clusters (UAX #29).
    Graphemes,
}

impl LengthUnit {
    /// Length of `text` in this unit.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Graphemes => text.graphemes(true).count(),
        }
    }
}

/// Minimum and maximum acceptable passage length.
///
/// # Examples
///
/// ```rust
/// use quire::PassageBounds;
///
/// let bounds = PassageBounds::default();
/// assert_eq!(bounds.min_length(), 500);
/// assert_eq!(bounds.max_length(), 1000);
///
/// let bounds = PassageBounds::new(200, 400).unwrap();
/// assert_eq!(bounds.max_length(), 400);
///
/// // Range syntax for bounds known to be valid
/// let bounds = PassageBounds::from(300..=600);
/// assert_eq!(bounds.min_length(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBounds", into = "RawBounds"))]
pub struct PassageBounds {
    min_length: usize,
    max_length: usize,
    unit: LengthUnit,
}

impl PassageBounds {
    /// Create bounds, counting length in characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `min_length == 0` and
    /// [`Error::MinExceedsMax`] if `min_length > max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(Error::InvalidLength(min_length));
        }
        if min_length > max_length {
            return Err(Error::MinExceedsMax {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
            unit: LengthUnit::Chars,
        })
    }

    /// Count length in `unit` instead of characters.
    #[must_use]
    pub const fn with_unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }

    /// The smallest acceptable passage length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// The largest acceptable passage length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// The unit lengths are counted in.
    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Length of `text` in this configuration's unit.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        self.unit.measure(text)
    }

    /// Where a length falls relative to the bounds.
    ///
    /// Returns:
    /// - `Ordering::Less`: below `min_length`, keep accumulating
    /// - `Ordering::Equal`: within `min_length..=max_length`, emit
    /// - `Ordering::Greater`: above `max_length`, must break earlier
    #[must_use]
    pub fn fits(&self, len: usize) -> Ordering {
        if len < self.min_length {
            Ordering::Less
        } else if len > self.max_length {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Default for PassageBounds {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            unit: LengthUnit::Chars,
        }
    }
}

impl From<std::ops::RangeInclusive<usize>> for PassageBounds {
    /// Build bounds from `min..=max`.
    ///
    /// A zero start is raised to 1 and an end below the start is raised to
    /// the start, so the result always satisfies the bounds invariant.
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        let min_length = (*range.start()).max(1);
        Self {
            min_length,
            max_length: (*range.end()).max(min_length),
            unit: LengthUnit::Chars,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawBounds {
    #[serde(default = "default_min")]
    min_length: usize,
    #[serde(default = "default_max")]
    max_length: usize,
    #[serde(default)]
    unit: LengthUnit,
}

#[cfg(feature = "serde")]
const fn default_min() -> usize {
    MIN_LENGTH
}

#[cfg(feature = "serde")]
const fn default_max() -> usize {
    MAX_LENGTH
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for PassageBounds {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Ok(Self::new(raw.min_length, raw.max_length)?.with_unit(raw.unit))
    }
}

#[cfg(feature = "serde")]
impl From<PassageBounds> for RawBounds {
    fn from(bounds: PassageBounds) -> Self {
        Self {
            min_length: bounds.min_length,
            max_length: bounds.max_length,
            unit: bounds.unit,
        }
    }
}
