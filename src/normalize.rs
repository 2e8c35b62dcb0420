//! Typographic normalization.
//!
//! Book text arrives full of "smart" punctuation that nobody can type on a
//! plain keyboard:
//!
//! ```text
//! “It’s 20° outside…” — she said
//!                  ↓
//! "It's 20 degrees outside..." -- she said
//! ```
//!
//! [`normalize`] maps every character in [`REPLACEMENTS`] to its ASCII
//! stand-in, then tidies whitespace so the segmenter can rely on blank lines
//! being the only paragraph marker.
//!
//! ## Steps
//!
//! 1. Substitute characters from [`REPLACEMENTS`]
//! 2. Collapse runs of spaces into one space (newlines untouched)
//! 3. Strip whitespace from both ends of every line
//! 4. Collapse three or more newlines into one blank line
//! 5. Trim the whole text
//!
//! Lines are stripped before newlines are collapsed, so whitespace-only lines
//! cannot leave a double blank line behind. That makes the whole function
//! idempotent: `normalize(&normalize(x)) == normalize(x)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("invalid space regex"));

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("invalid newline regex"));

/// Character substitutions applied by [`normalize`].
///
/// No replacement string contains a character that is itself a key, so the
/// order of application does not matter.
pub const REPLACEMENTS: &[(char, &str)] = &[
    // Quotes
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', "'"),
    ('\u{201E}', "\""),
    // Dashes
    ('\u{2014}', "--"),
    ('\u{2013}', "-"),
    ('\u{2012}', "-"),
    ('\u{2015}', "--"),
    // Ellipsis
    ('\u{2026}', "..."),
    // Spaces
    ('\u{00A0}', " "),
    ('\u{2003}', " "),
    ('\u{2002}', " "),
    ('\u{2009}', " "),
    ('\u{200A}', " "),
    ('\u{200B}', ""),
    // Bullets and guillemets
    ('\u{2022}', "-"),
    ('\u{2023}', ">"),
    ('\u{2043}', "-"),
    ('\u{00AB}', "<<"),
    ('\u{00BB}', ">>"),
    ('\u{2039}', "<"),
    ('\u{203A}', ">"),
    // Legal marks
    ('\u{00A9}', "(c)"),
    ('\u{00AE}', "(R)"),
    ('\u{2122}', "(TM)"),
    ('\u{2120}', "(SM)"),
    // Section and paragraph marks
    ('\u{00A7}', "S."),
    ('\u{00B6}', "P."),
    // Currency
    ('\u{00A4}', "$"),
    ('\u{00A5}', "Y"),
    ('\u{00A3}', "L"),
    ('\u{20AC}', "E"),
    // Math
    ('\u{00B0}', " degrees"),
    ('\u{00B1}', "+/-"),
    ('\u{00D7}', "x"),
    ('\u{00F7}', "/"),
];

/// Whitespace as the segmenter understands it: ASCII only.
#[inline]
pub(crate) const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Whether `text` has anything besides whitespace, Unicode spaces included.
///
/// Spaces outside [`REPLACEMENTS`] (U+3000, U+2007, ...) survive
/// normalization as content, but a unit made only of them is still blank.
#[inline]
pub(crate) fn has_content(text: &str) -> bool {
    !text.chars().all(char::is_whitespace)
}

/// The ASCII replacement for `c`, if it has one.
#[inline]
fn replacement(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Normalize chapter text to plain-ASCII punctuation and tidy whitespace.
///
/// Never fails. Empty or whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use quire::normalize;
///
/// let text = "\u{201C}Wait\u{2026}\u{201D}  she\u{a0}said.\n\n\n\n  Next.  ";
/// assert_eq!(normalize(text), "\"Wait...\" she said.\n\nNext.");
/// assert_eq!(normalize(" \n\t "), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let substituted = substitute(text);
    let spaced = collapse_spaces(&substituted);
    let stripped = strip_lines(&spaced);
    collapse_newlines(&stripped)
        .trim_matches(is_blank)
        .to_string()
}

/// Decode UTF-8 bytes and [`normalize`] them.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if `bytes` is not valid UTF-8.
pub fn normalize_bytes(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)?;
    Ok(normalize(text))
}

fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement(c) {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

fn collapse_spaces(text: &str) -> String {
    SPACE_RUNS.replace_all(text, " ").into_owned()
}

fn strip_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_matches(is_blank))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUNS.replace_all(text, "\n\n").into_owned()
}
