//! Greedy packing of text units into passages.
//!
//! Both segmentation passes share one rule set; they differ only in the unit
//! (paragraph or sentence), the separator used to join units, and what to do
//! with a candidate that overflows while the accumulator is still short.
//!
//! ```text
//! units:    [u1] [u2] [u3] [u4] ...
//!             \   |
//! candidate = current + sep + unit
//!
//!   fits == Equal    -> emit candidate, start over
//!   fits == Less     -> keep accumulating
//!   fits == Greater  -> emit current if it is long enough, else overflow
//! ```
//!
//! A short remainder left at the end is folded into the previously emitted
//! passage. The merged passage may exceed the maximum; it is not re-split.

use std::cmp::Ordering;

use crate::normalize::has_content;
use crate::PassageBounds;

/// Pack `units` into `out`.
///
/// `overflow` receives the over-long candidate when the accumulator is below
/// the minimum (this includes a lone unit that is already too long). Blank
/// units are skipped, so neither an emitted passage nor the remainder is ever
/// whitespace only.
pub(crate) fn pack<'a, I, F>(
    units: I,
    separator: &str,
    bounds: &PassageBounds,
    out: &mut Vec<String>,
    mut overflow: F,
) where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(String, &mut Vec<String>),
{
    let remainder = units.into_iter().fold(String::new(), |current, unit| {
        if !has_content(unit) {
            return current;
        }
        let candidate = if current.is_empty() {
            unit.to_string()
        } else {
            format!("{current}{separator}{unit}")
        };

        match bounds.fits(bounds.measure(&candidate)) {
            Ordering::Equal => {
                out.push(candidate);
                String::new()
            }
            Ordering::Less => candidate,
            Ordering::Greater => {
                if bounds.measure(&current) >= bounds.min_length() {
                    out.push(current);
                    unit.to_string()
                } else {
                    overflow(candidate, out);
                    String::new()
                }
            }
        }
    });

    if !has_content(&remainder) {
        return;
    }

    match out.last_mut() {
        Some(last) if bounds.measure(&remainder) < bounds.min_length() => {
            tracing::trace!(
                remainder_len = bounds.measure(&remainder),
                "merging short remainder into previous passage"
            );
            last.push_str(separator);
            last.push_str(&remainder);
        }
        _ => out.push(remainder),
    }
}
