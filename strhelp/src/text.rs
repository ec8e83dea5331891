//! The string helpers, generic over any [`AsciiChar`] code unit.
//!
//! Functions that rewrite every character take the sequence by value and
//! transform that copy in place. Functions that only select a range borrow
//! their input and copy out the selected part.

use tracing::trace;

use crate::chars::AsciiChar;
use crate::charset::CharSet;

/// Map every lowercase ASCII letter to uppercase.
pub fn to_upper<C: AsciiChar>(mut text: Vec<C>) -> Vec<C> {
    text.iter_mut().for_each(|c| *c = c.to_ascii_uppercase());
    text
}

/// Map every uppercase ASCII letter to lowercase.
pub fn to_lower<C: AsciiChar>(mut text: Vec<C>) -> Vec<C> {
    text.iter_mut().for_each(|c| *c = c.to_ascii_lowercase());
    text
}

pub fn reverse<C: AsciiChar>(mut text: Vec<C>) -> Vec<C> {
    text.reverse();
    text
}

/// Remove leading and trailing spaces. Tabs and newlines are kept.
///
/// Returns an empty sequence when `text` is empty or all spaces.
pub fn trim<C: AsciiChar>(text: &[C]) -> Vec<C> {
    trim_set(text, &CharSet::single(C::SPACE))
}

pub fn trimleft<C: AsciiChar>(text: &[C]) -> Vec<C> {
    trimleft_set(text, &CharSet::single(C::SPACE))
}

pub fn trimright<C: AsciiChar>(text: &[C]) -> Vec<C> {
    trimright_set(text, &CharSet::single(C::SPACE))
}

/// Remove leading and trailing characters found in `chars`.
///
/// `chars` is a set, not a prefix or suffix: trimming stops at the first
/// character from each end that is not in it.
pub fn trim_chars<C: AsciiChar>(text: &[C], chars: &[C]) -> Vec<C> {
    trim_set(text, &CharSet::new(chars))
}

pub fn trimleft_chars<C: AsciiChar>(text: &[C], chars: &[C]) -> Vec<C> {
    trimleft_set(text, &CharSet::new(chars))
}

pub fn trimright_chars<C: AsciiChar>(text: &[C], chars: &[C]) -> Vec<C> {
    trimright_set(text, &CharSet::new(chars))
}

pub fn trim_set<C: AsciiChar>(text: &[C], chars: &CharSet<C>) -> Vec<C> {
    let first = text.iter().position(|&c| !chars.contains(c));
    let last = text.iter().rposition(|&c| !chars.contains(c));
    trace!(len = text.len(), ?first, ?last, "trim");
    match (first, last) {
        (Some(first), Some(last)) => text[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

pub fn trimleft_set<C: AsciiChar>(text: &[C], chars: &CharSet<C>) -> Vec<C> {
    match text.iter().position(|&c| !chars.contains(c)) {
        Some(first) => text[first..].to_vec(),
        None => Vec::new(),
    }
}

pub fn trimright_set<C: AsciiChar>(text: &[C], chars: &CharSet<C>) -> Vec<C> {
    match text.iter().rposition(|&c| !chars.contains(c)) {
        Some(last) => text[..=last].to_vec(),
        None => Vec::new(),
    }
}

/// Drop every occurrence of `character`, keeping the rest in order.
pub fn remove<C: AsciiChar>(mut text: Vec<C>, character: C) -> Vec<C> {
    text.retain(|&c| c != character);
    text
}

/// Split `text` into the non-empty runs between occurrences of `delimiter`.
///
/// Consecutive, leading and trailing delimiters never produce empty tokens.
pub fn split<C: AsciiChar>(text: &[C], delimiter: C) -> Vec<Vec<C>> {
    let tokens = text
        .split(|&c| c == delimiter)
        .filter(|run| !run.is_empty())
        .map(<[C]>::to_vec)
        .collect::<Vec<_>>();
    trace!(len = text.len(), tokens = tokens.len(), "split");
    tokens
}
