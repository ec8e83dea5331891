use crate::chars::AsciiChar;

/// An unordered set of characters used as a trim criterion.
///
/// Stored sorted and de-duplicated, so the order and repetition of the
/// characters it was built from never matter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<C>",
        into = "Vec<C>",
        bound(
            serialize = "C: Clone + serde::Serialize",
            deserialize = "C: AsciiChar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharSet<C> {
    chars: Vec<C>,
}

impl<C: AsciiChar> CharSet<C> {
    pub fn new(chars: &[C]) -> Self {
        chars.iter().copied().collect()
    }

    pub fn single(c: C) -> Self {
        Self { chars: vec![c] }
    }

    pub fn contains(&self, c: C) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn len(&self) -> usize { self.chars.len() }

    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = C> + '_ {
        self.chars.iter().copied()
    }
}

impl<C: AsciiChar> FromIterator<C> for CharSet<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut chars: Vec<C> = iter.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }
}

impl<C: AsciiChar> From<&[C]> for CharSet<C> {
    fn from(chars: &[C]) -> Self { Self::new(chars) }
}

impl<C: AsciiChar> From<Vec<C>> for CharSet<C> {
    fn from(chars: Vec<C>) -> Self { chars.into_iter().collect() }
}

impl<C> From<CharSet<C>> for Vec<C> {
    fn from(set: CharSet<C>) -> Self { set.chars }
}

impl From<&str> for CharSet<char> {
    fn from(chars: &str) -> Self { chars.chars().collect() }
}
