//! Character types the helpers are generic over.

use core::fmt::Debug;

/// A code unit that can be compared, ordered and classified as an ASCII letter.
///
/// Case mapping only touches `a..=z` and `A..=Z`; every other value maps to
/// itself, whatever its width.
pub trait AsciiChar: Copy + Eq + Ord + Debug {
    /// The ASCII space, the only character the plain trims remove.
    const SPACE: Self;

    fn is_ascii_lowercase(self) -> bool;

    fn is_ascii_uppercase(self) -> bool;

    fn to_ascii_uppercase(self) -> Self;

    fn to_ascii_lowercase(self) -> Self;
}

impl_ascii_char!(u8, u16, u32);

impl AsciiChar for char {
    const SPACE: Self = ' ';

    fn is_ascii_lowercase(self) -> bool {
        char::is_ascii_lowercase(&self)
    }

    fn is_ascii_uppercase(self) -> bool {
        char::is_ascii_uppercase(&self)
    }

    fn to_ascii_uppercase(self) -> Self {
        char::to_ascii_uppercase(&self)
    }

    fn to_ascii_lowercase(self) -> Self {
        char::to_ascii_lowercase(&self)
    }
}
