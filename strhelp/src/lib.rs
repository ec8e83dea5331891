//! Small string helpers: ASCII case conversion, reversal, trimming, character
//! removal and delimiter splitting.
//!
//! The core functions in [`text`] are generic over the code unit
//! ([`AsciiChar`]: `u8`, `u16`, `u32` or `char`) and never fail; degenerate
//! inputs such as an empty or all-space sequence have well-defined results.
//! [`StringHelpers`] exposes the same operations on `&str`.

#[macro_use]
mod macros;

pub mod chars;
pub mod charset;
pub mod error;
pub mod prelude;
pub mod strext;
pub mod text;

pub use crate::chars::AsciiChar;
pub use crate::charset::CharSet;
pub use crate::error::TextError;
pub use crate::strext::{decode_utf16, decode_utf8, single_char, StringHelpers};
pub use crate::text::*;
