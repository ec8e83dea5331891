
pub use crate::chars::AsciiChar;
pub use crate::charset::CharSet;
pub use crate::error::TextError;
pub use crate::strext::StringHelpers;
pub use crate::text::*;
