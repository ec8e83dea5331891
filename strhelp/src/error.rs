use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("expected exactly one character, got {0:?}")]
    NotSingleChar(String),
    #[error("invalid utf-8 at byte {0}")]
    InvalidUtf8(usize),
    #[error("invalid utf-16 sequence")]
    InvalidUtf16,
}
