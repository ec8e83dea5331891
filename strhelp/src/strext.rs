//! `&str` front end for the generic helpers.
//!
//! Every method runs over the string's `char`s, so reversal never splits a
//! multi-byte character and the result is always valid UTF-8.

use crate::charset::CharSet;
use crate::error::TextError;
use crate::text;

pub trait StringHelpers {
    fn to_upper(&self) -> String;
    fn to_lower(&self) -> String;
    fn reversed(&self) -> String;
    fn trim_spaces(&self) -> String;
    fn trimleft_spaces(&self) -> String;
    fn trimright_spaces(&self) -> String;
    fn trim_chars(&self, chars: &str) -> String;
    fn trimleft_chars(&self, chars: &str) -> String;
    fn trimright_chars(&self, chars: &str) -> String;
    fn remove_char(&self, character: char) -> String;
    fn split_tokens(&self, delimiter: char) -> Vec<String>;
}

fn units(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn collect(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

impl StringHelpers for str {
    fn to_upper(&self) -> String {
        collect(text::to_upper(units(self)))
    }

    fn to_lower(&self) -> String {
        collect(text::to_lower(units(self)))
    }

    fn reversed(&self) -> String {
        collect(text::reverse(units(self)))
    }

    fn trim_spaces(&self) -> String {
        collect(text::trim(&units(self)))
    }

    fn trimleft_spaces(&self) -> String {
        collect(text::trimleft(&units(self)))
    }

    fn trimright_spaces(&self) -> String {
        collect(text::trimright(&units(self)))
    }

    fn trim_chars(&self, chars: &str) -> String {
        collect(text::trim_set(&units(self), &CharSet::from(chars)))
    }

    fn trimleft_chars(&self, chars: &str) -> String {
        collect(text::trimleft_set(&units(self), &CharSet::from(chars)))
    }

    fn trimright_chars(&self, chars: &str) -> String {
        collect(text::trimright_set(&units(self), &CharSet::from(chars)))
    }

    fn remove_char(&self, character: char) -> String {
        collect(text::remove(units(self), character))
    }

    fn split_tokens(&self, delimiter: char) -> Vec<String> {
        text::split(&units(self), delimiter)
            .into_iter()
            .map(collect)
            .collect()
    }
}

/// Parse an argument that must hold exactly one character.
pub fn single_char(s: &str) -> Result<char, TextError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TextError::NotSingleChar(s.to_string())),
    }
}

pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, TextError> {
    String::from_utf8(bytes).map_err(|e| TextError::InvalidUtf8(e.utf8_error().valid_up_to()))
}

pub fn decode_utf16(units: &[u16]) -> Result<String, TextError> {
    String::from_utf16(units).map_err(|_| TextError::InvalidUtf16)
}
