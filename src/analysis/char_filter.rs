//! Char filters that normalize text before tokenization.
//!
//! Every filter in this module is length preserving: the output has exactly
//! the same byte length as the input, and characters are only ever replaced
//! by ASCII spaces (one per UTF-8 byte). This is what lets token offsets
//! computed on the normalized text point into the caller's original text.
//!
//! # Available Filters
//!
//! - [`separator::SeparatorCharFilter`] - Turns punctuation and misplaced
//!   situational separators into spaces
//! - [`special_characters::SpecialCharacterFilter`] - Blanks zero-width spaces
//!   and byte order marks

use regex::Captures;

use crate::error::Result;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// The returned string must have the same byte length as `input`.
    fn filter(&self, input: &str) -> Result<String>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Replacement that turns a whole match into spaces, one per byte.
pub(crate) fn blank(caps: &Captures) -> String {
    " ".repeat(caps[0].len())
}

pub mod separator;
pub mod special_characters;

pub use separator::SeparatorCharFilter;
pub use special_characters::SpecialCharacterFilter;
