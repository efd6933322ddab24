//! Text analysis for spell checking.
//!
//! The analysis layer turns raw text into the list of words sent to the
//! spell-check service. It is built from composable regex fragments
//! ([`pattern::PatternValue`]) looked up in a per-extractor
//! [`registry::PatternRegistry`], and follows the usual char filter,
//! tokenizer, token filter pipeline driven by
//! [`word_extractor::WordExtractor`].

pub mod char_filter;
pub mod pattern;
pub mod registry;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod word_extractor;

pub use pattern::{Grouping, PatternFlags, PatternValue};
pub use registry::PatternRegistry;
pub use token::Token;
pub use word_extractor::{TokenizationResult, WordExtractor, WordOffset, extract_words};
