//! Tokenizers that cut normalized text into candidate words.
//!
//! # Available Tokenizers
//!
//! - [`pattern_split::PatternSplitTokenizer`] - Splits on a whitespace
//!   fragment and tracks byte offsets
//!
//! # Examples
//!
//! ```
//! use spellbridge::analysis::registry::PatternRegistry;
//! use spellbridge::analysis::tokenizer::Tokenizer;
//! use spellbridge::analysis::tokenizer::pattern_split::PatternSplitTokenizer;
//!
//! let tokenizer = PatternSplitTokenizer::new(&PatternRegistry::with_base_fragments()).unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].start_offset, 6);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a configured pipeline can be shared.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pattern_split;

pub use pattern_split::PatternSplitTokenizer;
