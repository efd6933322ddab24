//! Token filters applied after tokenization.
//!
//! # Available Filters
//!
//! - [`min_length::MinLengthFilter`] - Drops tokens shorter than a threshold
//!
//! # Examples
//!
//! ```
//! use spellbridge::analysis::token::Token;
//! use spellbridge::analysis::token_filter::Filter;
//! use spellbridge::analysis::token_filter::min_length::MinLengthFilter;
//!
//! let filter = MinLengthFilter::new(4);
//! let tokens = vec![Token::new("this", 0), Token::new("is", 1)];
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "this");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a configured pipeline can be shared.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod min_length;

pub use min_length::MinLengthFilter;
