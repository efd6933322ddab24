//! # Spellbridge
//!
//! Text normalization and word extraction for spell-check clients.
//!
//! ## Features
//!
//! - Composable regex fragments with a named registry
//! - Length-preserving normalization, so offsets point into the original text
//! - Char filter, tokenizer and token filter pipeline
//! - Spell and grammar check client over a pluggable transport
//!
//! ## Example
//!
//! ```
//! use spellbridge::analysis::extract_words;
//! use spellbridge::config::ExtractorConfig;
//!
//! let result = extract_words("Don't stop... well-known words", &ExtractorConfig::default()).unwrap();
//! assert_eq!(result.words_collection, vec!["Don't", "stop", "well-known", "words"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{TokenizationResult, WordExtractor, WordOffset, extract_words};
    pub use crate::config::{ClientConfig, ExtractorConfig};
    pub use crate::error::{Result, SpellbridgeError};
    pub use crate::spelling::{SpellCheckClient, Transport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
