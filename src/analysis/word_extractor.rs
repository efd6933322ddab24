//! Word extraction pipeline.
//!
//! The [`WordExtractor`] runs the normalization char filters, splits the
//! normalized text, drops short tokens and collects the result as a list of
//! distinct words plus one [`WordOffset`] per occurrence.
//!
//! # Examples
//!
//! ```
//! use spellbridge::analysis::word_extractor::WordExtractor;
//! use spellbridge::config::ExtractorConfig;
//!
//! let extractor = WordExtractor::new(ExtractorConfig::default()).unwrap();
//! let result = extractor.extract_words("Ths is a tset... of the tset").unwrap();
//!
//! assert_eq!(result.words_collection, vec!["tset"]);
//! assert_eq!(result.words_offsets.len(), 2);
//! assert_eq!(result.words_offsets[1].start_offset, 24);
//! ```

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, SeparatorCharFilter, SpecialCharacterFilter};
use crate::analysis::registry::{PatternRegistry, names};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{Filter, MinLengthFilter};
use crate::analysis::tokenizer::{PatternSplitTokenizer, Tokenizer};
use crate::config::ExtractorConfig;
use crate::error::Result;

/// One occurrence of a word in the text.
///
/// Offsets are byte offsets into the text that was passed to
/// [`WordExtractor::extract_words`], so `&text[start_offset..end_offset]`
/// is `word`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOffset {
    /// The word.
    pub word: String,
    /// Start byte offset (inclusive).
    pub start_offset: usize,
    /// End byte offset (exclusive).
    pub end_offset: usize,
}

impl WordOffset {
    /// Create a new word offset.
    pub fn new<S: Into<String>>(word: S, start_offset: usize, end_offset: usize) -> Self {
        WordOffset {
            word: word.into(),
            start_offset,
            end_offset,
        }
    }

    /// Byte range of the occurrence.
    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Length of the occurrence in bytes.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the occurrence is empty.
    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

impl From<Token> for WordOffset {
    fn from(token: Token) -> Self {
        WordOffset {
            word: token.text,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
        }
    }
}

impl fmt::Display for WordOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..{}]", self.word, self.start_offset, self.end_offset)
    }
}

/// Words found in a text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationResult {
    /// Distinct words in first-seen order.
    pub words_collection: Vec<String>,
    /// Every occurrence, left to right.
    pub words_offsets: Vec<WordOffset>,
}

impl TokenizationResult {
    /// Check if no word was found.
    pub fn is_empty(&self) -> bool {
        self.words_collection.is_empty()
    }

    /// Occurrences of `word`, left to right.
    pub fn occurrences<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a WordOffset> + 'a {
        self.words_offsets
            .iter()
            .filter(move |offset| offset.word == word)
    }

    /// Distinct words joined with `separator`.
    pub fn joined_words(&self, separator: &str) -> String {
        self.words_collection.join(separator)
    }
}

/// The extraction pipeline: char filters, tokenizer and token filters built
/// from one [`ExtractorConfig`] and the extractor's own [`PatternRegistry`].
#[derive(Clone)]
pub struct WordExtractor {
    config: ExtractorConfig,
    registry: PatternRegistry,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl WordExtractor {
    /// Build an extractor for `config`.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let mut registry = PatternRegistry::with_base_fragments();
        register_custom_punctuation(&mut registry, &config.custom_punctuation);

        let char_filters = build_char_filters(&registry)?;
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(PatternSplitTokenizer::new(&registry)?);
        let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(MinLengthFilter::new(
            config.effective_min_word_length(),
        ))];

        Ok(WordExtractor {
            config,
            registry,
            char_filters,
            tokenizer,
            filters,
        })
    }

    /// The configuration the extractor was built with.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The extractor's fragment registry.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Replace the custom punctuation characters.
    ///
    /// An empty string removes the custom punctuation. On error the
    /// extractor is left unchanged.
    pub fn set_custom_punctuation(&mut self, chars: &str) -> Result<()> {
        let mut registry = self.registry.clone();
        register_custom_punctuation(&mut registry, chars);
        let char_filters = build_char_filters(&registry)?;

        self.registry = registry;
        self.char_filters = char_filters;
        self.config.custom_punctuation = chars.to_string();
        Ok(())
    }

    /// Run the char filters over `text`.
    ///
    /// The result has the same byte length as `text`; separators are spaces.
    pub fn normalize(&self, text: &str) -> Result<String> {
        self.char_filters
            .iter()
            .try_fold(text.to_string(), |current, char_filter| {
                let filtered = char_filter.filter(&current)?;
                trace!("{}: {filtered:?}", char_filter.name());
                Ok(filtered)
            })
    }

    /// Find the words of `text` and where they occur.
    pub fn extract_words(&self, text: &str) -> Result<TokenizationResult> {
        let normalized = self.normalize(text)?;

        let mut tokens = self.tokenizer.tokenize(&normalized)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        let mut seen = AHashSet::new();
        let mut result = TokenizationResult::default();
        for token in tokens {
            if seen.insert(token.text.clone()) {
                result.words_collection.push(token.text.clone());
            }
            result.words_offsets.push(WordOffset::from(token));
        }

        debug!(
            "extracted {} words ({} occurrences) from {} bytes",
            result.words_collection.len(),
            result.words_offsets.len(),
            text.len()
        );
        Ok(result)
    }
}

impl fmt::Debug for WordExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<_> = self.filters.iter().map(|c| c.name()).collect();
        f.debug_struct("WordExtractor")
            .field("config", &self.config)
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

/// Extract words from `text` with a one-off extractor.
pub fn extract_words(text: &str, config: &ExtractorConfig) -> Result<TokenizationResult> {
    WordExtractor::new(config.clone())?.extract_words(text)
}

fn register_custom_punctuation(registry: &mut PatternRegistry, chars: &str) {
    if chars.is_empty() {
        registry.unregister(names::CUSTOM_PUNCTUATION);
    } else {
        registry.register(names::CUSTOM_PUNCTUATION, &regex::escape(chars));
    }
}

fn build_char_filters(registry: &PatternRegistry) -> Result<Vec<Arc<dyn CharFilter>>> {
    Ok(vec![
        Arc::new(SeparatorCharFilter::new(registry)?),
        Arc::new(SpecialCharacterFilter::new(registry)?),
    ])
}
