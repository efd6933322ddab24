//! Fragment-based split tokenizer.

use super::Tokenizer;
use crate::analysis::pattern::PatternValue;
use crate::analysis::registry::{PatternRegistry, names};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SpellbridgeError};

/// A tokenizer that splits text on a separator fragment (whitespace by
/// default) and records where each token sits in the text.
///
/// Offsets come from a left-to-right claim over the text: each token is
/// searched for after the end of the previous one, so repeated words get
/// distinct offsets and a short word is never found inside a longer word
/// that was already claimed.
#[derive(Clone, Debug)]
pub struct PatternSplitTokenizer {
    pattern: PatternValue,
}

impl PatternSplitTokenizer {
    /// Create a tokenizer that splits on the `space` fragment of `registry`.
    pub fn new(registry: &PatternRegistry) -> Result<Self> {
        Self::with_fragment(registry.get(names::SPACE)?.clone())
    }

    /// Create a tokenizer that splits on `pattern`.
    pub fn with_fragment(pattern: PatternValue) -> Result<Self> {
        pattern.regex()?;
        Ok(PatternSplitTokenizer { pattern })
    }

    /// Get the separator fragment.
    pub fn pattern(&self) -> &PatternValue {
        &self.pattern
    }
}

impl Tokenizer for PatternSplitTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let bound = self.pattern.with_bound_text(text);
        let pieces = bound.split()?;

        let (tokens, _) = pieces
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .try_fold(
                (Vec::new(), 0usize),
                |(mut tokens, cursor), (position, piece)| {
                    let start = text[cursor..]
                        .find(piece)
                        .map(|found| cursor + found)
                        .ok_or_else(|| {
                            SpellbridgeError::analysis(format!(
                                "token {piece:?} not found after offset {cursor}"
                            ))
                        })?;
                    let end = start + piece.len();
                    tokens.push(Token::with_offsets(piece, position, start, end));
                    Ok::<_, SpellbridgeError>((tokens, end))
                },
            )?;

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pattern_split"
    }
}
