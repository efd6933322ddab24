//! Zero-width character blanking.

use super::{CharFilter, blank};
use crate::analysis::pattern::PatternValue;
use crate::analysis::registry::{PatternRegistry, names};
use crate::error::Result;

/// A char filter that blanks zero-width spaces (U+200B) and byte order marks
/// (U+FEFF).
///
/// Editors insert these as invisible markers. They are replaced by spaces
/// rather than deleted so the text keeps its length and offsets stay valid
/// on the original. The cost is that a marker inside a word splits it:
/// `"misspe\u{200B}led"` yields `misspe` and `led`, not `misspeled`.
#[derive(Clone, Debug)]
pub struct SpecialCharacterFilter {
    pattern: PatternValue,
}

impl SpecialCharacterFilter {
    /// Build the filter from the `special_characters` fragment of `registry`.
    pub fn new(registry: &PatternRegistry) -> Result<Self> {
        let pattern = registry.get(names::SPECIAL_CHARACTERS)?.global();
        pattern.regex()?;

        Ok(SpecialCharacterFilter { pattern })
    }
}

impl CharFilter for SpecialCharacterFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok(self
            .pattern
            .with_bound_text(input)
            .replace(blank)?
            .into_text())
    }

    fn name(&self) -> &'static str {
        "special_characters"
    }
}
