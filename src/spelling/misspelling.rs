//! Misspelled words and their positions in the checked text.

use std::ops::Range;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::word_extractor::WordOffset;
use crate::error::Result;
use crate::util::text::replace_from_to;

/// A misspelled word as reported by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The misspelled word.
    pub word: String,
    /// Whether the word is in the user dictionary.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub ud: bool,
    /// Suggested replacements, best first.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A misspelling at one position of the checked text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedMisspelling {
    #[serde(flatten)]
    pub misspelling: Misspelling,
    /// Start byte offset (inclusive).
    pub start_offset: usize,
    /// End byte offset (exclusive).
    pub end_offset: usize,
}

impl LocatedMisspelling {
    /// The misspelled word.
    pub fn word(&self) -> &str {
        &self.misspelling.word
    }

    /// Suggested replacements, best first.
    pub fn suggestions(&self) -> &[String] {
        &self.misspelling.suggestions
    }

    /// Byte range of the misspelling.
    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Replace the misspelling in `text` with `suggestion`.
    ///
    /// `text` must be the text that was checked. Offsets of misspellings
    /// further right shift when `suggestion` has a different length, so apply
    /// several corrections from right to left.
    pub fn apply(&self, text: &str, suggestion: &str) -> Result<String> {
        replace_from_to(text, self.start_offset, self.end_offset, suggestion)
    }
}

/// Pair every word occurrence with the misspelling reported for that word.
///
/// Occurrences of correctly spelled words are dropped. When the service
/// reports the same word twice, the first report wins.
pub fn locate_misspellings(
    misspellings: &[Misspelling],
    offsets: &[WordOffset],
) -> Vec<LocatedMisspelling> {
    let mut by_word: AHashMap<&str, &Misspelling> = AHashMap::with_capacity(misspellings.len());
    for misspelling in misspellings {
        by_word.entry(misspelling.word.as_str()).or_insert(misspelling);
    }

    offsets
        .iter()
        .filter_map(|offset| {
            by_word
                .get(offset.word.as_str())
                .map(|misspelling| LocatedMisspelling {
                    misspelling: (*misspelling).clone(),
                    start_offset: offset.start_offset,
                    end_offset: offset.end_offset,
                })
        })
        .collect()
}

// The service sends `"ud": "false"` as often as `"ud": false`.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid ud flag: {other:?}"
            ))),
        },
    }
}
