//! Separator neutralization.
//!
//! Runs the first four normalization passes over the text:
//!
//! 1. every character of the punctuation set (no-break space, text
//!    punctuation, line ends and the optional custom punctuation) becomes
//!    blank;
//! 2. runs of two or more situational separators (`.`, `-`, `'`) are wrapped
//!    in [`MARKER`];
//! 3. separators touching a marker become spaces, which also consumes the
//!    markers (passes 2 and 3 repeat until no run is left);
//! 4. separators touching whitespace or the ends of the text become spaces.
//!
//! A single separator between two letters survives, so `don't`,
//! `well-known` and `example.com` stay whole words.

use log::trace;

use super::{CharFilter, blank};
use crate::analysis::pattern::{Grouping, PatternValue};
use crate::analysis::registry::{PatternRegistry, names};
use crate::error::Result;

/// Transient marker around runs of situational separators.
///
/// It belongs to the punctuation set, so pass 1 has already removed every
/// occurrence from the input by the time it is used.
pub const MARKER: &str = "#";

/// Char filter for normalization passes 1 to 4.
///
/// Every fragment is built and compiled once in [`SeparatorCharFilter::new`];
/// filtering only rebinds text to them.
#[derive(Clone, Debug)]
pub struct SeparatorCharFilter {
    separators: PatternValue,
    repeated: PatternValue,
    after_marker: PatternValue,
    before_marker: PatternValue,
    before_boundary: PatternValue,
    after_boundary: PatternValue,
    edges: PatternValue,
}

impl SeparatorCharFilter {
    /// Build the filter from the fragments of `registry`.
    ///
    /// The `custom_punctuation` fragment is included when it is registered
    /// and not empty.
    pub fn new(registry: &PatternRegistry) -> Result<Self> {
        let mut members = vec![
            registry.get(names::TEXT_PUNCTUATION)?.clone(),
            registry.get(names::END_OF_LINE)?.clone(),
        ];
        if let Ok(custom) = registry.get(names::CUSTOM_PUNCTUATION) {
            if !custom.source().is_empty() {
                members.push(custom.clone());
            }
        }

        let separators = registry
            .get(names::HTML_NBSP)?
            .compose_all(&members, Grouping::Raw)
            .as_character_set()
            .global()
            .with_name("separators");

        let situational = registry
            .get(names::SITUATIONAL_SEPARATORS)?
            .as_character_set()
            .global();
        let repeated = situational.sequence(
            registry.get(names::REPEATED_TWO_PLUS)?,
            Grouping::Raw,
        );
        let edges = situational
            .anchor_start()
            .either(&situational.anchor_end(), Grouping::NonCapturing);
        let boundary = registry.get(names::BOUNDARY_SPACE)?.as_group();

        let filter = SeparatorCharFilter {
            separators,
            repeated,
            after_marker: situational.wrapped_left(MARKER),
            before_marker: situational.wrapped_right(MARKER),
            before_boundary: situational.wrapped_right(boundary.source()),
            after_boundary: situational.wrapped_left(boundary.source()),
            edges,
        };
        for pattern in filter.fragments() {
            pattern.regex()?;
        }

        Ok(filter)
    }

    /// The composed punctuation set of pass 1.
    pub fn separators(&self) -> &PatternValue {
        &self.separators
    }

    /// Every compiled fragment of the filter.
    pub fn fragments(&self) -> [&PatternValue; 7] {
        [
            &self.separators,
            &self.repeated,
            &self.after_marker,
            &self.before_marker,
            &self.before_boundary,
            &self.after_boundary,
            &self.edges,
        ]
    }

    fn strip_runs(&self, mut text: String) -> Result<String> {
        loop {
            let runs = self.repeated.with_bound_text(text);
            if !runs.is_match()? {
                return Ok(runs.into_text());
            }

            let marked = runs.wrap_occurrences_with(MARKER)?.into_text();
            let marked = replace_all(&self.after_marker, marked, " ")?;
            text = replace_all(&self.before_marker, marked, " ")?;
        }
    }

    fn strip_boundaries(&self, text: String) -> Result<String> {
        let text = replace_all(&self.before_boundary, text, " ${1}")?;
        let text = replace_all(&self.after_boundary, text, "${1} ")?;
        replace_all(&self.edges, text, " ")
    }
}

fn replace_all(pattern: &PatternValue, text: String, replacement: &str) -> Result<String> {
    Ok(pattern.with_bound_text(text).replace(replacement)?.into_text())
}

impl CharFilter for SeparatorCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        let text = self
            .separators
            .with_bound_text(input)
            .replace(blank)?
            .into_text();
        trace!("separators blanked: {text:?}");

        let text = self.strip_runs(text)?;
        trace!("separator runs removed: {text:?}");

        let text = self.strip_boundaries(text)?;
        trace!("word boundaries cleaned: {text:?}");

        debug_assert_eq!(text.len(), input.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}
