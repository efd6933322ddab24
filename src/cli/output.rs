//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::analysis::word_extractor::{TokenizationResult, WordOffset};
use crate::cli::args::{OutputFormat, SpellbridgeArgs};
use crate::error::Result;

/// Types that have a human-readable rendering.
pub trait HumanReadable {
    fn render_human(&self) -> String;
}

/// Result structure for word extraction.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsReport {
    pub min_word_length: usize,
    pub words_collection: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_offsets: Option<Vec<WordOffset>>,
}

impl WordsReport {
    pub fn new(result: TokenizationResult, min_word_length: usize, with_offsets: bool) -> Self {
        WordsReport {
            min_word_length,
            words_collection: result.words_collection,
            words_offsets: with_offsets.then_some(result.words_offsets),
        }
    }
}

impl HumanReadable for WordsReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} words (minimum length {})",
            self.words_collection.len(),
            self.min_word_length
        );
        for word in &self.words_collection {
            let _ = writeln!(out, "  {word}");
        }

        if let Some(offsets) = &self.words_offsets {
            let _ = writeln!(out);
            let _ = writeln!(out, "Occurrences:");
            for offset in offsets {
                let _ = writeln!(
                    out,
                    "  {:>6}..{:<6} {}",
                    offset.start_offset, offset.end_offset, offset.word
                );
            }
        }
        out
    }
}

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub original: String,
    pub normalized: String,
}

impl HumanReadable for NormalizeReport {
    fn render_human(&self) -> String {
        format!("{}\n", self.normalized)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellbridgeArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let rendered = render(message, result, args)?;
    print!("{rendered}");
    Ok(())
}

/// Render a result in the specified format.
pub fn render<T>(message: &str, result: &T, args: &SpellbridgeArgs) -> Result<String>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            let mut out = String::new();
            if args.verbosity() > 1 {
                out.push_str(message);
                out.push_str("\n\n");
            }
            out.push_str(&result.render_human());
            Ok(out)
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}
