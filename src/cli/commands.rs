//! Command implementations for the Spellbridge CLI.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};

use crate::analysis::word_extractor::WordExtractor;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{ClientConfig, ExtractorConfig};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SpellbridgeArgs) -> Result<()> {
    match &args.command {
        Command::Words(words_args) => extract(words_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize(normalize_args.clone(), &args),
    }
}

/// List the words of a text.
fn extract(args: WordsArgs, cli_args: &SpellbridgeArgs) -> Result<()> {
    let config = words_config(&args, cli_args)?;
    let min_word_length = config.effective_min_word_length();
    let extractor = WordExtractor::new(config)?;

    let text = read_input(&args.input)?;
    let result = extractor.extract_words(&text)?;
    info!(
        "{} distinct words, {} occurrences",
        result.words_collection.len(),
        result.words_offsets.len()
    );

    let report = WordsReport::new(result, min_word_length, args.offsets);
    output_result("Extracted words", &report, cli_args)
}

/// Print the normalized text.
fn normalize(args: NormalizeArgs, cli_args: &SpellbridgeArgs) -> Result<()> {
    let mut config = base_config(cli_args)?;
    if let Some(chars) = args.custom_punctuation {
        config.custom_punctuation = chars;
    }
    let extractor = WordExtractor::new(config)?;

    let text = read_input(&args.input)?;
    let normalized = extractor.normalize(&text)?;

    let report = NormalizeReport {
        original: text,
        normalized,
    };
    output_result("Normalized text", &report, cli_args)
}

/// Extractor configuration from the config file, or the defaults.
fn base_config(cli_args: &SpellbridgeArgs) -> Result<ExtractorConfig> {
    match &cli_args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            Ok(ClientConfig::from_file(path)?.extractor_config())
        }
        None => Ok(ExtractorConfig::default()),
    }
}

/// Configuration for the words command: the base config with the command
/// line overrides applied.
pub fn words_config(args: &WordsArgs, cli_args: &SpellbridgeArgs) -> Result<ExtractorConfig> {
    let mut config = base_config(cli_args)?;
    if let Some(min_word_length) = args.min_word_length {
        config.min_word_length = min_word_length;
        // An explicit length wins over the locale table.
        config.locale_min_word_length.clear();
    }
    if let Some(chars) = &args.custom_punctuation {
        config.custom_punctuation = chars.clone();
    }
    if let Some(language) = &args.language {
        config.language = Some(language.clone());
    }
    Ok(config)
}

fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.input {
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn words_args(argv: &[&str]) -> (WordsArgs, SpellbridgeArgs) {
        let args = SpellbridgeArgs::try_parse_from(argv.iter().copied()).unwrap();
        match &args.command {
            Command::Words(words_args) => (words_args.clone(), args),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_words_config_overrides() {
        let (words, cli) = words_args(&[
            "spellbridge",
            "words",
            "x",
            "-m",
            "2",
            "--custom-punctuation",
            "/",
        ]);
        let config = words_config(&words, &cli).unwrap();

        assert_eq!(config.min_word_length, 2);
        assert_eq!(config.custom_punctuation, "/");
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_words_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"lang": "th_TH", "minWordLength": 3, "localeMinWordLength": {{"th_TH": 1}}}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let (words, cli) = words_args(&["spellbridge", "--config", path, "words", "x"]);
        let config = words_config(&words, &cli).unwrap();
        assert_eq!(config.effective_min_word_length(), 1);

        let (words, cli) = words_args(&["spellbridge", "-c", path, "words", "x", "-m", "5"]);
        let config = words_config(&words, &cli).unwrap();
        assert_eq!(config.effective_min_word_length(), 5);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "from a file").unwrap();

        let input = InputArgs {
            text: None,
            input: Some(file.path().to_path_buf()),
        };
        assert_eq!(read_input(&input).unwrap(), "from a file");
    }

    #[test]
    fn test_execute_words() {
        let args =
            SpellbridgeArgs::try_parse_from(["spellbridge", "-q", "words", "hello there"]).unwrap();
        assert!(execute_command(args).is_ok());
    }
}
