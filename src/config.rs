//! Configuration for word extraction and the spell-check client.
//!
//! Configuration structs derive `serde` traits, use camelCase keys (the names
//! the service options have always had) and fall back to their defaults for
//! missing keys, so a partial JSON document is a valid configuration.
//!
//! Two ways to load them:
//!
//! - strict: [`ClientConfig::from_json_str`] / [`ClientConfig::from_file`]
//!   fail on the first malformed value;
//! - lenient: [`ClientConfig::from_options`] checks each known option on its
//!   own, keeps the default for every option with a wrong type and reports it
//!   as an [`OptionError`].
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use spellbridge::config::ClientConfig;
//!
//! let (config, errors) = ClientConfig::from_options(&json!({
//!     "lang": "en_GB",
//!     "minWordLength": -1,
//! }));
//!
//! assert_eq!(config.lang, "en_GB");
//! assert_eq!(config.extractor.min_word_length, 4);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].option, "minWordLength");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SpellbridgeError};

/// Minimum word length used when nothing else is configured.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Configuration of the word extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    /// Words with fewer characters than this are not collected.
    pub min_word_length: usize,
    /// Extra characters that always separate words.
    pub custom_punctuation: String,
    /// Language of the text, used to pick a locale override.
    pub language: Option<String>,
    /// Per-language minimum word length, overriding `min_word_length`.
    pub locale_min_word_length: BTreeMap<String, usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            custom_punctuation: String::new(),
            language: None,
            locale_min_word_length: BTreeMap::new(),
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Set the custom punctuation characters.
    pub fn with_custom_punctuation<S: Into<String>>(mut self, custom_punctuation: S) -> Self {
        self.custom_punctuation = custom_punctuation.into();
        self
    }

    /// Set the language of the text.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Override the minimum word length for one language.
    pub fn with_locale_min_word_length<S: Into<String>>(
        mut self,
        language: S,
        min_word_length: usize,
    ) -> Self {
        self.locale_min_word_length
            .insert(language.into(), min_word_length);
        self
    }

    /// The minimum word length after applying the locale override, if any.
    pub fn effective_min_word_length(&self) -> usize {
        self.language
            .as_ref()
            .and_then(|language| self.locale_min_word_length.get(language))
            .copied()
            .unwrap_or(self.min_word_length)
    }
}

/// Configuration of the spell-check client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Spell-checking language, e.g. `en_US`.
    pub lang: String,
    /// Customer identifier sent with every request.
    pub customer_id: Option<String>,
    /// User dictionary to check against.
    pub user_dictionary_name: Option<String>,
    /// Custom dictionary ids, comma separated.
    pub custom_dictionary: Option<String>,
    /// Response format requested from the service.
    pub communication_format: String,
    /// Word extraction settings.
    #[serde(flatten)]
    pub extractor: ExtractorConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            lang: DEFAULT_LANGUAGE.to_string(),
            customer_id: None,
            user_dictionary_name: None,
            custom_dictionary: None,
            communication_format: "json".to_string(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Build a configuration from a raw option map, option by option.
    ///
    /// Options with a wrong type keep their default and are reported; unknown
    /// options and `null` values are ignored.
    pub fn from_options(options: &Value) -> (Self, Vec<OptionError>) {
        let mut config = ClientConfig::default();
        let mut errors = Vec::new();

        match options.as_object() {
            Some(map) => config.apply_options(map, &mut errors),
            None => errors.push(OptionError::new("options", "object")),
        }

        for error in &errors {
            warn!("{error}");
        }

        (config, errors)
    }

    fn apply_options(&mut self, map: &Map<String, Value>, errors: &mut Vec<OptionError>) {
        for (key, value) in map {
            if value.is_null() {
                continue;
            }

            let mut report = |expected| errors.push(OptionError::new(key, expected));
            match key.as_str() {
                "lang" => match value.as_str() {
                    Some(lang) if !lang.is_empty() => self.lang = lang.to_string(),
                    _ => report("non-empty string"),
                },
                "customerId" => match value.as_str() {
                    Some(id) => self.customer_id = Some(id.to_string()),
                    None => report("string"),
                },
                "userDictionaryName" => match value.as_str() {
                    Some(name) => self.user_dictionary_name = Some(name.to_string()),
                    None => report("string"),
                },
                "customDictionary" => match value.as_str() {
                    Some(ids) => self.custom_dictionary = Some(ids.to_string()),
                    None => report("string"),
                },
                "communicationFormat" => match value.as_str() {
                    Some(format) => self.communication_format = format.to_string(),
                    None => report("string"),
                },
                "minWordLength" => match value.as_u64() {
                    Some(length) => self.extractor.min_word_length = length as usize,
                    None => report("non-negative integer"),
                },
                "customPunctuation" => match value.as_str() {
                    Some(chars) => self.extractor.custom_punctuation = chars.to_string(),
                    None => report("string"),
                },
                "language" => match value.as_str() {
                    Some(language) => self.extractor.language = Some(language.to_string()),
                    None => report("string"),
                },
                "localeMinWordLength" => match parse_locale_lengths(value) {
                    Some(lengths) => self.extractor.locale_min_word_length = lengths,
                    None => report("object of non-negative integers"),
                },
                _ => {}
            }
        }
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.lang.is_empty() {
            return Err(SpellbridgeError::config("lang must not be empty"));
        }
        if self.communication_format.is_empty() {
            return Err(SpellbridgeError::config(
                "communicationFormat must not be empty",
            ));
        }
        Ok(())
    }

    /// Extractor settings, with the language defaulting to `lang`.
    pub fn extractor_config(&self) -> ExtractorConfig {
        let mut extractor = self.extractor.clone();
        if extractor.language.is_none() {
            extractor.language = Some(self.lang.clone());
        }
        extractor
    }
}

fn parse_locale_lengths(value: &Value) -> Option<BTreeMap<String, usize>> {
    value
        .as_object()?
        .iter()
        .map(|(language, length)| Some((language.clone(), length.as_u64()? as usize)))
        .collect()
}

/// A rejected option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionError {
    /// Option name.
    pub option: String,
    /// Description of the expected type.
    pub expected: &'static str,
    /// Whether the option was required.
    pub critical: bool,
}

impl OptionError {
    fn new(option: &str, expected: &'static str) -> Self {
        OptionError {
            option: option.to_string(),
            expected,
            critical: false,
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter {} should have a type - {}.",
            self.option, self.expected
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.lang, "en_US");
        assert_eq!(config.communication_format, "json");
        assert_eq!(config.extractor.min_word_length, 4);
        assert!(config.extractor.custom_punctuation.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_min_word_length() {
        let config = ExtractorConfig::new()
            .with_min_word_length(3)
            .with_locale_min_word_length("th_TH", 1);
        assert_eq!(config.effective_min_word_length(), 3);

        let thai = config.clone().with_language("th_TH");
        assert_eq!(thai.effective_min_word_length(), 1);

        let english = config.with_language("en_US");
        assert_eq!(english.effective_min_word_length(), 3);
    }

    #[test]
    fn test_from_json_str_partial() {
        let config = ClientConfig::from_json_str(
            r#"{"lang": "de_DE", "minWordLength": 2, "customPunctuation": "€"}"#,
        )
        .unwrap();

        assert_eq!(config.lang, "de_DE");
        assert_eq!(config.extractor.min_word_length, 2);
        assert_eq!(config.extractor.custom_punctuation, "€");
        assert_eq!(config.communication_format, "json");
    }

    #[test]
    fn test_from_json_str_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"minWordLength": -1}"#),
            Err(SpellbridgeError::Json(_))
        ));
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"lang": ""}"#),
            Err(SpellbridgeError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"lang": "fr_FR", "localeMinWordLength": {{"fr_FR": 2}}}}"#
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lang, "fr_FR");
        assert_eq!(config.extractor_config().effective_min_word_length(), 2);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/nonexistent/spellbridge.json").unwrap_err();
        assert!(matches!(err, SpellbridgeError::Io(_)));
    }

    #[test]
    fn test_from_options_keeps_defaults_for_bad_values() {
        let (config, errors) = ClientConfig::from_options(&json!({
            "lang": 42,
            "minWordLength": -1,
            "customPunctuation": "-",
            "userDictionaryName": "mine",
            "unknown": true,
            "customDictionary": null,
        }));

        assert_eq!(config.lang, "en_US");
        assert_eq!(config.extractor.min_word_length, 4);
        assert_eq!(config.extractor.custom_punctuation, "-");
        assert_eq!(config.user_dictionary_name.as_deref(), Some("mine"));
        assert_eq!(config.custom_dictionary, None);

        let mut options: Vec<_> = errors.iter().map(|e| e.option.as_str()).collect();
        options.sort_unstable();
        assert_eq!(options, vec!["lang", "minWordLength"]);
        assert!(errors.iter().all(|e| !e.critical));
    }

    #[test]
    fn test_from_options_not_an_object() {
        let (config, errors) = ClientConfig::from_options(&json!("nope"));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Parameter options should have a type - object."
        );
    }

    #[test]
    fn test_extractor_config_uses_client_language() {
        let config = ClientConfig {
            lang: "th_TH".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.extractor_config().language.as_deref(),
            Some("th_TH")
        );

        let explicit = ClientConfig {
            extractor: ExtractorConfig::new().with_language("ko_KR"),
            ..config
        };
        assert_eq!(
            explicit.extractor_config().language.as_deref(),
            Some("ko_KR")
        );
    }
}
