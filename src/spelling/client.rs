//! Spell-check client.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::grammar::GrammarProblem;
use super::misspelling::{LocatedMisspelling, Misspelling, locate_misspellings};
use super::request::{Command, RequestParams};
use super::transport::Transport;
use crate::analysis::word_extractor::WordExtractor;
use crate::config::ClientConfig;
use crate::error::{Result, SpellbridgeError};

/// Languages supported by the service, by writing direction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Languages {
    #[serde(default)]
    pub ltr: BTreeMap<String, String>,
    #[serde(default)]
    pub rtl: BTreeMap<String, String>,
}

/// Response of the language list command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LangList {
    pub lang_list: Languages,
    #[serde(default)]
    pub ver_lang: u32,
}

/// Client for the spell-check service.
///
/// Text is never sent as is for spell checking: the client extracts the
/// distinct words, sends them as a comma separated list and maps the
/// misspellings in the response back onto every occurrence in the text.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use spellbridge::config::ClientConfig;
/// use spellbridge::error::Result;
/// use spellbridge::spelling::{RequestParams, SpellCheckClient};
///
/// let transport = |params: &RequestParams| -> Result<Value> {
///     assert_eq!(params.text.as_deref(), Some("This,exampl"));
///     Ok(json!([{"word": "exampl", "ud": "false", "suggestions": ["example"]}]))
/// };
/// let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();
///
/// let misspellings = client.spell_check("This is an exampl.").unwrap();
/// assert_eq!(misspellings[0].range(), 11..17);
/// ```
pub struct SpellCheckClient<T: Transport> {
    config: ClientConfig,
    extractor: WordExtractor,
    transport: T,
}

impl<T: Transport> SpellCheckClient<T> {
    /// Create a client for `config` that sends requests through `transport`.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let extractor = WordExtractor::new(config.extractor_config())?;
        Ok(SpellCheckClient {
            config,
            extractor,
            transport,
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The word extractor built from the configuration.
    pub fn extractor(&self) -> &WordExtractor {
        &self.extractor
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the custom punctuation used for word extraction.
    pub fn set_custom_punctuation(&mut self, chars: &str) -> Result<()> {
        self.extractor.set_custom_punctuation(chars)?;
        self.config.extractor.custom_punctuation = chars.to_string();
        Ok(())
    }

    /// Check the spelling of `text`.
    ///
    /// Returns one entry per misspelled occurrence, left to right. No request
    /// is made when the text has no word long enough to check.
    pub fn spell_check(&self, text: &str) -> Result<Vec<LocatedMisspelling>> {
        let words = self.extractor.extract_words(text)?;
        if words.is_empty() {
            debug!("no words to check");
            return Ok(Vec::new());
        }

        let params = RequestParams::for_config(Command::CheckSpelling, &self.config)
            .with_language(&self.config.lang)
            .with_custom_dictionary(self.config.custom_dictionary.clone())
            .with_user_dictionary(self.config.user_dictionary_name.clone())
            .with_text(words.joined_words(","));

        let misspellings: Vec<Misspelling> = self.send(&params)?;
        let located = locate_misspellings(&misspellings, &words.words_offsets);
        info!(
            "{} of {} words misspelled, {} occurrences",
            misspellings.len(),
            words.words_collection.len(),
            located.len()
        );
        Ok(located)
    }

    /// Check the grammar of `text`.
    pub fn grammar_check(&self, text: &str) -> Result<Vec<GrammarProblem>> {
        let params = RequestParams::for_config(Command::GrammarCheck, &self.config)
            .with_language(&self.config.lang)
            .with_text(text);

        let problems: Vec<GrammarProblem> = self.send(&params)?;
        info!("{} grammar problems", problems.len());
        Ok(problems)
    }

    /// List the languages the service supports.
    pub fn lang_list(&self) -> Result<LangList> {
        self.send(&RequestParams::for_config(Command::GetLangList, &self.config))
    }

    fn send<R: DeserializeOwned>(&self, params: &RequestParams) -> Result<R> {
        debug!("sending {} request", params.command);
        let response = self.transport.request(params)?;

        if let Some(message) = service_error(&response) {
            return Err(SpellbridgeError::transport(format!(
                "{} failed: {message}",
                params.command
            )));
        }
        Ok(serde_json::from_value(response)?)
    }
}

fn service_error(response: &Value) -> Option<String> {
    let error = response.as_object()?.get("error")?;
    Some(match error.as_str() {
        Some(message) => message.to_string(),
        None => error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_spell_check_sends_word_list() {
        let sent = RefCell::new(Vec::new());
        let transport = |params: &RequestParams| -> Result<Value> {
            sent.borrow_mut().push(params.clone());
            Ok(json!([{"word": "tset", "ud": "false", "suggestions": ["test"]}]))
        };
        let config = ClientConfig {
            user_dictionary_name: Some("mine".to_string()),
            ..ClientConfig::default()
        };
        let client = SpellCheckClient::new(config, transport).unwrap();

        let located = client.spell_check("tset, more tset!").unwrap();

        let sent = sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].command, Command::CheckSpelling);
        assert_eq!(sent[0].text.as_deref(), Some("tset,more"));
        assert_eq!(sent[0].language.as_deref(), Some("en_US"));
        assert_eq!(sent[0].user_dictionary.as_deref(), Some("mine"));
        assert_eq!(sent[0].communication_format.as_deref(), Some("json"));

        let ranges: Vec<_> = located.iter().map(LocatedMisspelling::range).collect();
        assert_eq!(ranges, vec![0..4, 11..15]);
    }

    #[test]
    fn test_spell_check_without_words_skips_request() {
        let transport = |_: &RequestParams| -> Result<Value> {
            Err(SpellbridgeError::transport("should not be called"))
        };
        let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        assert!(client.spell_check("a b c ... !!").unwrap().is_empty());
    }

    #[test]
    fn test_service_error() {
        let transport =
            |_: &RequestParams| -> Result<Value> { Ok(json!({"error": "bad customer id"})) };
        let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        let err = client.grammar_check("Some text").unwrap_err();
        assert!(matches!(err, SpellbridgeError::Transport(_)));
        assert!(err.to_string().contains("bad customer id"));
    }

    #[test]
    fn test_unexpected_response_shape() {
        let transport = |_: &RequestParams| -> Result<Value> { Ok(json!({"unexpected": true})) };
        let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        assert!(matches!(
            client.spell_check("some words here").unwrap_err(),
            SpellbridgeError::Json(_)
        ));
    }

    #[test]
    fn test_grammar_check_sends_raw_text() {
        let transport = |params: &RequestParams| -> Result<Value> {
            assert_eq!(params.command, Command::GrammarCheck);
            assert_eq!(params.text.as_deref(), Some("These are an examples."));
            Ok(json!([{
                "phrase": "an examples",
                "description": "Agreement.",
                "problem_id": "1",
                "suggestions": ["an example", "examples"],
            }]))
        };
        let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        let problems = client.grammar_check("These are an examples.").unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].suggestions.len(), 2);
    }

    #[test]
    fn test_lang_list() {
        let transport = |params: &RequestParams| -> Result<Value> {
            assert_eq!(params.communication_format, None);
            Ok(json!({
                "langList": {"ltr": {"en_US": "American English"}, "rtl": {"ar_EG": "Arabic"}},
                "verLang": 9,
            }))
        };
        let client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        let langs = client.lang_list().unwrap();
        assert_eq!(langs.ver_lang, 9);
        assert_eq!(langs.lang_list.ltr["en_US"], "American English");
        assert!(langs.lang_list.rtl.contains_key("ar_EG"));
    }

    #[test]
    fn test_custom_punctuation_changes_words() {
        let transport = |params: &RequestParams| -> Result<Value> {
            Ok(json!([{"word": params.text.clone().unwrap_or_default(), "suggestions": []}]))
        };
        let mut client = SpellCheckClient::new(ClientConfig::default(), transport).unwrap();

        client.set_custom_punctuation("\u{B7}").unwrap();
        assert_eq!(client.config().extractor.custom_punctuation, "\u{B7}");

        let located = client.spell_check("abcd\u{B7}").unwrap();
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].word(), "abcd");
    }
}
