//! Integration tests for the spell-check client with an in-memory service.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use serde_json::{Value, json};
use spellbridge::prelude::*;
use spellbridge::spelling::{Command, RequestParams};
use tempfile::NamedTempFile;

/// A fake service that knows a fixed set of corrections and records every
/// request it receives.
struct FakeService {
    corrections: HashMap<&'static str, Vec<&'static str>>,
    requests: RefCell<Vec<RequestParams>>,
}

impl FakeService {
    fn new() -> Self {
        let corrections = HashMap::from([
            ("exampl", vec!["example", "examples"]),
            ("mispelled", vec!["misspelled"]),
        ]);
        FakeService {
            corrections,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for FakeService {
    fn request(&self, params: &RequestParams) -> Result<Value> {
        self.requests.borrow_mut().push(params.clone());

        match params.command {
            Command::CheckSpelling => {
                let text = params.text.as_deref().unwrap_or_default();
                let misspellings: Vec<Value> = text
                    .split(',')
                    .filter_map(|word| {
                        self.corrections.get(word).map(|suggestions| {
                            json!({"word": word, "ud": "false", "suggestions": suggestions})
                        })
                    })
                    .collect();
                Ok(Value::Array(misspellings))
            }
            Command::GrammarCheck => Ok(json!([])),
            Command::GetLangList => Err(SpellbridgeError::transport("not supported")),
        }
    }
}

#[test]
fn test_spell_check_round_trip() -> Result<()> {
    let client = SpellCheckClient::new(ClientConfig::default(), FakeService::new())?;
    let text = "This is an exampl of a sentence with two mispelled words. Another exampl.";

    let located = client.spell_check(text)?;

    let requests = client.transport().requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].text.as_deref(),
        Some("This,exampl,sentence,with,mispelled,words,Another")
    );

    let words: Vec<_> = located.iter().map(|m| m.word()).collect();
    assert_eq!(words, vec!["exampl", "mispelled", "exampl"]);
    for misspelling in &located {
        assert_eq!(&text[misspelling.range()], misspelling.word());
    }

    // Apply right to left so earlier offsets stay valid.
    let corrected = located.iter().rev().try_fold(text.to_string(), |text, m| {
        m.apply(&text, &m.suggestions()[0])
    })?;
    assert_eq!(
        corrected,
        "This is an example of a sentence with two misspelled words. Another example."
    );
    Ok(())
}

#[test]
fn test_nothing_to_check() -> Result<()> {
    let client = SpellCheckClient::new(ClientConfig::default(), FakeService::new())?;

    assert!(client.spell_check("a bc def... ?!")?.is_empty());
    assert!(client.transport().requests.borrow().is_empty());
    Ok(())
}

#[test]
fn test_transport_errors_propagate() -> Result<()> {
    let client = SpellCheckClient::new(ClientConfig::default(), FakeService::new())?;

    let err = client.lang_list().unwrap_err();
    assert!(matches!(err, SpellbridgeError::Transport(_)));
    Ok(())
}

#[test]
fn test_client_from_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"{{
            "lang": "en_GB",
            "customerId": "1:abc",
            "customDictionary": "100,200",
            "minWordLength": 3,
            "customPunctuation": "/"
        }}"#
    )?;

    let config = ClientConfig::from_file(file.path())?;
    let client = SpellCheckClient::new(config, FakeService::new())?;
    client.spell_check("and/or exampl")?;

    let requests = client.transport().requests.borrow();
    let params = &requests[0];
    assert_eq!(params.language.as_deref(), Some("en_GB"));
    assert_eq!(params.customer_id.as_deref(), Some("1:abc"));
    assert_eq!(params.custom_dictionary.as_deref(), Some("100,200"));
    assert_eq!(params.text.as_deref(), Some("and,exampl"));
    Ok(())
}

#[test]
fn test_lenient_options() {
    let (config, errors) = ClientConfig::from_options(&json!({
        "lang": "de_DE",
        "minWordLength": "four",
        "customPunctuation": 7,
    }));

    assert_eq!(config.lang, "de_DE");
    assert_eq!(config.extractor.min_word_length, 4);
    assert!(config.extractor.custom_punctuation.is_empty());
    assert_eq!(errors.len(), 2);
}
