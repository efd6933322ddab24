//! Request parameters for the spell-check service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

/// Service command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Check a comma separated word list.
    CheckSpelling,
    /// Check the grammar of a text.
    GrammarCheck,
    /// List the supported languages.
    GetLangList,
}

impl Command {
    /// Name of the command on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::CheckSpelling => "check_spelling",
            Command::GrammarCheck => "grammar_check",
            Command::GetLangList => "get_lang_list",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one service request, serialized with the service's names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    #[serde(rename = "cmd")]
    pub command: Command,
    #[serde(rename = "slang", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "customerid", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "format", skip_serializing_if = "Option::is_none")]
    pub communication_format: Option<String>,
    #[serde(rename = "user_dictionary", skip_serializing_if = "Option::is_none")]
    pub user_dictionary: Option<String>,
    #[serde(rename = "custom_dictionary", skip_serializing_if = "Option::is_none")]
    pub custom_dictionary: Option<String>,
}

impl RequestParams {
    /// Bare parameters for `command`.
    pub fn new(command: Command) -> Self {
        RequestParams {
            command,
            language: None,
            text: None,
            customer_id: None,
            communication_format: None,
            user_dictionary: None,
            custom_dictionary: None,
        }
    }

    /// Parameters for `command` carrying the defaults every request sends.
    ///
    /// The language list endpoint does not accept a format, so none is set
    /// for [`Command::GetLangList`].
    pub fn for_config(command: Command, config: &ClientConfig) -> Self {
        let mut params = RequestParams::new(command);
        params.customer_id = config.customer_id.clone();
        if command != Command::GetLangList {
            params.communication_format = Some(config.communication_format.clone());
        }
        params
    }

    /// Set the `slang` language code.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the text or comma-joined word list to check.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the user dictionary name, if any.
    pub fn with_user_dictionary(mut self, name: Option<String>) -> Self {
        self.user_dictionary = name;
        self
    }

    /// Set the custom dictionary ids, if any.
    pub fn with_custom_dictionary(mut self, ids: Option<String>) -> Self {
        self.custom_dictionary = ids;
        self
    }

    /// Parameters as `(wire name, value)` pairs, e.g. for a query string.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let optional = [
            ("slang", &self.language),
            ("text", &self.text),
            ("customerid", &self.customer_id),
            ("format", &self.communication_format),
            ("user_dictionary", &self.user_dictionary),
            ("custom_dictionary", &self.custom_dictionary),
        ];

        std::iter::once(("cmd", self.command.as_str().to_string()))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(name, value)| value.clone().map(|value| (name, value))),
            )
            .collect()
    }
}
