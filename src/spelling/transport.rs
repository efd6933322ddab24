//! The seam between the client and whatever carries requests to the service.

use serde_json::Value;

use super::request::RequestParams;
use crate::error::Result;

/// Sends one request and returns the decoded response body.
///
/// Any `Fn(&RequestParams) -> Result<Value>` is a transport, which is handy
/// for tests and for wrapping an HTTP client.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use spellbridge::error::Result;
/// use spellbridge::spelling::{Command, RequestParams, Transport};
///
/// let echo = |params: &RequestParams| -> Result<Value> { Ok(json!(params.command.as_str())) };
/// let params = RequestParams::new(Command::GetLangList);
///
/// assert_eq!(echo.request(&params).unwrap(), json!("get_lang_list"));
/// ```
pub trait Transport {
    /// Send `params` to the service and return the JSON response body.
    fn request(&self, params: &RequestParams) -> Result<Value>;
}

impl<F> Transport for F
where
    F: Fn(&RequestParams) -> Result<Value>,
{
    fn request(&self, params: &RequestParams) -> Result<Value> {
        self(params)
    }
}
