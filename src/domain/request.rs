use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verb used by a SendPulse endpoint.
pub(crate) enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Body encoding declared by an endpoint.
pub(crate) enum Encoding {
    /// `application/x-www-form-urlencoded` (also used for GET query strings).
    Form,
    /// `application/json`.
    Json,
}

impl Encoding {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single request parameter value.
pub(crate) enum ParamValue {
    Scalar(String),
    /// Expanded into repeated `key[]=value` pairs when form-encoded.
    List(Vec<String>),
}

impl ParamValue {
    /// Convert a JSON value into a form parameter.
    ///
    /// Strings are kept verbatim, other scalars use their JSON text, arrays become
    /// lists and objects are embedded as compact JSON text. `null` has no form
    /// representation and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Scalar(text)),
            Value::Array(items) => Some(Self::List(
                items
                    .into_iter()
                    .filter(|item| !item.is_null())
                    .map(|item| match item {
                        Value::String(text) => text,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            other => Some(Self::Scalar(other.to_string())),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Insertion-ordered request parameters.
///
/// Inserting a key that is already present replaces its value in place, so the
/// original position is kept.
pub(crate) struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is `Some`.
    pub fn with_opt(self, key: impl Into<String>, value: Option<impl Into<ParamValue>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Insert a count only when it is non-zero (zero limits and offsets are omitted).
    pub fn with_nonzero(self, key: impl Into<String>, value: u32) -> Self {
        if value == 0 { self } else { self.with(key, value) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Build params from a JSON object, dropping `null` members.
    pub fn from_json_map(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter()
            .fold(Self::new(), |params, (key, value)| {
                params.with_opt(key, ParamValue::from_json(value))
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request payload together with its encoding.
pub(crate) enum Payload {
    Form(Params),
    Json(Value),
}

impl Payload {
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Form(_) => Encoding::Form,
            Self::Json(_) => Encoding::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One call to the remote API, created per operation and consumed once.
pub(crate) struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub payload: Payload,
    pub use_auth: bool,
}

impl RequestDescriptor {
    pub fn encoding(&self) -> Encoding {
        self.payload.encoding()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Arguments for `campaigns` creation.
pub struct NewCampaign {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    /// HTML body; base64-encoded before sending.
    pub body: String,
    pub book_id: u64,
    pub name: Option<String>,
    pub send_date: Option<String>,
    /// Pre-serialized attachments payload, passed through unchanged.
    pub attachments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Filter for `smtp/emails` listing. `limit` and `offset` are always sent.
pub struct SmtpEmailFilter {
    pub limit: u32,
    pub offset: u32,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
}

impl Default for SmtpEmailFilter {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            from: None,
            to: None,
            sender: None,
            recipient: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Optional fields for SMS campaign sends.
pub struct SmsSendOptions {
    /// Sent as `transliterate=1` or `transliterate=0`. Defaults to `true`.
    pub transliterate: bool,
    pub sender: Option<String>,
    pub date: Option<String>,
}

impl Default for SmsSendOptions {
    fn default() -> Self {
        Self {
            transliterate: true,
            sender: None,
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recipients an SMS campaign cost is calculated for.
pub enum SmsCostRecipients {
    AddressBook(u64),
    /// Pre-serialized phone list.
    Phones(String),
}
