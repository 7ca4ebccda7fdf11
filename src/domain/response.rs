use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq)]
/// Result shape shared by every SendPulse operation.
///
/// Local validation failures, transport failures and remote responses all land here,
/// so callers branch on [`SendPulseResponse::is_error`] instead of error types.
///
/// Invariant: `is_error` is `true` whenever `http_status_code != 200`. A status code of
/// `0` means no response was received.
pub struct SendPulseResponse {
    pub http_status_code: u16,
    pub is_error: bool,
    /// Parsed JSON body; only objects and arrays are kept.
    pub data: Option<Value>,
    /// Message produced by this crate (validation or transport failure).
    pub sdk_error_message: Option<String>,
}

impl SendPulseResponse {
    /// Status code used when no HTTP response was received.
    pub const NO_RESPONSE: u16 = 0;

    /// Result of a completed HTTP exchange.
    pub fn from_http(http_status_code: u16, data: Option<Value>) -> Self {
        Self {
            http_status_code,
            is_error: http_status_code != 200,
            data,
            sdk_error_message: None,
        }
    }

    /// Error produced before any response was received.
    pub fn local_error(message: impl Into<String>) -> Self {
        Self {
            http_status_code: Self::NO_RESPONSE,
            is_error: true,
            data: None,
            sdk_error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        !self.is_error
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    /// Deserialize the payload into a caller-provided type.
    ///
    /// Returns `Ok(None)` when there is no payload.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.data
            .as_ref()
            .map(|data| T::deserialize(data))
            .transpose()
    }
}

impl From<ValidationError> for SendPulseResponse {
    fn from(value: ValidationError) -> Self {
        Self::local_error(value.to_string())
    }
}
