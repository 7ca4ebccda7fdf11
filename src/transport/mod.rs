//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod form;
mod json;
mod normalize;

pub use form::encode_form;
pub use json::encode_json;
pub use normalize::normalize;

use crate::domain::{Encoding, HttpMethod, Payload, RequestDescriptor};

/// Fully encoded request, ready for an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
    pub bearer: Option<String>,
}

/// Raw status and body of an HTTP response, read for every status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Encode a descriptor against `base_url`.
///
/// GET requests carry form params in the query string and never have a body.
/// `bearer` is only attached when the descriptor asks for authorization.
pub fn encode_request(
    base_url: &str,
    descriptor: &RequestDescriptor,
    bearer: Option<&str>,
) -> Result<HttpRequest, serde_json::Error> {
    let mut url = join_url(base_url, &descriptor.path);
    let bearer = bearer
        .filter(|_| descriptor.use_auth)
        .map(str::to_owned);

    if descriptor.method == HttpMethod::Get {
        if let Payload::Form(params) = &descriptor.payload {
            let query = encode_form(params);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }
        return Ok(HttpRequest {
            method: descriptor.method,
            url,
            content_type: None,
            body: None,
            bearer,
        });
    }

    let body = match &descriptor.payload {
        Payload::Form(params) => encode_form(params),
        Payload::Json(value) => encode_json(value)?,
    };

    Ok(HttpRequest {
        method: descriptor.method,
        url,
        content_type: Some(descriptor.encoding().content_type()),
        body: Some(body),
        bearer,
    })
}

/// Join base URL and path with exactly one slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
