use url::form_urlencoded::byte_serialize;

use crate::domain::{ParamValue, Params};

/// Encode params as `application/x-www-form-urlencoded`.
///
/// List values expand into one `key[]=value` pair per element. Key order and element
/// order are preserved.
pub fn encode_form(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        let key = escape(key);
        match value {
            ParamValue::Scalar(value) => push_pair(&mut out, &key, value),
            ParamValue::List(values) => {
                let key = format!("{key}[]");
                for value in values {
                    push_pair(&mut out, &key, value);
                }
            }
        }
    }
    out
}

fn push_pair(out: &mut String, encoded_key: &str, value: &str) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(encoded_key);
    out.push('=');
    out.push_str(&escape(value));
}

fn escape(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
