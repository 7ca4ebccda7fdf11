use serde::Serialize;
use serde_json::Value;

/// Serialize a payload as JSON, dropping every `null` object member at any depth.
pub fn encode_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(payload)?;
    strip_nulls(&mut value);
    serde_json::to_string(&value)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn drops_null_members_recursively() {
        let payload = json!({
            "message": "hi",
            "task_name": null,
            "additional": {"button": null, "image": {"link": "x"}},
            "list": [{"a": null, "b": 1}]
        });
        assert_eq!(
            encode_json(&payload).unwrap(),
            r#"{"message":"hi","additional":{"image":{"link":"x"}},"list":[{"b":1}]}"#
        );
    }

    #[test]
    fn keeps_null_array_elements_positional() {
        assert_eq!(encode_json(&json!([1, null])).unwrap(), "[1,null]");
    }

    #[test]
    fn serializes_option_fields_as_omitted() {
        #[derive(Serialize)]
        struct Body {
            sender: Option<String>,
            id: u64,
        }

        assert_eq!(
            encode_json(&Body {
                sender: None,
                id: 1
            })
            .unwrap(),
            r#"{"id":1}"#
        );
    }
}
