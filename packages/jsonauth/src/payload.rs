//! Payload serialization
//!
//! A payload is any value whose JSON form is an object. Key order follows
//! insertion order for maps and declaration order for structs, so the same
//! value built the same way always serializes to the same bytes and therefore
//! signs to the same token. Nothing here sorts keys.

use crate::error::{TokenError, TokenResult};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Insertion-ordered JSON object carried by a token
pub type Payload = Map<String, Value>;

/// Convert any serializable value into an object-shaped payload
///
/// # Errors
/// Returns [`TokenError::InvalidPayload`] if the value cannot be represented
/// as JSON or is not a JSON object.
pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> TokenResult<Payload> {
    match serde_json::to_value(value).map_err(|e| TokenError::invalid_payload(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(TokenError::invalid_payload(format!(
            "expected an object, found {}",
            kind(&other)
        ))),
    }
}

/// Serialize a payload into compact JSON text
///
/// # Errors
/// Returns [`TokenError::InvalidPayload`] if the value is not a JSON object.
pub fn serialize<T: Serialize + ?Sized>(payload: &T) -> TokenResult<Vec<u8>> {
    let map = to_payload(payload)?;
    serde_json::to_vec(&map).map_err(|e| TokenError::invalid_payload(e.to_string()))
}

/// Parse JSON text back into a payload (or any other deserializable type)
///
/// # Errors
/// Returns [`TokenError::MalformedPayload`] if `bytes` is not valid JSON or
/// does not match the shape of `T`.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> TokenResult<T> {
    serde_json::from_slice(bytes).map_err(|e| TokenError::malformed_payload(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        admin: bool,
        visits: u32,
    }

    #[test]
    fn test_serialize_is_compact() -> TokenResult<()> {
        let bytes = serialize(&json!({"key": "value", "key2": "value2"}))?;
        assert_eq!(bytes, br#"{"key":"value","key2":"value2"}"#);
        Ok(())
    }

    #[test]
    fn test_serialize_keeps_insertion_order() -> TokenResult<()> {
        let mut payload = Payload::new();
        payload.insert("zeta".into(), json!(1));
        payload.insert("alpha".into(), json!(2));
        payload.insert("mid".into(), json!(3));

        assert_eq!(serialize(&payload)?, br#"{"zeta":1,"alpha":2,"mid":3}"#);
        Ok(())
    }

    #[test]
    fn test_serialize_struct_field_order() -> TokenResult<()> {
        let session = Session {
            user: "ada".into(),
            admin: false,
            visits: 3,
        };
        assert_eq!(
            serialize(&session)?,
            br#"{"user":"ada","admin":false,"visits":3}"#
        );
        Ok(())
    }

    #[test]
    fn test_serialize_rejects_non_objects() {
        for value in [
            json!([1, 2, 3]),
            json!([]),
            json!("text"),
            json!(42),
            json!(true),
            json!(null),
        ] {
            assert!(
                matches!(serialize(&value), Err(TokenError::InvalidPayload(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_serialize_rejects_rust_sequences() {
        assert!(matches!(
            serialize(&vec!["a", "b"]),
            Err(TokenError::InvalidPayload(_))
        ));
        assert!(matches!(serialize(&7u8), Err(TokenError::InvalidPayload(_))));
    }

    #[test]
    fn test_serialize_rejects_non_string_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], "value");
        assert!(matches!(serialize(&map), Err(TokenError::InvalidPayload(_))));
    }

    #[test]
    fn test_empty_object_is_valid() -> TokenResult<()> {
        assert_eq!(serialize(&json!({}))?, b"{}");
        Ok(())
    }

    #[test]
    fn test_deserialize_payload() -> TokenResult<()> {
        let payload: Payload = deserialize(br#"{"b":[1,2],"a":{"nested":null}}"#)?;
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(payload["b"], json!([1, 2]));
        Ok(())
    }

    #[test]
    fn test_deserialize_typed() -> TokenResult<()> {
        let session: Session = deserialize(br#"{"user":"ada","admin":true,"visits":9}"#)?;
        assert_eq!(
            session,
            Session {
                user: "ada".into(),
                admin: true,
                visits: 9
            }
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_invalid_json() {
        assert!(matches!(
            deserialize::<Payload>(b"{not json"),
            Err(TokenError::MalformedPayload(_))
        ));
        assert!(matches!(
            deserialize::<Payload>(b"[1,2]"),
            Err(TokenError::MalformedPayload(_))
        ));
    }
}
