use serde_json::{Map, Value};

use crate::error::AuthError;

/// Rebuilds a JSON value with every mapping's keys in ascending
/// lexicographic order, recursively. Sequences keep their element
/// order — position is semantically significant there, key order is
/// not. Scalars pass through unchanged.
///
/// The result does not depend on the insertion order of the input
/// maps, and applying the function twice yields the same value.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, val) in entries {
                sorted.insert(key.clone(), canonicalize(val));
            }
            Value::Object(sorted)
        }
        scalar => scalar.clone(),
    }
}

/// Serializes the canonical form of `value` to bytes.
///
/// serde_json's scalar encoding is fixed (shortest-roundtrip floats,
/// `true`/`false`/`null` tokens), so two processes canonicalizing the
/// same logical value always produce identical bytes. These bytes are
/// what gets hashed and signed.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, AuthError> {
    serde_json::to_vec(&canonicalize(value))
        .map_err(|e| AuthError::MalformedRequest(format!("canonical serialization: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_permutations_canonicalize_identically() {
        let a = json!({"b": 2, "a": 1, "c": {"z": true, "y": false}});
        let b = json!({"c": {"y": false, "z": true}, "a": 1, "b": 2});
        assert_eq!(canonical_bytes(&a).unwrap(), canonical_bytes(&b).unwrap());
    }

    #[test]
    fn keys_are_sorted_at_every_level() {
        let value = json!({"outer": {"zulu": 1, "alpha": {"delta": 2, "bravo": 3}}});
        let bytes = canonical_bytes(&value).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"outer":{"alpha":{"bravo":3,"delta":2},"zulu":1}}"#
        );
    }

    #[test]
    fn sequence_order_is_preserved() {
        let value = json!({"items": [3, 1, 2]});
        let text = String::from_utf8(canonical_bytes(&value).unwrap()).unwrap();
        assert_eq!(text, r#"{"items":[3,1,2]}"#);
    }

    #[test]
    fn maps_nested_in_sequences_are_sorted() {
        let value = json!([{"b": 1, "a": 2}, {"d": 3, "c": 4}]);
        let text = String::from_utf8(canonical_bytes(&value).unwrap()).unwrap();
        assert_eq!(text, r#"[{"a":2,"b":1},{"c":4,"d":3}]"#);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let value = json!({"m": {"b": [true, null, 1.5], "a": "x"}});
        let once = canonicalize(&value);
        let twice = canonicalize(&once);
        assert_eq!(once, twice);
        assert_eq!(
            canonical_bytes(&once).unwrap(),
            canonical_bytes(&value).unwrap()
        );
    }

    #[test]
    fn reparse_roundtrip_is_stable() {
        let value = json!({"z": 1, "a": {"k": [1, 2], "j": "s"}});
        let bytes = canonical_bytes(&value).unwrap();
        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(canonical_bytes(&reparsed).unwrap(), bytes);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(canonicalize(&json!(42)), json!(42));
        assert_eq!(canonicalize(&json!("text")), json!("text"));
        assert_eq!(canonicalize(&json!(null)), json!(null));
        assert_eq!(canonicalize(&json!(true)), json!(true));
    }
}
