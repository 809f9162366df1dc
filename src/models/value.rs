//! Cache value type for the process-wide cache

use serde::{Deserialize, Serialize};

/// Payload of an object cache entry.
///
/// `Json` carries arbitrary structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CacheValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl CacheValue {
    /// Returns the text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CacheValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CacheValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Text(value.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(value: String) -> Self {
        CacheValue::Text(value)
    }
}

impl From<i64> for CacheValue {
    fn from(value: i64) -> Self {
        CacheValue::Integer(value)
    }
}

impl From<f64> for CacheValue {
    fn from(value: f64) -> Self {
        CacheValue::Float(value)
    }
}

impl From<bool> for CacheValue {
    fn from(value: bool) -> Self {
        CacheValue::Boolean(value)
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(value: Vec<u8>) -> Self {
        CacheValue::Bytes(value)
    }
}

impl From<serde_json::Value> for CacheValue {
    fn from(value: serde_json::Value) -> Self {
        CacheValue::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_conversions() {
        assert_eq!(CacheValue::from("Test").as_text(), Some("Test"));
        assert_eq!(CacheValue::from(12_i64).as_integer(), Some(12));
        assert_eq!(CacheValue::from(true), CacheValue::Boolean(true));
        assert_eq!(CacheValue::from(1.5), CacheValue::Float(1.5));
        assert!(CacheValue::from(vec![1_u8, 2]).as_text().is_none());
    }

    #[test]
    fn test_value_json_round_trip() {
        let value = CacheValue::from(json!({ "id": 3, "tags": ["a", "b"] }));
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: CacheValue = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, value);
    }
}
