//! Unit tests for the tagged value model
//!
//! Tests cover:
//! - Classification: dates and primitives are never plain objects
//! - serde_json interop in both directions
//! - Serde round-trips through the Value serializer

use chrono::{TimeZone, Utc};
use recaser::{Map, Value};
use serde_json::json;

#[cfg(test)]
mod value_model_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_classified_as_opaque_not_object() {
        let date = Value::Date(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());

        assert!(date.is_date());
        assert!(date.is_primitive());
        assert!(!date.is_object());
        assert!(!date.is_array());
        assert_eq!(date.as_object(), None);
    }

    #[test]
    fn test_primitive_accessors() {
        assert_eq!(Value::from("joe").as_str(), Some("joe"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(42i64).as_i64(), Some(42));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_from_serde_json_covers_all_shapes() {
        let value = Value::from(json!({
            "s": "x", "n": 1, "f": 2.5, "b": true, "z": null,
            "a": [1, "two"], "o": {"inner": false}
        }));

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(object.get("a").unwrap().as_array().unwrap().len(), 2);
        assert_eq!(
            value.get("o").and_then(|o| o.get("inner")),
            Some(&Value::from(false))
        );
    }

    #[test]
    fn test_into_serde_json_renders_dates_as_strings() {
        let mut map = Map::new();
        map.insert(
            "created_at".to_string(),
            Value::Date(Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap()),
        );

        let json = serde_json::Value::from(Value::Object(map));
        assert_eq!(json, json!({"created_at": "2021-03-14T09:26:53+00:00"}));
    }

    #[test]
    fn test_serde_round_trip() {
        let value = Value::from(json!({"id": 7, "tags": ["a", "b"], "ok": true}));

        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }
}
