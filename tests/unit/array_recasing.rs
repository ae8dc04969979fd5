//! Unit tests for array recasing
//!
//! Tests cover:
//! - Element-wise recursion with order preservation
//! - Primitive and null elements passing through
//! - Non-array rejection with the keyed error message
//! - Nested arrays in deep and shallow mode

use recaser::{Case, Recaser, RecaserConfig, Value};
use serde_json::json;

fn deep(case: Case) -> Recaser {
    Recaser::new(RecaserConfig::new().with_case(case).with_deep(true))
}

#[cfg(test)]
mod array_recasing_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_elements_recased_in_order() {
        let input = Value::from(json!([
            {"first_name": "Joe"},
            {"last_name": "Hartzell"}
        ]));
        let outcome = deep(Case::Kebab).process(&input);

        assert!(outcome.is_success());
        assert_eq!(
            serde_json::Value::from(outcome.value.unwrap()),
            json!([{"first-name": "Joe"}, {"last-name": "Hartzell"}])
        );
    }

    #[test]
    fn test_mixed_primitive_elements_pass_through() {
        let input = Value::from(json!([{"first_name": "Joe"}, 3]));
        let outcome = deep(Case::Kebab).process(&input);

        assert_eq!(
            serde_json::Value::from(outcome.value.unwrap()),
            json!([{"first-name": "Joe"}, 3])
        );
    }

    #[test]
    fn test_falsy_elements_are_not_dropped() {
        let input = Value::from(json!([0, "", false, null]));
        let outcome = deep(Case::Camel).process(&input);

        assert_eq!(
            serde_json::Value::from(outcome.value.unwrap()),
            json!([0, "", false, null])
        );
    }

    #[test]
    fn test_nested_arrays_recurse_in_deep_mode() {
        let input = Value::from(json!([[{"first_name": "Joe"}], []]));
        let outcome = deep(Case::Camel).process(&input);

        assert_eq!(
            serde_json::Value::from(outcome.value.unwrap()),
            json!([[{"firstName": "Joe"}], []])
        );
    }

    #[test]
    fn test_shallow_mode_still_recases_top_level_keys_of_elements() {
        // Array traversal always recurses into elements; deep only controls
        // whether object values recurse further down.
        let recaser = Recaser::new(RecaserConfig::new().with_case(Case::Camel).with_deep(false));
        let input = Value::from(json!([{"first_name": "Joe", "home_address": {"zip_code": 1}}]));
        let outcome = recaser.process(&input);

        assert_eq!(
            serde_json::Value::from(outcome.value.unwrap()),
            json!([{"firstName": "Joe", "homeAddress": {"zip_code": 1}}])
        );
    }

    #[test]
    fn test_empty_array() {
        let outcome = deep(Case::Snake).process(&Value::Array(vec![]));
        assert!(outcome.is_success());
        assert_eq!(outcome.value, Some(Value::Array(vec![])));
    }

    #[test]
    fn test_array_strategy_error_for_non_array() {
        let outcome = deep(Case::Camel).recase_array(&Value::from(json!({"a": 1})));

        assert_eq!(outcome.value, None);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.errors.get("data"),
            Some("data was not an instance of an array")
        );
    }
}
