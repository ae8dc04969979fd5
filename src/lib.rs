//! Recaser
//!
//! A Rust library for recursively recasing the keys of nested data
//! structures (objects, arrays, primitives) from one naming convention to
//! another, for use at API and service boundaries where a wire format and an
//! internal model disagree about `first_name` versus `firstName`.
//!
//! The input is never mutated; every call builds an independent output tree.
//! Partial failures during traversal are aggregated into a string-keyed
//! error map rather than short-circuiting.
//!
//! ```
//! use recaser::{Case, Recaser, RecaserConfig, Value};
//! use serde_json::json;
//!
//! let recaser = Recaser::new(
//!     RecaserConfig::new().with_case(Case::Camel).with_deep(true),
//! );
//!
//! let input = Value::from(json!({"id": 1, "first-name": "Joe", "last_name": "Hartzell"}));
//! let outcome = recaser.process(&input);
//!
//! assert!(outcome.is_success());
//! assert_eq!(
//!     serde_json::Value::from(outcome.value.unwrap()),
//!     json!({"id": 1, "firstName": "Joe", "lastName": "Hartzell"}),
//! );
//! ```

pub mod error;
pub mod recase;
pub mod value;

// Re-export commonly used types
pub use error::{ErrorMap, RecaseError, RecaseErrorKind, RecaseResult};
pub use recase::{recase_key, Case, Recaser, RecaserConfig, RecaseOutcome};
pub use value::{Map, Value};

/// Recase a `serde_json::Value` with the given configuration
pub fn recase_value(json: &serde_json::Value, config: &RecaserConfig) -> RecaseOutcome {
    let recaser = Recaser::new(config.clone());
    recaser.process(&Value::from(json))
}

/// Parse a JSON string and recase it with the given configuration
pub fn recase_str(json: &str, config: &RecaserConfig) -> RecaseResult<RecaseOutcome> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(recase_value(&parsed, config))
}
