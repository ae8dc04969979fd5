//! Core recasing engine
//!
//! One entry point, [`Recaser::process`], dispatching on the value's tag to
//! one of three strategies: arrays recurse per element and aggregate
//! failures, objects recase their keys (and recurse when deep mode is on),
//! and everything else - including dates - passes through untouched. The
//! input is never mutated; output is a freshly built tree.

use super::config::RecaserConfig;
use super::key::recase_key;
use super::outcome::RecaseOutcome;
use crate::error::{ErrorMap, RecaseErrorKind};
use crate::value::{Map, Value};

/// Recursive key-recasing engine.
///
/// Configured once, then usable for any number of [`process`] calls. Holds
/// no state across calls, so a single instance is safe to share between
/// threads.
///
/// [`process`]: Recaser::process
#[derive(Debug, Clone, Default)]
pub struct Recaser {
    config: RecaserConfig,
}

impl Recaser {
    /// Create a new recaser with the given configuration
    pub fn new(config: RecaserConfig) -> Self {
        Self { config }
    }

    /// The configuration this recaser was built with
    pub fn config(&self) -> &RecaserConfig {
        &self.config
    }

    /// Recase a value into a new value.
    ///
    /// Classifies the input once by its tag and dispatches to the matching
    /// strategy. When the strategy reports errors the outcome's value is
    /// `None`; otherwise the rebuilt value is adopted as-is, explicitly
    /// including `Null`, `false`, `0`, and the empty string - success is a
    /// property of the error map, not of the value's truthiness.
    pub fn process(&self, data: &Value) -> RecaseOutcome {
        let outcome = match data {
            Value::Array(_) => self.recase_array(data),
            Value::Object(_) => self.recase_object(data),
            // Dates, strings, numbers, booleans, null: opaque passthrough
            _ => self.recase_primitive(data),
        };

        if outcome.is_success() {
            outcome
        } else {
            RecaseOutcome {
                value: None,
                errors: outcome.errors,
            }
        }
    }

    /// Array strategy: recase every element in order.
    ///
    /// An element whose recursion fails outright (errors and no value) is
    /// dropped from the output, with its errors merged last-write-wins into
    /// the accumulated map; no placeholder is inserted. The returned outcome
    /// may carry a partial array alongside errors - [`process`] nulls the
    /// value at the outer level once any error is present.
    ///
    /// [`process`]: Recaser::process
    pub fn recase_array(&self, data: &Value) -> RecaseOutcome {
        let Value::Array(items) = data else {
            return RecaseOutcome::failure("data", RecaseErrorKind::NotAnArray);
        };

        let mut errors = ErrorMap::new();
        let mut output = Vec::with_capacity(items.len());

        for item in items {
            let recursed = self.process(item);
            if !recursed.is_success() && recursed.value.is_none() {
                errors.merge(recursed.errors);
            } else if let Some(value) = recursed.value {
                output.push(value);
            }
        }

        RecaseOutcome::partial(Value::Array(output), errors)
    }

    /// Object strategy: recase every key into a freshly allocated map.
    ///
    /// Keys are visited in insertion order. In deep mode the value under
    /// each key is recursed through [`process`] and the recursed value is
    /// written under the recased key (a failed recursion writes `Null`); in
    /// shallow mode the source value is copied unchanged. Two source keys
    /// recasing to the same destination key collapse last-write-wins, per
    /// ordinary map semantics.
    ///
    /// Dates never reach this strategy: classification happens on the value
    /// tag, and `Date` is not `Object`.
    ///
    /// [`process`]: Recaser::process
    pub fn recase_object(&self, data: &Value) -> RecaseOutcome {
        let Value::Object(entries) = data else {
            return RecaseOutcome::failure("data", RecaseErrorKind::NotAnObject);
        };

        let mut output = Map::with_capacity(entries.len());

        for (key, source) in entries {
            let dest_key = recase_key(key, &self.config);
            let dest_value = if self.config.deep {
                self.process(source).value.unwrap_or(Value::Null)
            } else {
                source.clone()
            };
            output.insert(dest_key, dest_value);
        }

        RecaseOutcome::success(Value::Object(output))
    }

    /// Primitive strategy: return the value unchanged
    pub fn recase_primitive(&self, data: &Value) -> RecaseOutcome {
        RecaseOutcome::success(data.clone())
    }
}
