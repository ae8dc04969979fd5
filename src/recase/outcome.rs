//! Recasing result carrier

use crate::error::{ErrorMap, RecaseError, RecaseErrorKind, RecaseResult};
use crate::value::Value;

/// The outcome of one recasing call.
///
/// Success is decided by the error map, never by the shape of the value:
/// `value` may legitimately hold `Null`, `false`, `0`, or an empty string,
/// and those are successes. Callers must check [`is_success`] (or the error
/// map) before interpreting `value`; `None` alongside errors means the call
/// failed, `None` without errors never escapes the entry point.
///
/// [`is_success`]: RecaseOutcome::is_success
#[derive(Debug, Clone, PartialEq)]
pub struct RecaseOutcome {
    /// The rebuilt value, or `None` when recasing failed.
    pub value: Option<Value>,
    /// Accumulated failures, keyed by error site.
    pub errors: ErrorMap,
}

impl RecaseOutcome {
    /// A successful outcome carrying a value
    pub fn success(value: Value) -> Self {
        Self {
            value: Some(value),
            errors: ErrorMap::new(),
        }
    }

    /// A failed outcome carrying a single keyed error
    pub fn failure(key: impl Into<String>, kind: RecaseErrorKind) -> Self {
        Self {
            value: None,
            errors: ErrorMap::single(key, kind.to_string()),
        }
    }

    /// A partial outcome: a value alongside accumulated errors. Produced by
    /// array traversal, where siblings of a failed element still succeed.
    pub fn partial(value: Value, errors: ErrorMap) -> Self {
        Self {
            value: Some(value),
            errors,
        }
    }

    /// True when no errors were recorded
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Convert into a `Result` for `?`-style propagation. Failures collapse
    /// the error map into a single aggregate error.
    pub fn into_result(self) -> RecaseResult<Value> {
        if self.errors.is_empty() {
            Ok(self.value.unwrap_or(Value::Null))
        } else {
            Err(RecaseError::aggregate(self.errors))
        }
    }
}
