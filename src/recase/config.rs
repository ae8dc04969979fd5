//! Configuration options for key recasing

use crate::error::{RecaseError, RecaseResult};
use serde::{Deserialize, Serialize};

/// Target naming convention for recased keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// kebab-case (`first-name`)
    Kebab,
    /// snake_case (`first_name`)
    Snake,
    /// lowerCamelCase (`firstName`)
    Camel,
}

impl Case {
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Camel => "camel",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "snake" | "snake_case" => Ok(Case::Snake),
            "camel" | "camelcase" => Ok(Case::Camel),
            other => Err(format!(
                "Invalid case '{}'. Use 'kebab', 'snake', or 'camel'",
                other
            )),
        }
    }
}

/// Recasing configuration options.
///
/// Immutable for the lifetime of a [`Recaser`](crate::Recaser); every field
/// defaults to "do nothing": no target case means keys pass through verbatim,
/// shallow mode leaves nested values untouched, and no delimiter means keys
/// are recased whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecaserConfig {
    /// Naming convention to recase keys into. `None` passes keys through.
    pub target_case: Option<Case>,
    /// Recurse into nested objects and arrays. Off by default: only
    /// top-level keys are recased and nested values are copied as-is.
    pub deep: bool,
    /// Separator for compound "namespaced" keys. When set, keys are split on
    /// it, each segment recased independently, and rejoined with the literal
    /// delimiter.
    pub namespace_delimiter: Option<String>,
}

impl RecaserConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target case
    pub fn with_case(mut self, case: Case) -> Self {
        self.target_case = Some(case);
        self
    }

    /// Enable or disable deep traversal
    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Set the namespace delimiter
    pub fn with_namespace_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.namespace_delimiter = Some(delimiter.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RecaseResult<()> {
        if let Some(delimiter) = &self.namespace_delimiter {
            if delimiter.is_empty() {
                return Err(RecaseError::configuration(
                    "namespace delimiter must not be empty",
                ));
            }
        }
        Ok(())
    }
}
