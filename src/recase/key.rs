//! Single-key recasing
//!
//! Converts one raw key string into the configured target case. Compound
//! "namespaced" keys are split on the configured delimiter, each segment
//! converted independently, and rejoined with the literal delimiter - the
//! delimiter itself is never fed through case conversion, so keys like
//! `person/lastName` come back as `person/last_name` and not something the
//! converter invented.

use super::config::{Case, RecaserConfig};
use convert_case::{Boundary, Case as ConvertCase, Casing};

/// Word boundaries for identifier tokens. The defaults plus the
/// lower-to-digit transition, so `line2` splits into `line` + `2` the way
/// mainstream case-conversion libraries treat it.
const BOUNDARIES: &[Boundary] = &[
    Boundary::Underscore,
    Boundary::Hyphen,
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::Acronym,
    Boundary::LowerDigit,
    Boundary::UpperDigit,
    Boundary::DigitLower,
    Boundary::DigitUpper,
];

/// Recase a single key according to the configuration.
///
/// Without a target case the key is returned verbatim. With a namespace
/// delimiter configured, every segment between delimiter occurrences is
/// converted independently; segment count and order are preserved, including
/// empty segments produced by leading, trailing, or adjacent delimiters.
pub fn recase_key(key: &str, config: &RecaserConfig) -> String {
    let Some(case) = config.target_case else {
        return key.to_string();
    };

    match config.namespace_delimiter.as_deref() {
        Some(delimiter) if !delimiter.is_empty() => key
            .split(delimiter)
            .map(|segment| convert_token(segment, case))
            .collect::<Vec<_>>()
            .join(delimiter),
        _ => convert_token(key, case),
    }
}

/// Convert one delimiter-free token into the target case
fn convert_token(token: &str, case: Case) -> String {
    let target = match case {
        Case::Kebab => ConvertCase::Kebab,
        Case::Snake => ConvertCase::Snake,
        Case::Camel => ConvertCase::Camel,
    };
    token.with_boundaries(BOUNDARIES).to_case(target)
}
