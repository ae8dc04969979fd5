//! Key recasing module
//!
//! This module contains the recasing engine, its configuration, and the
//! per-key conversion it is built on.

pub mod config;
pub mod engine;
pub mod key;
pub mod outcome;

pub use config::{Case, RecaserConfig};
pub use engine::Recaser;
pub use key::recase_key;
pub use outcome::RecaseOutcome;
