//! Barb: file-driven search and replace
//!
//! This library exposes barb's core functionality for integration and
//! property-based tests. The main binary is at src/main.rs.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod matcher;

// Re-export commonly used types for convenience
pub use config::{MatchMode, RegexDefaults, RunConfig};
pub use engine::{FileReport, ReplacementEngine};
pub use error::Error;
pub use matcher::Matcher;
