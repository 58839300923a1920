//! Run configuration for barb
//!
//! A `RunConfig` is built once by the CLI layer and is immutable for the rest
//! of the invocation. Exactly one match mode is chosen per run and applied
//! uniformly to every target file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// How the pattern text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Pattern is an exact substring, no metacharacter interpretation.
    Literal,
    /// Pattern is compiled as a regular expression.
    Regex,
}

/// Default regex flags applied in regex mode. Inline flag groups inside the
/// pattern text (e.g. `(?i)`) are honored by the regex engine regardless of
/// these settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexDefaults {
    /// DOTALL: `.` matches line terminators.
    pub dot_matches_new_line: bool,
    /// MULTILINE: `^`/`$` match at internal line boundaries.
    pub multi_line: bool,
}

impl RegexDefaults {
    /// Both flags on, the regex-mode default.
    pub fn enabled() -> Self {
        Self {
            dot_matches_new_line: true,
            multi_line: true,
        }
    }

    /// Both flags off (`--no-default-flags`): `^`/`$` anchor only at the
    /// start/end of the whole content and `.` stops at newlines.
    pub fn disabled() -> Self {
        Self {
            dot_matches_new_line: false,
            multi_line: false,
        }
    }
}

/// The parsed options for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: MatchMode,
    pub defaults: RegexDefaults,
    pub verbose: bool,
    pub pattern_file: PathBuf,
    pub replacement_file: PathBuf,
    /// Target files to process, in command-line order. Paths that did not
    /// name a regular file have already been skipped by the CLI layer.
    pub targets: Vec<PathBuf>,
}

impl RunConfig {
    /// Read the full pattern text.
    pub fn load_pattern(&self) -> Result<String, Error> {
        read_text(&self.pattern_file)
    }

    /// Read the full replacement text.
    pub fn load_replacement(&self) -> Result<String, Error> {
        read_text(&self.replacement_file)
    }
}

fn read_text(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_pattern_is_a_load_error() {
        let config = RunConfig {
            mode: MatchMode::Literal,
            defaults: RegexDefaults::enabled(),
            verbose: false,
            pattern_file: PathBuf::from("/nonexistent/pattern.txt"),
            replacement_file: PathBuf::from("/nonexistent/replacement.txt"),
            targets: Vec::new(),
        };

        match config.load_pattern() {
            Err(Error::Load { path, .. }) => {
                assert!(path.ends_with("pattern.txt"));
            }
            other => panic!("Expected Load error, got: {:?}", other),
        }
    }
}
