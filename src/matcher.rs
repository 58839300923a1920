//! Pattern compilation
//!
//! Turns raw pattern text plus a match mode into a `Matcher`, the one search
//! strategy used for every target file in a run.

use regex::{NoExpand, Regex, RegexBuilder};

use crate::config::{MatchMode, RegexDefaults};
use crate::error::Error;

/// A compiled search-and-replace strategy.
#[derive(Debug)]
pub enum Matcher {
    /// Exact substring search; every occurrence is replaced.
    Literal(String),
    /// Regular-expression search; every match is replaced.
    Regex(Regex),
}

impl Matcher {
    /// Compile the pattern text for the given mode.
    ///
    /// In regex mode the DOTALL and MULTILINE defaults come from `defaults`;
    /// a compile failure is fatal and carries the offending pattern text.
    pub fn compile(
        pattern: &str,
        mode: MatchMode,
        defaults: RegexDefaults,
    ) -> Result<Self, Error> {
        match mode {
            MatchMode::Literal => Ok(Matcher::Literal(pattern.to_string())),
            MatchMode::Regex => {
                let regex = RegexBuilder::new(pattern)
                    .dot_matches_new_line(defaults.dot_matches_new_line)
                    .multi_line(defaults.multi_line)
                    .build()
                    .map_err(|source| Error::Compile {
                        pattern: pattern.to_string(),
                        source,
                    })?;
                Ok(Matcher::Regex(regex))
            }
        }
    }

    /// True if the pattern occurs anywhere in `content` (a search, not a
    /// full match).
    pub fn is_match(&self, content: &str) -> bool {
        match self {
            Matcher::Literal(pattern) => content.contains(pattern.as_str()),
            Matcher::Regex(regex) => regex.is_match(content),
        }
    }

    /// Replace every occurrence/match with `replacement`, inserted verbatim.
    ///
    /// In regex mode the replacement goes through `NoExpand`, so `$1`-style
    /// sequences in it are never interpreted as back-references.
    pub fn replace_all(&self, content: &str, replacement: &str) -> String {
        match self {
            Matcher::Literal(pattern) => content.replace(pattern.as_str(), replacement),
            Matcher::Regex(regex) => {
                regex.replace_all(content, NoExpand(replacement)).into_owned()
            }
        }
    }
}
