//! Replacement engine
//!
//! Processes target files strictly in command-line order: read the full
//! content, ask the matcher, substitute, write back, and report. Files with
//! no match are left untouched, modification timestamp included. One file's
//! content is dropped before the next is loaded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::matcher::Matcher;

/// Outcome of one pass over a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Canonical path of the target, as printed in report lines.
    pub path: PathBuf,
    pub matched: bool,
}

pub struct ReplacementEngine<'a> {
    matcher: &'a Matcher,
    replacement: &'a str,
    verbose: bool,
}

impl<'a> ReplacementEngine<'a> {
    pub fn new(matcher: &'a Matcher, replacement: &'a str, verbose: bool) -> Self {
        Self {
            matcher,
            replacement,
            verbose,
        }
    }

    /// Process every target in order, printing one report line per matched
    /// file (and per unmatched file when verbose).
    ///
    /// The first read or write failure aborts the whole run: skip-and-continue
    /// would leave some targets rewritten and others not, which is worse for
    /// a bulk mutation tool than stopping with a clear error.
    pub fn run(&self, targets: &[PathBuf]) -> Result<Vec<FileReport>, Error> {
        let mut reports = Vec::with_capacity(targets.len());

        for target in targets {
            let report = self.process_file(target)?;
            if report.matched || self.verbose {
                println!(
                    "match-found={} target-file={}",
                    report.matched,
                    report.path.display()
                );
            }
            reports.push(report);
        }

        Ok(reports)
    }

    /// One full pass over a single file: read, match, substitute, write back.
    /// The file is opened for writing only when a match was found.
    pub fn process_file(&self, target: &Path) -> Result<FileReport, Error> {
        let canonical = fs::canonicalize(target).map_err(|source| target_io(target, source))?;

        let content =
            fs::read_to_string(target).map_err(|source| target_io(target, source))?;
        debug!(
            target_file = %canonical.display(),
            bytes = content.len(),
            "loaded target file"
        );

        let matched = self.matcher.is_match(&content);
        if matched {
            let replaced = self.matcher.replace_all(&content, self.replacement);
            fs::write(target, replaced).map_err(|source| target_io(target, source))?;
            debug!(target_file = %canonical.display(), "rewrote target file");
        }

        Ok(FileReport {
            path: canonical,
            matched,
        })
    }
}

fn target_io(path: &Path, source: io::Error) -> Error {
    Error::TargetIo {
        path: path.to_path_buf(),
        source,
    }
}
