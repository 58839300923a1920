use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::config::{MatchMode, RegexDefaults, RunConfig};
use crate::error::Error;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "barb")]
#[command(about = "Search and replace text with support of multi-line patterns (literal or regular expression)")]
#[command(long_about = "Barb searches each TARGET_FILE for the contents of PATTERN_FILE and, when a
match is found, rewrites the file in place with every match replaced by the
contents of REPLACEMENT_FILE.

Because the pattern and the replacement are read from files rather than the
command line, both may span multiple lines. The replacement is always
inserted verbatim: sequences like $1 or \\1 are never treated as
back-references, even in regex mode.

MODES:
  literal (default)  pattern matched as an exact substring
  -r, --regex        pattern compiled as a regular expression with the
                     DOTALL and MULTILINE flags enabled by default

OUTPUT:
  One line per matched target file:  match-found=true target-file=<path>
  With -v, unmatched files are reported too (match-found=false).

EXAMPLES:
  barb pattern.txt replacement.txt src/a.c src/b.c   Literal replace
  barb -r pattern.txt replacement.txt notes.md       Regex replace
  barb -r -F pattern.txt replacement.txt notes.md    Regex, default flags off
  barb -v pattern.txt replacement.txt *.txt          Report unmatched files too")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
pub struct Cli {
    /// File whose full contents become the search pattern
    #[arg(value_name = "PATTERN_FILE")]
    pattern_file: PathBuf,

    /// File whose full contents become the replacement text
    #[arg(value_name = "REPLACEMENT_FILE")]
    replacement_file: PathBuf,

    /// Files to search and rewrite in place
    #[arg(value_name = "TARGET_FILE")]
    targets: Vec<PathBuf>,

    /// Use PATTERN_FILE as a regular expression instead of a literal
    #[arg(short = 'r', long)]
    regex: bool,

    /// Disable the default regex flags
    #[arg(short = 'F', long = "no-default-flags")]
    #[arg(help = "Disable the DOTALL and MULTILINE flags that regex mode enables by default\nInline flags such as (?i) inside the pattern still apply")]
    no_default_flags: bool,

    /// Verbose output: report files with no match and print full error traces
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Validate the parsed arguments into an immutable run configuration.
    ///
    /// The pattern and replacement paths must name regular files. Target
    /// paths that do not are skipped with a warning rather than failing the
    /// run.
    pub fn into_config(self) -> Result<RunConfig, Error> {
        if !self.pattern_file.is_file() {
            return Err(Error::Config(format!(
                "pattern file [{}] is not a regular file",
                self.pattern_file.display()
            )));
        }

        if !self.replacement_file.is_file() {
            return Err(Error::Config(format!(
                "replacement file [{}] is not a regular file",
                self.replacement_file.display()
            )));
        }

        let mut targets = Vec::with_capacity(self.targets.len());
        for target in self.targets {
            if target.is_file() {
                targets.push(target);
            } else {
                warn!(
                    target_file = %target.display(),
                    "target is not a file, skipping it"
                );
            }
        }

        let mode = if self.regex {
            MatchMode::Regex
        } else {
            MatchMode::Literal
        };

        let defaults = if self.no_default_flags {
            RegexDefaults::disabled()
        } else {
            RegexDefaults::enabled()
        };

        Ok(RunConfig {
            mode,
            defaults,
            verbose: self.verbose,
            pattern_file: self.pattern_file,
            replacement_file: self.replacement_file,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_files(dir: &TempDir) -> (PathBuf, PathBuf) {
        let pattern = dir.path().join("pattern.txt");
        let replacement = dir.path().join("replacement.txt");
        fs::write(&pattern, "foo").unwrap();
        fs::write(&replacement, "bar").unwrap();
        (pattern, replacement)
    }

    #[test]
    fn test_defaults_are_literal_mode_with_flags_enabled() {
        let dir = TempDir::new().unwrap();
        let (pattern, replacement) = fixture_files(&dir);

        let cli = Cli::try_parse_from([
            "barb",
            pattern.to_str().unwrap(),
            replacement.to_str().unwrap(),
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.mode, MatchMode::Literal);
        assert_eq!(config.defaults, RegexDefaults::enabled());
        assert!(!config.verbose);
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_regex_and_no_default_flags() {
        let dir = TempDir::new().unwrap();
        let (pattern, replacement) = fixture_files(&dir);

        let cli = Cli::try_parse_from([
            "barb",
            "-r",
            "-F",
            pattern.to_str().unwrap(),
            replacement.to_str().unwrap(),
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.mode, MatchMode::Regex);
        assert_eq!(config.defaults, RegexDefaults::disabled());
    }

    #[test]
    fn test_missing_pattern_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let (_, replacement) = fixture_files(&dir);
        let bogus = dir.path().join("absent.txt");

        let cli = Cli::try_parse_from([
            "barb",
            bogus.to_str().unwrap(),
            replacement.to_str().unwrap(),
        ])
        .unwrap();

        match cli.into_config() {
            Err(Error::Config(message)) => assert!(message.contains("absent.txt")),
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_target_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let (pattern, replacement) = fixture_files(&dir);
        let valid = dir.path().join("target.txt");
        fs::write(&valid, "content").unwrap();
        let bogus = dir.path().join("no-such-target.txt");

        let cli = Cli::try_parse_from([
            "barb",
            pattern.to_str().unwrap(),
            replacement.to_str().unwrap(),
            bogus.to_str().unwrap(),
            valid.to_str().unwrap(),
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.targets, vec![valid]);
    }

    #[test]
    fn test_missing_positional_arguments_fail_to_parse() {
        let result = Cli::try_parse_from(["barb", "only-one-path"]);
        assert!(result.is_err());
    }
}
