//! Error taxonomy for barb
//!
//! Each fatal failure carries an explicit kind so the binary can branch on it
//! for user messaging and exit-code selection, instead of funnelling every
//! failure through one opaque type.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The run configuration is invalid: the pattern or replacement path does
    /// not name a regular file, or the argument shape is otherwise unusable.
    /// Raised before any target file is touched.
    Config(String),

    /// The pattern text failed to compile as a regular expression.
    Compile {
        pattern: String,
        source: regex::Error,
    },

    /// The pattern or replacement file could not be read.
    Load { path: PathBuf, source: io::Error },

    /// A read or write failed on a target file. This aborts the whole run:
    /// continuing would leave some targets rewritten and others not.
    TargetIo { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit code for this failure. Configuration errors use 2 to
    /// match the usage-error convention; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(message) => write!(f, "{}", message),
            Error::Compile { pattern, .. } => {
                write!(f, "cannot build a regex from pattern [{}]", pattern)
            }
            Error::Load { path, .. } => {
                write!(f, "cannot read [{}]", path.display())
            }
            Error::TargetIo { path, .. } => {
                write!(f, "cannot apply replacement in target file [{}]", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Compile { source, .. } => Some(source),
            Error::Load { source, .. } | Error::TargetIo { source, .. } => Some(source),
        }
    }
}
