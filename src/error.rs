//! Error types surfaced when a generation run aborts.

use std::path::PathBuf;

/// Errors that can abort a generation run.
///
/// Both kinds are fatal: no retries, no partial-success mode. The offending
/// path and the underlying I/O cause are carried so invokers can report
/// failures with full context.
#[derive(Debug)]
pub enum GenerateError {
    /// A resource directory could not be walked.
    Scan {
        /// Path that could not be read during the walk.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// The output directory could not be created or the unit file written.
    Write {
        /// Path that could not be created or written.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan { path, source } => {
                write!(
                    f,
                    "failed to scan resource directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::Write { path, source } => {
                write!(
                    f,
                    "failed to write generated output {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}
