//! Error types for building and printing trees

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Anything that can abort a `dir_tree` run.
///
/// Every variant is fatal: nothing is retried and no partial tree is printed.
#[derive(Debug)]
pub enum TreeError {
    /// The input path could not be made absolute.
    Resolve { path: PathBuf, source: io::Error },
    /// A directory could not be listed.
    Read { path: PathBuf, source: io::Error },
    /// A file's size could not be determined.
    Metadata { path: PathBuf, source: io::Error },
    /// The output sink rejected a write.
    Write(io::Error),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Resolve { path, source } => {
                write!(f, "cannot resolve '{}': {}", path.display(), source)
            }
            TreeError::Read { path, source } => {
                write!(f, "cannot read directory '{}': {}", path.display(), source)
            }
            TreeError::Metadata { path, source } => {
                write!(f, "cannot stat '{}': {}", path.display(), source)
            }
            TreeError::Write(e) => write!(f, "error writing output: {}", e),
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TreeError::Resolve { source, .. }
            | TreeError::Read { source, .. }
            | TreeError::Metadata { source, .. } => Some(source),
            TreeError::Write(e) => Some(e),
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(e: io::Error) -> Self {
        TreeError::Write(e)
    }
}
