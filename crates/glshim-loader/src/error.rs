//! Loader failures.

use std::fmt;

/// Why a GL library or entry point could not be made available.
///
/// All variants are terminal: the loader never retries, so the same error is
/// handed back on every later request for the same library or symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// None of the candidate libraries could be opened.
    LibraryNotFound { tried: Vec<String>, reason: String },
    /// The library is open but does not export the entry point.
    MissingSymbol { name: String, source: String },
    /// The name cannot be passed to the platform loader.
    InvalidName { name: String },
}

impl LoadError {
    /// The entry point this error is about, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            LoadError::LibraryNotFound { .. } => None,
            LoadError::MissingSymbol { name, .. } | LoadError::InvalidName { name } => Some(name),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::LibraryNotFound { tried, reason } => write!(
                f,
                "could not open the OpenGL library (tried {}): {reason}",
                tried.join(", ")
            ),
            LoadError::MissingSymbol { name, source } => {
                write!(f, "OpenGL entry point `{name}` not found in {source}")
            }
            LoadError::InvalidName { name } => {
                write!(f, "invalid OpenGL entry point name {name:?}")
            }
        }
    }
}

impl std::error::Error for LoadError {}
