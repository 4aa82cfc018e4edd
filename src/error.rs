//! Crate-level error types.

use std::{fmt, path::PathBuf};

/// Errors produced by the shadelab crate.
#[derive(Debug)]
pub enum ShadeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidOptions(String),
    /// The resource directory is missing or not a directory.
    ResourceDir(PathBuf),
    /// `pop_matrix` was called with a single matrix left on the stack.
    StackUnderflow,
    /// Offline capture could not be produced.
    Capture(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::ResourceDir(path) => {
                write!(f, "resource directory not found: {}", path.display())
            }
            Self::StackUnderflow => {
                write!(f, "matrix stack underflow: cannot pop the last matrix")
            }
            Self::Capture(msg) => write!(f, "capture error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ShadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShadeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ShadeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn underflow_has_no_source() {
        let err = ShadeError::StackUnderflow;
        assert!(std::error::Error::source(&err).is_none());
        assert!(err.to_string().contains("underflow"));
    }
}
