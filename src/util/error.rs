// Testmode - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// Pattern matching and line-list conversion are total functions and have no
// error types of their own; everything here belongs to the settings and
// reporting layers around them.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Testmode operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TestmodeError {
    /// Settings parsing failed.
    Settings(SettingsError),

    /// Report rendering failed.
    Report(ReportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for TestmodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(e) => write!(f, "Settings error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TestmodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Settings(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Settings errors
// ---------------------------------------------------------------------------

/// Errors related to settings file parsing.
#[derive(Debug)]
pub enum SettingsError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Settings file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading the settings file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Settings file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading settings '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SettingsError> for TestmodeError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to report rendering.
#[derive(Debug)]
pub enum ReportError {
    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// I/O error writing report output.
    Io { source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "JSON report error: {source}"),
            Self::Io { source } => write!(f, "Report I/O error: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Io { source } => Some(source),
        }
    }
}

impl From<ReportError> for TestmodeError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for Testmode results.
pub type Result<T> = std::result::Result<T, TestmodeError>;
