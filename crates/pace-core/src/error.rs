//! Error types for the pace library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every pace operation.
#[derive(Error, Debug)]
pub enum PaceError {
    /// Malformed plan document
    #[error("Format error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Format {
        line: Option<usize>,
        message: String,
    },
    /// Semantic invariant violation
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// A session is already running
    #[error("Session {session_id} is already active for plan '{plan_id}'")]
    Conflict { session_id: String, plan_id: String },
    /// Stop or lookup with no running session
    #[error("No active session")]
    NoActiveSession,
    /// Session not found for the given ID
    #[error("Session with ID {id} not found")]
    SessionNotFound { id: String },
    /// Plan not found for the given ID
    #[error("Plan '{id}' not found")]
    PlanNotFound { id: String },
    /// Chunk not found within a plan
    #[error("Chunk '{chunk_id}' not found in plan '{plan_id}'")]
    ChunkNotFound { plan_id: String, chunk_id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// YAML frontmatter or config file errors
    #[error("YAML error: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// JSON serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PaceError {
        PaceError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PaceError {
        PaceError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PaceError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a format error tied to a 1-based line number.
    pub fn format_at(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Creates a format error for the document as a whole.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            message: message.into(),
        }
    }

    /// Creates a file system error for `path`.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoActiveSession
                | Self::SessionNotFound { .. }
                | Self::PlanNotFound { .. }
                | Self::ChunkNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PaceError::database(message).with_source(e))
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`PaceError::FileSystem`] for `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| PaceError::file_system(path, e))
    }
}

/// Result type alias for pace operations
pub type Result<T> = std::result::Result<T, PaceError>;
