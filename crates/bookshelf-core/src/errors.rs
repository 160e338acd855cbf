use std::path::{Path, PathBuf};
use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by a catalogue manager is classified by one of
/// these kinds. Each kind maps to a stable error code usable by callers,
/// tests and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Catalogue file absent and creation not permitted
    NotFound,
    /// Catalogue file present but not decodable into the books schema
    CorruptData,
    /// Filesystem failure unrelated to the data format
    Io,
    /// Encoding the in-memory catalogue failed
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CorruptData => "ERR_CORRUPT_DATA",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the
/// operation and file path the failure happened in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Stable code of the error kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Concrete failures raised while loading, saving or driving a catalogue
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookshelfError {
    /// Catalogue file does not exist and may not be created
    #[error("Catalogue file not found: {}", .path.display())]
    CatalogueNotFound { path: PathBuf },

    /// Catalogue file exists but does not hold a books document
    #[error("Catalogue file is corrupt: {reason}")]
    CorruptCatalogue { path: PathBuf, reason: String },

    /// Filesystem operation failed
    #[error("I/O failure during {op}: {message}")]
    Io {
        op: String,
        path: PathBuf,
        message: String,
    },

    /// Encoding the catalogue failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<BookshelfError> for ExError {
    fn from(err: BookshelfError) -> Self {
        let message = err.to_string();
        match err {
            BookshelfError::CatalogueNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("catalogue_open")
                .with_path(path)
                .with_message(message),
            BookshelfError::CorruptCatalogue { path, .. } => {
                ExError::new(ExErrorKind::CorruptData)
                    .with_op("catalogue_decode")
                    .with_path(path)
                    .with_message(message)
            }
            BookshelfError::Io { op, path, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_path(path)
                .with_message(message),
            BookshelfError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("catalogue_encode")
                .with_message(message),
        }
    }
}
