//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Module loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] yangly_schema::ParseError),

    /// Module validation error.
    #[error("schema error: {0}")]
    Schema(#[from] yangly_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No module was supplied.
    #[error("module is nil")]
    NilModule,

    /// The module did not resolve to a root entry.
    #[error("entry is nil: module '{module}' does not resolve to a root entry")]
    NilEntry {
        /// Module name.
        module: String,
    },
}

impl CodegenError {
    /// Creates a nil entry error for the given module.
    pub fn nil_entry(module: impl Into<String>) -> Self {
        Self::NilEntry {
            module: module.into(),
        }
    }
}
