//! Error types for template loading and rendering.

use std::path::PathBuf;

use minijinja::value::ValueKind;
use thiserror::Error;

/// Failures raised while resolving or rendering a template.
///
/// Errors returned by a wrapped handler never pass through this type; they
/// reach the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The template does not exist (or cannot be read) under the directory
    /// that was active when the render happened.
    #[error("template '{name}' not found in {}", .directory.display())]
    TemplateNotFound { name: String, directory: PathBuf },

    /// The engine rejected the template source or the context.
    #[error("failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The handler produced a value that cannot be used for key lookups.
    #[error("context for template '{name}' must be a map, got {kind}")]
    InvalidContext { name: String, kind: ValueKind },
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;
