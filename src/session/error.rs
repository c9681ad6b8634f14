// ABOUTME: Error types for session file storage
// Captures the failing path and the underlying OS error text

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session name '{0}'")]
    InvalidName(String),

    #[error("no usable session template (tried: {})", format_paths(.tried))]
    TemplateUnavailable { tried: Vec<PathBuf> },

    #[error("failed to write session file '{}' ({source})", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete session file '{}' ({source})", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create session directory '{}' ({source})", .path.display())]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read session directory '{}' ({source})", .path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
