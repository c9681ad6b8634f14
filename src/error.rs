// ABOUTME: Top-level error taxonomy for launcher operations
// Wraps store and gateway errors and maps every failure to a process exit code

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::session::SessionError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CANCELLED: i32 = 2;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("no sessions found")]
    NoCandidates,

    #[error("no session files to delete")]
    NoSessionFiles,

    #[error("No session selected")]
    NoSelection,

    #[error("selection cancelled")]
    SelectionCancelled,

    #[error("selection could not be resolved: {0}")]
    SelectionUnresolved(String),

    #[error("Delete all cancelled")]
    ConfirmationDeclined,

    #[error("failed to delete {failed} of {total} session files")]
    BatchDeleteFailed { failed: usize, total: usize },

    #[error("cannot use {0}")]
    InvalidFlags(&'static str),

    #[error("invalid configuration: {0:#}")]
    Config(anyhow::Error),
}

impl LauncherError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SelectionCancelled => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::NoSelection)
    }

    /// Interactive outcomes are printed without the `kitty-zoxide-sessions:` prefix.
    pub fn is_prefixed(&self) -> bool {
        !matches!(self, Self::NoSelection | Self::ConfirmationDeclined)
    }
}
