// ABOUTME: Gateway to the external programs the launcher drives
// fzf for selection, zoxide for frecency, the editor, and kitty remote control

pub mod error;
pub mod system;

use std::path::Path;

pub use error::GatewayError;
pub use system::SystemGateway;

/// Result of presenting a list in the fuzzy selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The selector exited successfully; holds its trimmed output (possibly empty).
    Chosen(String),
    /// The selector exited non-zero, usually Esc or Ctrl-C.
    Cancelled,
}

/// One method per external collaborator, so each can be swapped out in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessGateway {
    /// Present `candidates` in the fuzzy selector.
    fn select(&self, candidates: &[String], prompt: &str, ansi: bool)
        -> Result<Selection, GatewayError>;

    /// Every path known to the frecency backend, most relevant first.
    fn query_frecency(&self) -> Result<Vec<String>, GatewayError>;

    /// Open `path` in the editor and return its exit code.
    fn launch_editor(&self, path: &Path) -> Result<i32, GatewayError>;

    /// Ask kitty to open the session file at `path` and return the exit code.
    fn open_in_multiplexer(&self, path: &Path) -> Result<i32, GatewayError>;

    /// Close the kitty window with `window_id`. Best effort; does nothing for an empty id.
    fn close_launcher_window(&self, window_id: &str);
}
