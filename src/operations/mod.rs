// ABOUTME: Command dispatch for the four launcher operations
// Validates the flag combination, runs the chosen operation, and turns the outcome into an exit code

pub mod delete;
pub mod selection;

use tracing::debug;

use crate::cli::{self, Args};
use crate::config::{AppContext, APP_NAME};
use crate::console::Console;
use crate::error::LauncherError;
use crate::gateway::ProcessGateway;

/// What this invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Open the chosen session in kitty (default).
    Launch,
    /// Open the chosen session file in the editor.
    Edit,
    /// Delete one session file.
    Delete,
    /// Delete every session file after confirmation.
    DeleteAll,
}

impl Operation {
    /// Pick the operation from the flags, rejecting contradictory combinations.
    pub fn from_args(args: &Args) -> Result<Self, LauncherError> {
        if args.edit && (args.delete || args.delete_all) {
            return Err(LauncherError::InvalidFlags("--edit with delete options"));
        }
        if args.delete && args.delete_all {
            return Err(LauncherError::InvalidFlags("--delete with --delete-all"));
        }

        Ok(if args.delete_all {
            Self::DeleteAll
        } else if args.delete {
            Self::Delete
        } else if args.edit {
            Self::Edit
        } else {
            Self::Launch
        })
    }
}

/// Run `operation` and return the process exit code, reporting any failure on the console.
pub fn dispatch(
    operation: Operation,
    ctx: &AppContext,
    gateway: &dyn ProcessGateway,
    console: &Console,
) -> i32 {
    debug!("Running {:?} with session dir {}", operation, ctx.session_dir.display());

    match execute(operation, ctx, gateway, console) {
        Ok(code) => code,
        Err(err) => {
            report(&err, console);
            err.exit_code()
        }
    }
}

/// Run `operation`. `Ok` carries the exit code of the editor or kitty where one was started.
pub fn execute(
    operation: Operation,
    ctx: &AppContext,
    gateway: &dyn ProcessGateway,
    console: &Console,
) -> Result<i32, LauncherError> {
    match operation {
        Operation::Launch => {
            let session_file = selection::select_session(ctx, gateway, console)?;
            Ok(gateway.open_in_multiplexer(&session_file)?)
        }
        Operation::Edit => {
            let session_file = selection::select_session(ctx, gateway, console)?;
            Ok(gateway.launch_editor(&session_file)?)
        }
        Operation::Delete => delete::delete_session(ctx, gateway, console),
        Operation::DeleteAll => delete::delete_all_sessions(ctx, console),
    }
}

/// Print `err` the way the user should see it.
pub fn report(err: &LauncherError, console: &Console) {
    if matches!(err, LauncherError::SelectionCancelled) {
        debug!("Selection cancelled");
        return;
    }

    if err.is_prefixed() {
        console.alert(&format!("{APP_NAME}: {err}"));
    } else {
        console.alert(&err.to_string());
    }

    if err.shows_usage() {
        console.alert(&cli::usage());
    }
}
