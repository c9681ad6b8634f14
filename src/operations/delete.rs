// ABOUTME: Delete operations for saved kitty sessions
// Single delete picks one session in fzf; delete-all asks for a typed confirmation first

use tracing::info;

use crate::config::{AppContext, APP_NAME};
use crate::console::Console;
use crate::error::{LauncherError, EXIT_SUCCESS};
use crate::gateway::{ProcessGateway, Selection};
use crate::session::session_name;

pub const DELETE_PROMPT: &str = "delete session > ";
pub const CONFIRM_PROMPT: &str = "Type 'yes' to continue: ";

/// Pick one session by name and delete its file.
pub fn delete_session(
    ctx: &AppContext,
    gateway: &dyn ProcessGateway,
    console: &Console,
) -> Result<i32, LauncherError> {
    let store = ctx.store();
    let session_files = store.list_session_files()?;
    if session_files.is_empty() {
        return Err(LauncherError::NoSessionFiles);
    }

    let names: Vec<String> = session_files.iter().map(|f| session_name(f)).collect();
    let chosen = match gateway.select(&names, DELETE_PROMPT, ctx.ansi)? {
        Selection::Cancelled => return Err(LauncherError::SelectionCancelled),
        Selection::Chosen(name) if name.is_empty() => return Err(LauncherError::NoSelection),
        Selection::Chosen(name) => name,
    };

    let Some(index) = names.iter().position(|name| *name == chosen) else {
        return Err(LauncherError::SelectionUnresolved(chosen));
    };

    store.delete_session_file(&session_files[index])?;
    console.say(&format!("Deleted session: {chosen}"));
    Ok(EXIT_SUCCESS)
}

/// Delete every session file once the user types `yes`.
///
/// Failures are reported one by one and do not stop the rest of the batch.
pub fn delete_all_sessions(ctx: &AppContext, console: &Console) -> Result<i32, LauncherError> {
    let store = ctx.store();
    let session_files = store.list_session_files()?;
    if session_files.is_empty() {
        return Err(LauncherError::NoSessionFiles);
    }

    console.say("This will delete all kitty session files.");
    if !is_confirmation(console.ask(CONFIRM_PROMPT).as_deref()) {
        return Err(LauncherError::ConfirmationDeclined);
    }

    let failures = store.delete_session_files(&session_files);
    for failure in &failures {
        console.alert(&format!("{APP_NAME}: {failure}"));
    }

    if !failures.is_empty() {
        return Err(LauncherError::BatchDeleteFailed {
            failed: failures.len(),
            total: session_files.len(),
        });
    }

    info!("Deleted {} session files", session_files.len());
    console.say("Deleted all session files");
    Ok(EXIT_SUCCESS)
}

/// Only a case-insensitive `yes` confirms; end of input does not.
fn is_confirmation(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes"))
}
