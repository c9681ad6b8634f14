// ABOUTME: Shared selection flow for the launch and edit operations
// Queries zoxide, merges it with saved sessions, asks fzf, and materialises the chosen session file

use std::path::PathBuf;
use tracing::debug;

use crate::config::{AppContext, APP_NAME};
use crate::console::Console;
use crate::error::LauncherError;
use crate::gateway::{ProcessGateway, Selection};
use crate::reconcile::{self, EntryKind};
use crate::session::session_name;

pub const SESSION_PROMPT: &str = "session > ";

/// Let the user pick a session or zoxide directory and return the session file to open.
///
/// A zoxide directory without a session file gets one rendered from the template first.
pub fn select_session(
    ctx: &AppContext,
    gateway: &dyn ProcessGateway,
    console: &Console,
) -> Result<PathBuf, LauncherError> {
    let frecency_paths = gateway.query_frecency()?;
    let frecency_by_name = reconcile::frecency_by_name(&frecency_paths);

    let store = ctx.store();
    store.ensure_dir()?;
    let session_files = store.list_session_files()?;

    let candidates = reconcile::build_candidates(&session_files, &frecency_paths, ctx.ansi);
    if candidates.is_empty() {
        return Err(LauncherError::NoCandidates);
    }

    let raw = match gateway.select(&reconcile::labels(&candidates), SESSION_PROMPT, ctx.ansi)? {
        Selection::Cancelled => return Err(LauncherError::SelectionCancelled),
        Selection::Chosen(raw) if raw.is_empty() => return Err(LauncherError::NoSelection),
        Selection::Chosen(raw) => raw,
    };

    let entry = reconcile::resolve_selection(&candidates, &raw)
        .ok_or_else(|| LauncherError::SelectionUnresolved(raw.clone()))?;

    let (name, origin, session_file) = match entry.kind {
        EntryKind::Session => {
            let file = PathBuf::from(&entry.value);
            let name = session_name(&file);
            let origin = frecency_by_name.get(&name).cloned();
            (name, origin, file)
        }
        EntryKind::Frecency => {
            let name = reconcile::frecency_name(&entry.value);
            let ensured = store.ensure_session_file(&name, &entry.value, &ctx.templates())?;
            for skipped in &ensured.skipped_templates {
                console.alert(&format!("{APP_NAME}: {skipped}"));
            }
            (name, Some(entry.value.clone()), ensured.path)
        }
    };

    debug!(
        "Variables set: session={} path={}",
        name,
        origin.as_deref().unwrap_or("n/a")
    );
    debug!("Opening: {}", session_file.display());

    Ok(session_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture::scripted;
    use crate::gateway::MockProcessGateway;
    use crate::session::SessionError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> AppContext {
        AppContext {
            session_dir: dir.path().join("kitty-sessions"),
            ..AppContext::default()
        }
    }

    #[test]
    fn test_fresh_zoxide_entry_is_materialised_from_bundled_template() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/home/u/myrepo".to_string()]));
        gateway
            .expect_select()
            .withf(|candidates, prompt, ansi| {
                candidates == ["[zoxide] /home/u/myrepo".to_string()]
                    && prompt == SESSION_PROMPT
                    && !ansi
            })
            .times(1)
            .returning(|_, _, _| Ok(Selection::Chosen("[zoxide] /home/u/myrepo".to_string())));

        let (console, _out, _err) = scripted("");
        let session_file = select_session(&ctx, &gateway, &console).unwrap();

        assert_eq!(session_file, ctx.session_dir.join("myrepo.kitty-session"));
        let contents = fs::read_to_string(&session_file).unwrap();
        assert!(contents.contains("cd /home/u/myrepo"));
        assert!(contents.contains("new_tab myrepo"));
        assert!(!contents.contains("@@"));
    }

    #[test]
    fn test_ansi_labels_resolve_after_selector_echo() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        ctx.ansi = true;

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/home/u/myrepo".to_string()]));
        gateway
            .expect_select()
            .withf(|candidates, _, ansi| {
                *ansi && candidates == ["\x1b[1m[zoxide]\x1b[0m /home/u/myrepo".to_string()]
            })
            // fzf --ansi prints the line without the escapes
            .returning(|_, _, _| Ok(Selection::Chosen("[zoxide] /home/u/myrepo".to_string())));

        let (console, _out, _err) = scripted("");
        let session_file = select_session(&ctx, &gateway, &console).unwrap();

        assert_eq!(session_file, ctx.session_dir.join("myrepo.kitty-session"));
    }

    #[test]
    fn test_existing_session_is_used_without_rendering() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        ctx.template_path = Some(temp_dir.path().join("missing-template"));
        fs::create_dir_all(&ctx.session_dir).unwrap();
        let existing = ctx.session_dir.join("proj.kitty-session");
        fs::write(&existing, "hand edited").unwrap();

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/x/proj".to_string(), "/y/other".to_string()]));
        gateway
            .expect_select()
            .withf(|candidates, _, _| {
                candidates == ["[session] proj".to_string(), "[zoxide] /y/other".to_string()]
            })
            .returning(|_, _, _| Ok(Selection::Chosen("[session] proj".to_string())));

        let (console, _out, err) = scripted("");
        let session_file = select_session(&ctx, &gateway, &console).unwrap();

        assert_eq!(session_file, existing);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "hand edited");
        assert_eq!(err.contents(), "");
    }

    #[test]
    fn test_unreadable_user_template_is_reported_then_bundled_used() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        ctx.template_path = Some(temp_dir.path().join("missing-template"));

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/w/site".to_string()]));
        gateway
            .expect_select()
            .returning(|_, _, _| Ok(Selection::Chosen("[zoxide] /w/site".to_string())));

        let (console, _out, err) = scripted("");
        let session_file = select_session(&ctx, &gateway, &console).unwrap();

        assert!(session_file.exists());
        assert!(err.contents().contains("failed to read template file"));
    }

    #[test]
    fn test_root_directory_entry_writes_nothing_outside_session_dir() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/".to_string()]));
        gateway
            .expect_select()
            .returning(|_, _, _| Ok(Selection::Chosen("[zoxide] /".to_string())));

        let (console, _out, _err) = scripted("");
        let err = select_session(&ctx, &gateway, &console).unwrap_err();

        assert!(matches!(
            err,
            LauncherError::Session(SessionError::InvalidName(ref name)) if name.is_empty()
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(!temp_dir.path().join(".kitty-session").exists());
        assert_eq!(fs::read_dir(&ctx.session_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_no_candidates() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut gateway = MockProcessGateway::new();
        gateway.expect_query_frecency().returning(|| Ok(vec![]));
        gateway.expect_select().never();

        let (console, _out, _err) = scripted("");
        let err = select_session(&ctx, &gateway, &console).unwrap_err();

        assert!(matches!(err, LauncherError::NoCandidates));
    }

    #[test]
    fn test_unknown_selection_is_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut gateway = MockProcessGateway::new();
        gateway
            .expect_query_frecency()
            .returning(|| Ok(vec!["/a/b".to_string()]));
        gateway
            .expect_select()
            .returning(|_, _, _| Ok(Selection::Chosen("/somewhere/else".to_string())));

        let (console, _out, _err) = scripted("");
        let err = select_session(&ctx, &gateway, &console).unwrap_err();

        assert!(matches!(err, LauncherError::SelectionUnresolved(ref s) if s == "/somewhere/else"));
        assert!(!ctx.session_dir.join("b.kitty-session").exists());
    }
}
