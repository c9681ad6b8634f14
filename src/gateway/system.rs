// ABOUTME: ProcessGateway backed by real child processes
// Spawns fzf, zoxide, the editor, and kitten/kitty remote control, blocking on each

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

use super::error::GatewayError;
use super::{ProcessGateway, Selection};

pub const SELECTOR: &str = "fzf";
pub const FRECENCY: &str = "zoxide";
pub const REMOTE_CONTROL: &str = "kitten";
pub const TERMINAL: &str = "kitty";
pub const DEFAULT_EDITOR: &str = "nvim";

/// Gateway that runs the real programs found on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SystemGateway {
    /// Editor command line, possibly with arguments. `None` or empty means [`DEFAULT_EDITOR`].
    editor: Option<String>,
}

impl SystemGateway {
    pub fn new(editor: Option<String>) -> Self {
        Self { editor }
    }

    /// Use `editor_override` if given, otherwise `$EDITOR`.
    pub fn from_env(editor_override: Option<String>) -> Self {
        Self::new(editor_override.or_else(|| std::env::var("EDITOR").ok()))
    }
}

impl ProcessGateway for SystemGateway {
    fn select(
        &self,
        candidates: &[String],
        prompt: &str,
        ansi: bool,
    ) -> Result<Selection, GatewayError> {
        let mut child = Command::new(SELECTOR)
            .args(selector_args(prompt, ansi))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| GatewayError::from_io(SELECTOR, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // fzf may exit before reading everything; that is not an error here.
            if let Err(e) = stdin.write_all(candidates.join("\n").as_bytes()) {
                debug!("Selector closed its input early: {}", e);
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| GatewayError::from_io(SELECTOR, e))?;

        if !output.status.success() {
            debug!("Selector exited with {}", output.status);
            return Ok(Selection::Cancelled);
        }

        Ok(Selection::Chosen(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }

    fn query_frecency(&self) -> Result<Vec<String>, GatewayError> {
        let output = Command::new(FRECENCY)
            .args(["query", "-l"])
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| GatewayError::from_io(FRECENCY, e))?;

        if !output.status.success() {
            return Err(GatewayError::CommandFailed {
                program: FRECENCY.to_string(),
                code: exit_code(output.status),
            });
        }

        Ok(parse_path_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn launch_editor(&self, path: &Path) -> Result<i32, GatewayError> {
        let argv = editor_command(self.editor.as_deref(), path)?;
        let Some((program, args)) = argv.split_first() else {
            return Err(GatewayError::BinaryMissing(DEFAULT_EDITOR.to_string()));
        };
        let program = program.to_string_lossy().into_owned();

        debug!("Launching editor: {:?}", argv);
        let status = Command::new(&program)
            .args(args)
            .status()
            .map_err(|e| GatewayError::from_io(&format!("editor '{program}'"), e))?;

        Ok(exit_code(status))
    }

    fn open_in_multiplexer(&self, path: &Path) -> Result<i32, GatewayError> {
        let status = Command::new(REMOTE_CONTROL)
            .args(goto_session_args(path))
            .status()
            .map_err(|e| GatewayError::from_io(REMOTE_CONTROL, e))?;

        Ok(exit_code(status))
    }

    fn close_launcher_window(&self, window_id: &str) {
        if window_id.is_empty() {
            return;
        }

        match Command::new(TERMINAL).args(close_window_args(window_id)).status() {
            Ok(status) if !status.success() => {
                debug!("close-window for {} exited with {}", window_id, status);
            }
            Ok(_) => {}
            Err(e) => warn!("Failed to close launcher window {}: {}", window_id, e),
        }
    }
}

/// fzf flags: keep our ordering, list top-down, custom prompt.
pub fn selector_args(prompt: &str, ansi: bool) -> Vec<String> {
    let mut args = Vec::with_capacity(6);
    if ansi {
        args.push("--ansi".to_string());
    }
    args.extend([
        "--reverse".to_string(),
        "--no-sort".to_string(),
        "--prompt".to_string(),
        prompt.to_string(),
    ]);
    args
}

/// Split the editor command line and append `path` as the last argument.
pub fn editor_command(editor: Option<&str>, path: &Path) -> Result<Vec<OsString>, GatewayError> {
    let line = editor.map(str::trim).filter(|e| !e.is_empty());

    let mut argv: Vec<OsString> = match line {
        Some(line) => shell_words::split(line)
            .map_err(|e| GatewayError::InvalidEditorCommand {
                command: line.to_string(),
                reason: e.to_string(),
            })?
            .into_iter()
            .map(OsString::from)
            .collect(),
        None => vec![OsString::from(DEFAULT_EDITOR)],
    };

    if argv.is_empty() {
        argv.push(OsString::from(DEFAULT_EDITOR));
    }
    argv.push(path.as_os_str().to_os_string());
    Ok(argv)
}

pub fn goto_session_args(path: &Path) -> Vec<OsString> {
    vec![
        "@".into(),
        "action".into(),
        "goto_session".into(),
        path.as_os_str().to_os_string(),
    ]
}

pub fn close_window_args(window_id: &str) -> Vec<String> {
    vec![
        "@".to_string(),
        "close-window".to_string(),
        "--match".to_string(),
        format!("id:{window_id}"),
    ]
}

/// Non-empty lines of zoxide output.
pub fn parse_path_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Exit code of a finished child; killed-by-signal counts as 1.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
