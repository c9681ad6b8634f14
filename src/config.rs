// ABOUTME: Per-invocation configuration for kitty-zoxide-sessions
// Resolves the sessions directory, loads the optional TOML config, and assembles AppContext

use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::session::{SessionStore, TemplateSource};

pub const APP_NAME: &str = "kitty-zoxide-sessions";
pub const SESSION_DIR_NAME: &str = "kitty-sessions";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Optional settings from `$XDG_CONFIG_HOME/kitty-zoxide-sessions/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Template used when `--template` is not given
    pub template: Option<PathBuf>,
    /// Turn on `--ansi` by default
    pub ansi: bool,
    /// Editor command line, takes precedence over `$EDITOR`
    pub editor: Option<String>,
}

impl FileConfig {
    /// Load the config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Everything an operation needs to know, built once per invocation.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub session_dir: PathBuf,
    pub debug: bool,
    pub ansi: bool,
    pub template_path: Option<PathBuf>,
    /// Window to close on exit; only set with `--auto-close`.
    pub launcher_window_id: Option<String>,
    pub editor: Option<String>,
}

impl AppContext {
    /// Merge flags over the config file. `window_id` is ignored unless `--auto-close` is given.
    pub fn new(
        args: &Args,
        file: FileConfig,
        session_dir: PathBuf,
        window_id: Option<String>,
    ) -> Self {
        let template_path = args
            .template
            .as_deref()
            .or(file.template.as_deref())
            .map(expand_tilde);

        Self {
            session_dir,
            debug: args.debug,
            ansi: args.ansi || file.ansi,
            template_path,
            launcher_window_id: window_id
                .filter(|id| args.auto_close && !id.is_empty()),
            editor: file.editor,
        }
    }

    pub fn store(&self) -> SessionStore {
        SessionStore::new(&self.session_dir)
    }

    pub fn templates(&self) -> Vec<TemplateSource> {
        TemplateSource::candidates(self.template_path.as_deref())
    }
}

/// `$XDG_DATA_HOME/kitty-sessions`, falling back to the platform data directory.
pub fn resolve_session_dir() -> PathBuf {
    data_home(std::env::var_os("XDG_DATA_HOME")).join(SESSION_DIR_NAME)
}

/// Data home from an `XDG_DATA_HOME` value; empty counts as unset.
pub fn data_home(xdg_data_home: Option<OsString>) -> PathBuf {
    xdg_data_home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::data_dir)
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from(".local/share"))
}

/// The launching kitty window, from `KITTY_WINDOW_ID`.
pub fn launcher_window_id() -> Option<String> {
    std::env::var("KITTY_WINDOW_ID").ok()
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
