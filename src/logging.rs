// ABOUTME: File logging setup for the launcher
// Installs a tracing subscriber writing to the sessions directory; never aborts the program

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::prelude::*;

pub const LOG_FILE_NAME: &str = "kitty-zoxide-sessions.log";

static LOGGING: OnceLock<LogHandle> = OnceLock::new();

/// Result of logging setup, handed to the parts of the program that log.
#[derive(Debug, Clone, Default)]
pub struct LogHandle {
    file: Option<PathBuf>,
}

impl LogHandle {
    /// No file sink; log macros are dropped.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "kitty_zoxide_sessions=debug"
    } else {
        "kitty_zoxide_sessions=info"
    }
}

/// Set up logging into `log_dir`. Only the first call does anything; later calls return the same handle.
pub fn init(log_dir: &Path, debug: bool) -> LogHandle {
    LOGGING.get_or_init(|| install(log_dir, debug)).clone()
}

fn install(log_dir: &Path, debug: bool) -> LogHandle {
    // A missing log file only costs us the log.
    if fs::create_dir_all(log_dir).is_err() {
        return LogHandle::disabled();
    }

    let log_file = log_dir.join(LOG_FILE_NAME);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return LogHandle::disabled();
    };

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Mutex::new(file))
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(debug).into()),
        )
        .try_init();

    match installed {
        Ok(()) => LogHandle {
            file: Some(log_file),
        },
        Err(_) => LogHandle::disabled(),
    }
}
