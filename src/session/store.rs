// ABOUTME: Session file storage in the kitty sessions directory
// Lists, materialises from templates, and deletes `<name>.kitty-session` files

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::SessionError;
use super::template::{self, SkippedTemplate, TemplateSource};

/// File extension of kitty session files.
pub const SESSION_EXTENSION: &str = "kitty-session";

/// Outcome of [`SessionStore::ensure_session_file`].
#[derive(Debug)]
pub struct EnsuredSession {
    pub path: PathBuf,
    /// False when the file already existed and was returned untouched.
    pub created: bool,
    /// Template files that could not be read before one succeeded.
    pub skipped_templates: Vec<SkippedTemplate>,
}

/// The directory holding session files. The filesystem is the only state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the session file for `name`, whether or not it exists.
    ///
    /// Names that could resolve outside the session directory are rejected.
    pub fn session_path(&self, name: &str) -> Result<PathBuf, SessionError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{SESSION_EXTENSION}")))
    }

    /// Create the session directory and its parents.
    pub fn ensure_dir(&self) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(|source| SessionError::DirUnavailable {
            path: self.dir.clone(),
            source,
        })
    }

    /// All session files, sorted by file name. A missing directory yields an empty list.
    pub fn list_session_files(&self) -> Result<Vec<PathBuf>, SessionError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let list_error = |source: std::io::Error| SessionError::ListFailed {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            if is_session_file(&path) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Return the session file for `name`, rendering it from a template if it does not exist yet.
    ///
    /// An existing file is never rewritten. The existence check and the write are not atomic:
    /// two invocations racing on the same name may both write, and the last one wins.
    pub fn ensure_session_file(
        &self,
        name: &str,
        source_path: &str,
        templates: &[TemplateSource],
    ) -> Result<EnsuredSession, SessionError> {
        let path = self.session_path(name)?;

        if path.exists() {
            debug!("Session file already exists: {}", path.display());
            return Ok(EnsuredSession {
                path,
                created: false,
                skipped_templates: Vec::new(),
            });
        }

        let loaded = template::load(templates)?;
        let contents = template::render(&loaded.text, name, source_path);

        fs::write(&path, contents).map_err(|source| SessionError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        debug!("Creating session file: {}", path.display());
        Ok(EnsuredSession {
            path,
            created: true,
            skipped_templates: loaded.skipped,
        })
    }

    /// Delete one session file.
    pub fn delete_session_file(&self, path: &Path) -> Result<(), SessionError> {
        fs::remove_file(path).map_err(|source| SessionError::DeleteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Deleted session file: {}", path.display());
        Ok(())
    }

    /// Delete every path in `paths`, continuing past failures. Returns the failures.
    pub fn delete_session_files(&self, paths: &[PathBuf]) -> Vec<SessionError> {
        paths
            .iter()
            .filter_map(|path| match self.delete_session_file(path) {
                Ok(()) => None,
                Err(e) => {
                    warn!("{}", e);
                    Some(e)
                }
            })
            .collect()
    }
}

/// Session name of a session file path (its stem).
pub fn session_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn validate_name(name: &str) -> Result<(), SessionError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(|c| c == '/' || std::path::is_separator(c));
    if invalid {
        return Err(SessionError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn is_session_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SESSION_EXTENSION)
        && path.file_stem().is_some_and(|stem| !stem.is_empty())
}
