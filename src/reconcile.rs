// ABOUTME: Merges session files and zoxide paths into one selector list
// Sessions come first, zoxide paths shadowed by a session of the same name are dropped

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::session::session_name;
use crate::text::{strip_ansi, tagged_label};

pub const SESSION_TAG: &str = "[session]";
pub const FRECENCY_TAG: &str = "[zoxide]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `value` is a session file path.
    Session,
    /// `value` is a directory reported by zoxide.
    Frecency,
}

/// One line offered in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// What the selector shows, possibly with escape codes.
    pub label: String,
    pub kind: EntryKind,
    pub value: String,
}

/// Base name of a frecency path, used as its session name. Empty for `/` and other
/// paths without a final component.
pub fn frecency_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Frecency paths keyed by base name; the first path with a given name wins.
pub fn frecency_by_name(paths: &[String]) -> HashMap<String, String> {
    let mut by_name = HashMap::new();
    for path in paths.iter().filter(|p| !p.is_empty()) {
        by_name
            .entry(frecency_name(path))
            .or_insert_with(|| path.clone());
    }
    by_name
}

/// Session entries in file-name order, then frecency entries not shadowed by a session.
pub fn build_candidates(
    session_files: &[PathBuf],
    frecency_paths: &[String],
    ansi: bool,
) -> Vec<Candidate> {
    let session_names: HashSet<String> = session_files.iter().map(|f| session_name(f)).collect();

    let sessions = session_files.iter().map(|file| Candidate {
        label: tagged_label(SESSION_TAG, &session_name(file), ansi),
        kind: EntryKind::Session,
        value: file.to_string_lossy().into_owned(),
    });

    let frecency = frecency_paths
        .iter()
        .filter(|path| !path.is_empty() && !session_names.contains(&frecency_name(path)))
        .map(|path| Candidate {
            label: tagged_label(FRECENCY_TAG, path, ansi),
            kind: EntryKind::Frecency,
            value: path.clone(),
        });

    sessions.chain(frecency).collect()
}

/// Find the candidate whose label matches the selector output, ignoring escape codes on both sides.
pub fn resolve_selection<'a>(candidates: &'a [Candidate], raw: &str) -> Option<&'a Candidate> {
    let wanted = strip_ansi(raw);
    candidates
        .iter()
        .find(|candidate| strip_ansi(&candidate.label) == wanted)
}

/// Labels in display order, as fed to the selector.
pub fn labels(candidates: &[Candidate]) -> Vec<String> {
    candidates.iter().map(|c| c.label.clone()).collect()
}
