// ABOUTME: Text helpers for selector labels
// Strips SGR escape sequences and prefixes labels with kind tags, bold when ANSI output is on

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

lazy_static! {
    static ref SGR_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid");
}

/// Remove SGR colour/style escape sequences (`ESC [ ... m`) from `text`.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    SGR_ESCAPE.replace_all(text, "")
}

/// Wrap `text` in bold escapes.
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

/// Build a selector label from a kind tag and a value.
///
/// The tag always precedes the value; with `ansi` it is rendered bold.
pub fn tagged_label(tag: &str, value: &str, ansi: bool) -> String {
    if ansi {
        format!("{} {}", bold(tag), value)
    } else {
        format!("{tag} {value}")
    }
}
