// ABOUTME: Session template loading and placeholder rendering
// Tries template sources in order and substitutes the session name and path placeholders

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::SessionError;

/// Placeholder replaced by the directory the session was created from.
pub const PATH_PLACEHOLDER: &str = "@@session-path@@";
/// Placeholder replaced by the session name.
pub const NAME_PLACEHOLDER: &str = "@@session@@";

/// Default template shipped with the binary.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/default.kitty-session");

/// Where a template can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Bundled,
}

impl TemplateSource {
    /// Candidate list for a run: the user's template first (if any), then the bundled one.
    pub fn candidates(user_template: Option<&Path>) -> Vec<Self> {
        let mut sources = Vec::with_capacity(2);
        if let Some(path) = user_template {
            sources.push(Self::File(path.to_path_buf()));
        }
        sources.push(Self::Bundled);
        sources
    }

    fn read(&self) -> std::io::Result<Cow<'static, str>> {
        match self {
            Self::File(path) => fs::read_to_string(path).map(Cow::Owned),
            Self::Bundled => Ok(Cow::Borrowed(BUNDLED_TEMPLATE)),
        }
    }
}

/// A template file that could not be read and was skipped.
#[derive(Debug)]
pub struct SkippedTemplate {
    pub path: PathBuf,
    pub error: std::io::Error,
}

impl fmt::Display for SkippedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to read template file '{}' ({})",
            self.path.display(),
            self.error
        )
    }
}

/// Template text together with any sources skipped on the way to it.
#[derive(Debug)]
pub struct LoadedTemplate {
    pub text: Cow<'static, str>,
    pub skipped: Vec<SkippedTemplate>,
}

/// Load the first readable template from `sources`.
pub fn load(sources: &[TemplateSource]) -> Result<LoadedTemplate, SessionError> {
    let mut skipped = Vec::new();

    for source in sources {
        match source.read() {
            Ok(text) => return Ok(LoadedTemplate { text, skipped }),
            Err(error) => {
                if let TemplateSource::File(path) = source {
                    warn!("Skipping template {}: {}", path.display(), error);
                    skipped.push(SkippedTemplate {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }
    }

    Err(SessionError::TemplateUnavailable {
        tried: skipped.into_iter().map(|s| s.path).collect(),
    })
}

/// Substitute both placeholders. Plain text replacement, nothing is escaped.
pub fn render(template: &str, name: &str, source_path: &str) -> String {
    template
        .replace(PATH_PLACEHOLDER, source_path)
        .replace(NAME_PLACEHOLDER, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let rendered = render("path=@@session-path@@ name=@@session@@", "proj", "/path/to/proj");
        assert_eq!(rendered, "path=/path/to/proj name=proj");
    }

    #[test]
    fn test_render_is_order_independent() {
        let forward = render("@@session@@:@@session-path@@", "n", "/p");
        let backward = render("@@session-path@@:@@session@@", "n", "/p");
        assert_eq!(forward, "n:/p");
        assert_eq!(backward, "/p:n");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let rendered = render("@@session@@ @@session@@", "a", "/b");
        assert_eq!(rendered, "a a");
    }

    #[test]
    fn test_bundled_template_has_placeholders() {
        assert!(BUNDLED_TEMPLATE.contains(PATH_PLACEHOLDER));
        assert!(BUNDLED_TEMPLATE.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_candidates_put_user_template_first() {
        let sources = TemplateSource::candidates(Some(Path::new("/tmp/mine.kitty-session")));
        assert_eq!(
            sources,
            vec![
                TemplateSource::File(PathBuf::from("/tmp/mine.kitty-session")),
                TemplateSource::Bundled,
            ]
        );
        assert_eq!(TemplateSource::candidates(None), vec![TemplateSource::Bundled]);
    }

    #[test]
    fn test_load_falls_back_to_bundled_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.kitty-session");

        let loaded = load(&TemplateSource::candidates(Some(&missing))).unwrap();

        assert_eq!(loaded.text, BUNDLED_TEMPLATE);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].path, missing);
    }

    #[test]
    fn test_load_reports_unavailable_when_all_sources_fail() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.kitty-session");

        let err = load(&[TemplateSource::File(missing.clone())]).unwrap_err();

        match err {
            SessionError::TemplateUnavailable { tried } => assert_eq!(tried, vec![missing]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
