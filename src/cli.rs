// ABOUTME: Command line surface of kitty-zoxide-sessions
// Flags select the operation; everything else comes from the environment and config file

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "kitty-zoxide-sessions")]
#[command(version, about = "Launch a kitty session from zoxide entries.")]
#[command(
    after_help = "For more information about kitty sessions visit: https://sw.kovidgoyal.net/kitty/sessions/"
)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Edit session file
    #[arg(short, long)]
    pub edit: bool,

    /// Delete a session file
    #[arg(short = 'D', long)]
    pub delete: bool,

    /// Delete all session files
    #[arg(long)]
    pub delete_all: bool,

    /// Enable ANSI formatting in fzf
    #[arg(long)]
    pub ansi: bool,

    /// Close window on selection
    #[arg(short = 'c', long)]
    pub auto_close: bool,

    /// Path to a custom kitty session template
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}

/// Help text printed after "No session selected".
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["kzs", "-d", "-e", "-c", "-t", "~/t.kitty-session"]).unwrap();
        assert!(args.debug);
        assert!(args.edit);
        assert!(args.auto_close);
        assert_eq!(args.template, Some(PathBuf::from("~/t.kitty-session")));
        assert!(!args.delete);

        let args = Args::try_parse_from(["kzs", "-D"]).unwrap();
        assert!(args.delete);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = Args::try_parse_from(["kzs", "--nope"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_usage_mentions_flags() {
        let usage = usage();
        assert!(usage.contains("--delete-all"));
        assert!(usage.contains("--auto-close"));
    }
}
