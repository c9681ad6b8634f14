// ABOUTME: Error types for external process invocation
// Distinguishes missing binaries from commands that ran and failed

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0} command not found")]
    BinaryMissing(String),

    #[error("{program} failed (exit code {code})")]
    CommandFailed { program: String, code: i32 },

    #[error("could not parse editor command '{command}': {reason}")]
    InvalidEditorCommand { command: String, reason: String },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl GatewayError {
    /// Map a spawn/wait failure, treating `NotFound` as a missing binary.
    pub fn from_io(program: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::BinaryMissing(program.to_string())
        } else {
            Self::Io {
                program: program.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_binary_missing() {
        let err = GatewayError::from_io("fzf", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, GatewayError::BinaryMissing(ref p) if p == "fzf"));
        assert_eq!(err.to_string(), "fzf command not found");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = GatewayError::from_io(
            "zoxide",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, GatewayError::Io { .. }));
    }
}
