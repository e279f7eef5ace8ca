use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a request and a file on disk.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response from completion service: {0}")]
    UnexpectedResponse(String),

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Short hint printed under the error in the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GenerationError::InvalidRequest(_) => {
                Some("Check the topic and options, then run the command again.")
            }
            GenerationError::Authentication(_) => Some(
                "Set OPENAI_API_KEY in your environment or .env file. Run `cheatsheet-agent setup` for details.",
            ),
            GenerationError::RateLimit(_) => {
                Some("Wait a moment before trying again, or check your plan's quota.")
            }
            GenerationError::Network(_) => {
                Some("Check your connection and the configured API base URL.")
            }
            GenerationError::UnexpectedResponse(_) => None,
            GenerationError::Io { .. } => {
                Some("Check that the output directory is writable and the disk is not full.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = GenerationError::Io {
            path: PathBuf::from("cheat_sheets/x.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("cheat_sheets/x.md"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_messages_are_verbatim() {
        let err = GenerationError::RateLimit("Rate limit reached for gpt-4o".to_string());
        assert_eq!(
            err.to_string(),
            "rate limit exceeded: Rate limit reached for gpt-4o"
        );
    }
}
