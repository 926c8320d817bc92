use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid mood \"{input}\" (expected a whole number from 1 to 10)")]
    InvalidMood { input: String },

    #[error("Unknown habit: {input} (try `habitcoach list`)")]
    UnknownHabit { input: String },

    #[error("Unknown city: {input} (try `habitcoach list`)")]
    UnknownCity { input: String },

    #[error("Unknown coach persona: {input} (expected strict, warm or playful)")]
    UnknownPersona { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unknown command: {input} (type `help` for a list)")]
    UnknownCommand { input: String },

    #[error("Failed to read secrets from {path}: {reason}")]
    Secrets { path: String, reason: String },
}

/// Failure of a single outbound call. Never leaves the client boundary.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("offline mode")]
    Offline,
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            ureq::Error::Timeout(_) => FetchError::Timeout,
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Why a coach report could not be produced
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ReportError {
    #[error(
        "No OpenAI API key found. Pass --openai-key, add OPENAI_API_KEY to secrets.toml, or set the environment variable."
    )]
    MissingCredential,

    #[error("Could not generate the report ({0}). Please try again shortly.")]
    GenerationFailed(String),
}

impl ReportError {
    /// Stable identifier for JSON output
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ReportError::MissingCredential => "missing_credential",
            ReportError::GenerationFailed(_) => "generation_failed",
        }
    }
}
