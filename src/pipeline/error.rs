use thiserror::Error;

/// Everything that can go wrong between receiving an upload and assembling
/// the response envelope. Variants carry internal detail for the logs; the
/// client only ever sees [`PipelineError::safe_message`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid upload: {0}")]
    InvalidInput(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("upstream rejected credentials: {0}")]
    UpstreamAuth(String),

    #[error("upstream rate limit exceeded")]
    UpstreamRateLimit,

    #[error("malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("translation changed the answer key set")]
    TranslationShapeMismatch,
}

impl PipelineError {
    /// Classify a non-success status from either upstream provider.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::UpstreamAuth(format!("status {status}: {body}")),
            429 => Self::UpstreamRateLimit,
            _ => Self::UpstreamUnavailable(format!("status {status}: {body}")),
        }
    }

    /// Message safe to put in the response envelope. Describes the failure
    /// category without echoing upstream error bodies.
    pub fn safe_message(&self) -> String {
        match self {
            Self::InvalidInput(detail) => format!("Invalid upload: {detail}"),
            Self::UpstreamUnavailable(_) => {
                "The analysis service is temporarily unavailable. Please try again later."
                    .to_string()
            }
            Self::UpstreamAuth(_) => {
                "The analysis service rejected our credentials. Please contact the operator."
                    .to_string()
            }
            Self::UpstreamRateLimit => {
                "The analysis service is receiving too many requests. Please try again later."
                    .to_string()
            }
            Self::MalformedModelOutput(_) => {
                "The model returned an answer in an unexpected format.".to_string()
            }
            Self::TranslationShapeMismatch => {
                "The translation step returned an inconsistent answer.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedModelOutput(err.to_string())
        } else if err.is_timeout() {
            Self::UpstreamUnavailable(format!("request timed out: {err}"))
        } else {
            Self::UpstreamUnavailable(err.to_string())
        }
    }
}
