use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacError {
    InvalidUrl(String),
    MissingHost,
    PacUnavailable(String),
    EvaluationFailed(String),
    MalformedSelection(String),
}

impl fmt::Display for PacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            PacError::MissingHost => write!(f, "Missing host in target URL"),
            PacError::PacUnavailable(msg) => write!(f, "PAC file unavailable: {}", msg),
            PacError::EvaluationFailed(msg) => write!(f, "PAC evaluation failed: {}", msg),
            PacError::MalformedSelection(msg) => write!(f, "Malformed engine response: {}", msg),
        }
    }
}

impl std::error::Error for PacError {}

pub type Result<T> = std::result::Result<T, PacError>;
