use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Missing required configuration")]
    MissingConfiguration,
}

/// Serialized as `{"code", "message", "details"}` for reporting to the page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {} ({})", self.code, self.message, details),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn missing_var(key: &str) -> Self {
        Self {
            code: ErrorCode::MissingConfiguration,
            message: format!("{key} is required"),
            details: Some(format!("environment variable {key} is not set")),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
