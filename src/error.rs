use std::path::Path;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    FileAccess,
    MalformedData,
    InvalidInput,
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileAccess => "FILE_ACCESS",
            Self::MalformedData => "MALFORMED_DATA",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Io => "IO_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TasktunesError {
    pub code: ErrorCode,
    pub message: String,
}

impl TasktunesError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn file_access(path: &Path, err: &std::io::Error) -> Self {
        Self::new(
            ErrorCode::FileAccess,
            format!("Cannot access {}: {err}", path.display()),
        )
    }

    pub fn malformed(path: &Path, err: &serde_json::Error) -> Self {
        Self::new(
            ErrorCode::MalformedData,
            format!("Malformed data in {}: {err}", path.display()),
        )
    }

    pub fn invalid_task_number(input: &str) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Invalid task number: '{input}'"),
        )
    }

    /// Console and other I/O failures not tied to a data file.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Io, message)
    }
}

impl From<std::io::Error> for TasktunesError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}

impl From<serde_json::Error> for TasktunesError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorCode::MalformedData, e.to_string())
    }
}
