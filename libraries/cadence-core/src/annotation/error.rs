/// Caller-facing error taxonomy
use serde::Serialize;
use std::fmt;

/// Result type alias for coordinator operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Kind of a caller-facing error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A required parameter is absent, or every id source of a batch is empty
    MissingParameter,
    /// Input is present but malformed
    InvalidArgument,
    /// The target id does not exist
    DataNotFound,
    /// Any other failure; details stay in the server log
    Internal,
}

impl ErrorKind {
    /// Subsonic protocol error code
    pub fn code(self) -> u16 {
        match self {
            Self::MissingParameter => 10,
            Self::DataNotFound => 70,
            Self::InvalidArgument | Self::Internal => 0,
        }
    }
}

/// Error returned to the caller of a coordinator operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingParameter, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn data_not_found() -> Self {
        Self::new(ErrorKind::DataNotFound, "ID not found")
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal, "Internal Error")
    }

    /// Subsonic protocol error code of this error
    pub fn code(&self) -> u16 {
        self.kind.code()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
