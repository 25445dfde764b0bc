use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed request: {0}")]
    ParseFailure(String),

    #[error("Email already registered")]
    AlreadyRegistered,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::ParseFailure(_) => ErrorCode::ParseFailure,
            AppError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            AppError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    ParseFailure,
    AlreadyRegistered,
    StoreUnavailable,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ParseFailure => "PARSE_FAILURE",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
