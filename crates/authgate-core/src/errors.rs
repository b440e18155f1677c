//! Application error type with HTTP response conversion.
//!
//! Every failure that reaches the transport boundary is an [`AppError`]. It
//! carries a stable numeric [`ErrorCode`] that clients match on, the HTTP
//! status to send, and the underlying error for logging.

use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::response::BaseResponse;

/// Stable error codes exposed to clients in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    ParamsError,
    NotLoginError,
    NoAuthError,
    ForbiddenError,
    NotFoundError,
    SystemError,
    OperationError,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::ParamsError => 40000,
            ErrorCode::NotLoginError => 40100,
            ErrorCode::NoAuthError => 40101,
            ErrorCode::ForbiddenError => 40300,
            ErrorCode::NotFoundError => 40400,
            ErrorCode::SystemError => 50000,
            ErrorCode::OperationError => 50001,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "ok",
            ErrorCode::ParamsError => "Invalid request parameters",
            ErrorCode::NotLoginError => "Not logged in",
            ErrorCode::NoAuthError => "No permission",
            ErrorCode::ForbiddenError => "Access forbidden",
            ErrorCode::NotFoundError => "Requested data not found",
            ErrorCode::SystemError => "Internal system error",
            ErrorCode::OperationError => "Operation failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,
            ErrorCode::ParamsError => StatusCode::BAD_REQUEST,
            ErrorCode::NotLoginError => StatusCode::UNAUTHORIZED,
            ErrorCode::NoAuthError | ErrorCode::ForbiddenError => StatusCode::FORBIDDEN,
            ErrorCode::NotFoundError => StatusCode::NOT_FOUND,
            ErrorCode::SystemError | ErrorCode::OperationError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub code: ErrorCode,
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            code,
            status: code.status(),
            error: err.into(),
        }
    }

    /// Error carrying the code's default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, anyhow::anyhow!(code.message()))
    }

    pub fn params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParamsError, anyhow::anyhow!(message.into()))
    }

    pub fn not_login(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotLoginError, anyhow::anyhow!(message.into()))
    }

    pub fn no_auth() -> Self {
        Self::from_code(ErrorCode::NoAuthError)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ForbiddenError, anyhow::anyhow!(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFoundError, anyhow::anyhow!(message.into()))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorCode::SystemError, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::internal(anyhow::anyhow!(message.into()))
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OperationError, anyhow::anyhow!(message.into()))
    }

    /// Fails with `code` when `condition` holds.
    pub fn throw_if(condition: bool, code: ErrorCode) -> Result<(), AppError> {
        if condition {
            return Err(Self::from_code(code));
        }
        Ok(())
    }

    /// Fails with `code` and a custom message when `condition` holds.
    pub fn throw_if_msg(
        condition: bool,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<(), AppError> {
        if condition {
            return Err(Self::new(code, anyhow::anyhow!(message.into())));
        }
        Ok(())
    }

    /// Message shown to the client. Server errors never expose their cause.
    pub fn client_message(&self) -> String {
        if self.status.is_server_error() {
            self.code.message().to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code.code(), error = ?self.error, "Request failed");
        }

        let body = BaseResponse::<()>::error(self.code, self.client_message());
        (self.status, body).into_response()
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::internal(err)
    }
}
