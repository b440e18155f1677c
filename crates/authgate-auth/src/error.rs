//! Structured authorization failure.

use std::fmt;

use authgate_core::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationErrorKind {
    /// Unknown caller role, banned caller, or insufficient role.
    NoAuth,
}

impl AuthorizationErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AuthorizationErrorKind::NoAuth => ErrorCode::NoAuthError,
        }
    }
}

/// Denial raised before the guarded operation runs.
///
/// The message is deliberately generic: it never says which check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AuthorizationError {
    kind: AuthorizationErrorKind,
    message: Option<String>,
}

impl AuthorizationError {
    pub fn new(kind: AuthorizationErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    pub fn no_auth() -> Self {
        Self::new(AuthorizationErrorKind::NoAuth, None)
    }

    pub fn kind(&self) -> AuthorizationErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_no_auth(&self) -> bool {
        self.kind == AuthorizationErrorKind::NoAuth
    }
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(self.kind.error_code().message()),
        }
    }
}

impl From<AuthorizationError> for AppError {
    fn from(err: AuthorizationError) -> Self {
        let code = err.kind().error_code();
        AppError::new(code, err)
    }
}
