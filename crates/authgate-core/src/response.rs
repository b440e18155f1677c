//! Uniform JSON response envelope.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::errors::ErrorCode;

/// `{"code": .., "data": .., "message": ..}` body shared by successes and failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: String,
}

impl<T> BaseResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            data: Some(data),
            message: ErrorCode::Success.message().to_string(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            data: None,
            message: message.into(),
        }
    }
}

impl<T> IntoResponse for BaseResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
