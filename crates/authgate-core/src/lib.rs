//! # Authgate Core
//!
//! Foundational types shared by every Authgate crate:
//!
//! - [`errors`]: [`ErrorCode`] taxonomy and the [`AppError`] type rendered at the HTTP boundary
//! - [`response`]: the [`BaseResponse`] JSON envelope
//!
//! # Example
//!
//! ```ignore
//! use authgate_core::{AppError, BaseResponse, ErrorCode};
//!
//! async fn handler(id: i64) -> Result<BaseResponse<i64>, AppError> {
//!     AppError::throw_if(id <= 0, ErrorCode::ParamsError)?;
//!     Ok(BaseResponse::success(id))
//! }
//! ```

pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorCode};
pub use response::BaseResponse;
