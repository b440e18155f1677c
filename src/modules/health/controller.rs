use authgate_core::BaseResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Open to everyone, including callers without a token.
pub async fn health_check() -> BaseResponse<HealthStatus> {
    BaseResponse::success(HealthStatus {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
    })
}
