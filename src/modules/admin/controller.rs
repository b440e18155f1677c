use authgate_auth::authorize;
use authgate_core::{AppError, BaseResponse};
use authgate_models::{RequiredRole, Role};
use axum::{extract::State, http::HeaderMap};
use tracing::instrument;

use crate::modules::admin::model::AdminOverview;
use crate::state::AppState;

/// Guarded per operation rather than by a router layer.
#[instrument(skip_all)]
pub async fn get_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<BaseResponse<AdminOverview>, AppError> {
    authorize(RequiredRole::Admin, &state.resolver, &headers, || async {
        Ok(BaseResponse::success(AdminOverview {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            roles: Role::values().iter().map(|r| r.to_string()).collect(),
            required_roles: [RequiredRole::None, RequiredRole::User, RequiredRole::Admin]
                .iter()
                .map(|r| r.value().to_string())
                .collect(),
        }))
    })
    .await
}
