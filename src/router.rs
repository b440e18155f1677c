use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::middleware::role::guard;
use crate::modules::admin::init_admin_router;
use crate::modules::health::init_health_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;
use authgate_models::RequiredRole;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

/// Builds the application router.
///
/// | Route                 | Required role |
/// |-----------------------|---------------|
/// | `/api/health`         | none          |
/// | `/api/users/me`       | user          |
/// | `/api/admin/overview` | admin         |
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/health",
                    guard(init_health_router(), RequiredRole::None, &state),
                )
                .nest(
                    "/users",
                    guard(init_users_router(), RequiredRole::User, &state),
                )
                // The admin handler wraps itself with `authorize`
                .nest("/admin", init_admin_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    REQUEST_ID_HEADER,
                ])
                .expose_headers([REQUEST_ID_HEADER])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
