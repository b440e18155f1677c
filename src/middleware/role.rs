//! Role-based authorization middleware for Axum
//!
//! Routes declare a [`RequiredRole`] when they are registered:
//! 1. Layer-based, via [`guard`] (or [`require_user`] / [`require_admin`] directly)
//! 2. Per-operation, by wrapping a handler body in [`authorize`](authgate_auth::authorize)
//!
//! On success the resolved [`LoginUser`] is stored in the request extensions,
//! where [`AuthUser`](crate::middleware::auth::AuthUser) picks it up.

use authgate_auth::check_access;
use authgate_core::AppError;
use authgate_models::{LoginUser, RequiredRole};
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Checks the caller against `required` and runs the rest of the stack once
/// on success.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected_routes = Router::new()
///     .route("/me", get(me_handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_role(state, req, next, RequiredRole::User)
///     ));
/// ```
pub async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    required: RequiredRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let caller: Option<LoginUser> =
        check_access::<_, _, AppError>(required, &state.resolver, &parts.headers).await?;
    if let Some(caller) = caller {
        parts.extensions.insert(caller);
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Any recognized, non-banned caller.
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, RequiredRole::User).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Admin callers only.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, RequiredRole::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Registers every route of `router` under `required`.
///
/// # Example
///
/// ```rust,ignore
/// let admin_routes = guard(init_admin_router(), RequiredRole::Admin, &state);
/// ```
pub fn guard(
    router: Router<AppState>,
    required: RequiredRole,
    state: &AppState,
) -> Router<AppState> {
    match required {
        RequiredRole::None => router,
        RequiredRole::User => {
            router.route_layer(middleware::from_fn_with_state(state.clone(), require_user))
        }
        RequiredRole::Admin => {
            router.route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        }
    }
}
