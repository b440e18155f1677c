use authgate_auth::{IdentityResolver, verify_token};
use authgate_config::JwtConfig;
use authgate_core::AppError;
use authgate_models::LoginUser;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::state::AppState;

/// Resolves the caller from an `Authorization: Bearer <token>` header.
///
/// Every failure is a not-logged-in error; it is never reported as a
/// permission denial.
#[derive(Clone, Debug)]
pub struct BearerTokenResolver {
    jwt_config: JwtConfig,
}

impl BearerTokenResolver {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self { jwt_config }
    }
}

impl IdentityResolver<HeaderMap> for BearerTokenResolver {
    type Error = AppError;

    async fn resolve(&self, headers: &HeaderMap) -> Result<LoginUser, AppError> {
        let authorization = headers
            .typed_try_get::<Authorization<Bearer>>()
            .map_err(|_| AppError::not_login("Invalid authorization header format"))?
            .ok_or_else(|| AppError::not_login("Missing authorization header"))?;

        verify_token(authorization.token(), &self.jwt_config)?.into_login_user()
    }
}

/// Extractor for the current caller, without any role requirement.
///
/// Reuses the identity a role middleware already resolved for this request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub LoginUser);

impl AuthUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<LoginUser>() {
            return Ok(AuthUser(user.clone()));
        }

        let user = state.resolver.resolve(&parts.headers).await?;
        Ok(AuthUser(user))
    }
}
