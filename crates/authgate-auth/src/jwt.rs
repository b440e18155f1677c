//! Bearer token creation and verification.
//!
//! Verification is what the identity resolver uses on every guarded request.
//! Creation exists for tooling and tests; the service itself exposes no login
//! endpoint.

use authgate_config::JwtConfig;
use authgate_core::AppError;
use authgate_models::LoginUser;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::Claims;

/// Signs an access token for `user` that expires after the configured lifetime.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(user: &LoginUser, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        user_name: user.user_name.clone(),
        user_role: user.user_role.clone(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns a not-logged-in error if the token is malformed, expired or signed
/// with another secret.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::not_login("Invalid or expired token"))
}
