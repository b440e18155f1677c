//! JWT claim structure carried by bearer tokens.

use authgate_core::AppError;
use authgate_models::LoginUser;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims of an access token.
///
/// The role travels as the raw tag so that a token minted with a role this
/// build does not know still decodes and is denied by the role check rather
/// than by the token parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Display name, if the session layer knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Raw role tag: "user", "admin", "ban", or anything else the issuer wrote.
    /// Absent decodes to `""`, which no requirement accepts.
    #[serde(default)]
    pub user_role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::not_login("Invalid user ID in token"))
    }

    pub fn into_login_user(self) -> Result<LoginUser, AppError> {
        let id = self.user_id()?;
        Ok(LoginUser {
            id,
            user_name: self.user_name,
            user_role: self.user_role,
        })
    }
}
