//! Caller identity resolved for a single request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

/// The caller behind the current request.
///
/// Produced by an identity resolver per request. `user_role` is kept as the
/// raw string the session carried so that unknown values stay observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub user_role: String,
}

impl LoginUser {
    pub fn new(id: Uuid, user_role: impl Into<String>) -> Self {
        Self {
            id,
            user_name: None,
            user_role: user_role.into(),
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Decoded role, or `None` when the raw string is not a known tag.
    pub fn role(&self) -> Option<Role> {
        Role::from_value(&self.user_role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_decoding() {
        let user = LoginUser::new(Uuid::new_v4(), "admin");
        assert_eq!(user.role(), Some(Role::Admin));
        assert!(user.is_admin());

        let user = LoginUser::new(Uuid::new_v4(), "xyz");
        assert_eq!(user.role(), None);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_serialize() {
        let id = Uuid::new_v4();
        let user = LoginUser::new(id, "user").with_user_name("alice");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["user_name"], "alice");
        assert_eq!(json["user_role"], "user");
    }
}
