//! Role model for endpoint access control.
//!
//! Callers carry a raw role string (`"user"`, `"admin"` or `"ban"`). Endpoints
//! declare a [`RequiredRole`] when they are registered. The string tags are an
//! external contract and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    /// Banned account. Denied everywhere a role is required.
    Ban,
}

impl Role {
    /// Decodes a role tag. Unknown tags, including the empty string, yield `None`.
    pub fn from_value(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "ban" => Some(Role::Ban),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Ban => "ban",
        }
    }

    pub fn values() -> [&'static str; 3] {
        [Role::User.value(), Role::Admin.value(), Role::Ban.value()]
    }

    /// Higher number = more privileges.
    pub fn privilege_level(&self) -> u8 {
        match self {
            Role::Ban => 0,
            Role::User => 1,
            Role::Admin => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid required role: {0:?} (expected \"\", \"user\" or \"admin\")")]
pub struct InvalidRequiredRole(pub String);

/// Minimum role declared on an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequiredRole {
    /// No restriction; unauthenticated callers are allowed.
    #[default]
    None,
    User,
    Admin,
}

impl RequiredRole {
    /// Decodes a declared role tag. `"ban"` is a caller-side sentinel and is
    /// never accepted as a requirement.
    pub fn from_value(value: &str) -> Result<RequiredRole, InvalidRequiredRole> {
        match value {
            "" => Ok(RequiredRole::None),
            "user" => Ok(RequiredRole::User),
            "admin" => Ok(RequiredRole::Admin),
            other => Err(InvalidRequiredRole(other.to_string())),
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            RequiredRole::None => "",
            RequiredRole::User => "user",
            RequiredRole::Admin => "admin",
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            RequiredRole::None => None,
            RequiredRole::User => Some(Role::User),
            RequiredRole::Admin => Some(Role::Admin),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RequiredRole::None)
    }

    /// Banned callers never satisfy a requirement; otherwise the caller's
    /// privilege level must reach the required one.
    pub fn is_satisfied_by(&self, caller: Role) -> bool {
        let Some(required) = self.role() else {
            return true;
        };
        if caller == Role::Ban {
            return false;
        }
        caller.privilege_level() >= required.privilege_level()
    }
}

impl FromStr for RequiredRole {
    type Err = InvalidRequiredRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequiredRole::from_value(s)
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredRole::None => f.write_str("none"),
            other => f.write_str(other.value()),
        }
    }
}
