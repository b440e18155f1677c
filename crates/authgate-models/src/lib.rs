//! # Authgate Models
//!
//! Domain types for role-based access control:
//!
//! - [`roles`]: the closed [`Role`] set and the per-endpoint [`RequiredRole`]
//! - [`users`]: the request-scoped caller identity, [`LoginUser`]
//!
//! # Example
//!
//! ```ignore
//! use authgate_models::{RequiredRole, Role};
//!
//! let required: RequiredRole = "admin".parse()?;
//! assert!(required.is_satisfied_by(Role::Admin));
//! assert!(!required.is_satisfied_by(Role::User));
//! ```

pub mod roles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use roles::{InvalidRequiredRole, RequiredRole, Role};
pub use users::LoginUser;
