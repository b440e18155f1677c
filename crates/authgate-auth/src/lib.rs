//! # Authgate Auth
//!
//! Role-based access control for HTTP operations.
//!
//! - [`interceptor`]: the role check ([`evaluate`], [`check_access`], [`authorize`])
//!   and the [`IdentityResolver`] seam it calls
//! - [`error`]: [`AuthorizationError`], the single denial value
//! - [`claims`] / [`jwt`]: bearer token format used by the HTTP resolver
//!
//! # Example
//!
//! ```ignore
//! use authgate_auth::authorize;
//! use authgate_models::RequiredRole;
//!
//! let stats = authorize(RequiredRole::Admin, &resolver, &parts, || async {
//!     load_stats().await
//! })
//! .await?;
//! ```

pub mod claims;
pub mod error;
pub mod interceptor;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::{AuthorizationError, AuthorizationErrorKind};
pub use interceptor::{IdentityResolver, authorize, check_access, evaluate};
pub use jwt::{create_access_token, verify_token};
