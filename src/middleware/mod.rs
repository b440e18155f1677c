//! Middleware modules for request processing.
//!
//! - [`auth`]: bearer token identity resolution and the `AuthUser` extractor
//! - [`role`]: role checks attached to routes at registration time
//!
//! # Authorization Flow
//!
//! 1. A route is registered with a `RequiredRole` (`""`, `"user"` or `"admin"`)
//! 2. Routes without a requirement run directly; no token is read
//! 3. Otherwise the caller is resolved from `Authorization: Bearer <token>`
//! 4. Unknown, banned or insufficient roles are rejected with code 40101
//! 5. The handler runs once, with the caller available through `AuthUser`
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::guard;
//!
//! async fn me(AuthUser(user): AuthUser) -> BaseResponse<LoginUser> {
//!     BaseResponse::success(user)
//! }
//!
//! let users = guard(Router::new().route("/me", get(me)), RequiredRole::User, &state);
//! ```

pub mod auth;
pub mod role;
