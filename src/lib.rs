//! # Authgate
//!
//! Role-based access control for an Axum HTTP service.
//!
//! Every route is registered with a required role: none (`""`), `"user"` or
//! `"admin"`. For each request the caller is resolved from a bearer token and
//! checked before the handler runs:
//!
//! | Caller role      | No requirement | `user` | `admin` |
//! |------------------|----------------|--------|---------|
//! | `user`           | allowed        | allowed| denied  |
//! | `admin`          | allowed        | allowed| allowed |
//! | `ban`            | allowed        | denied | denied  |
//! | anything else    | allowed        | denied | denied  |
//!
//! Denials are indistinguishable to the client: code `40101`, HTTP 403,
//! message `"No permission"`. A missing or invalid token on a guarded route is
//! `40100` / HTTP 401 instead.
//!
//! ## Layout
//!
//! ```text
//! crates/
//! ├── authgate-core/    # ErrorCode, AppError, BaseResponse envelope
//! ├── authgate-config/  # JWT, CORS and server settings from env
//! ├── authgate-models/  # Role, RequiredRole, LoginUser
//! └── authgate-auth/    # authorize / check_access / evaluate, JWT claims
//! src/
//! ├── middleware/       # bearer resolver, AuthUser, role middleware
//! ├── modules/          # health, users, admin routes
//! ├── logging.rs        # tracing setup and request logging
//! ├── router.rs         # route table with declared roles
//! └── state.rs          # shared application state
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! SERVER_HOST=0.0.0.0
//! SERVER_PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! LOG_DIR=storage/logs
//! RUST_LOG=authgate=debug,authgate_auth=debug
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use authgate_auth;
pub use authgate_config;
pub use authgate_core;
pub use authgate_models;
