//! Feature modules. Each one exposes a router; the required role for its
//! routes is declared where the router is mounted (see [`crate::router`]).
//!
//! - [`health`]: liveness, no requirement
//! - [`users`]: the caller's own identity, requires `user`
//! - [`admin`]: administrative overview, requires `admin` (checked inside the handler)

pub mod admin;
pub mod health;
pub mod users;
