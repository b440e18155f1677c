//! Role check that wraps a guarded operation.
//!
//! [`authorize`] decides whether the caller behind a request context may run an
//! operation declared with a [`RequiredRole`], then runs it at most once. The
//! checks happen in a fixed order:
//!
//! 1. No requirement: run the operation. The caller is not resolved.
//! 2. Resolve the caller. Resolver failures are returned as-is.
//! 3. Unknown caller role: deny.
//! 4. Banned caller: deny, whatever the requirement.
//! 5. Admin requirement and caller is not an admin: deny.
//! 6. Run the operation and return its outcome unchanged.
//!
//! Every denial is the same [`AuthorizationError::no_auth`] value; the reason
//! is only logged.

use std::fmt;
use std::future::Future;

use authgate_models::{LoginUser, RequiredRole, Role};
use tracing::{debug, warn};

use crate::error::AuthorizationError;

/// Looks up the caller for a request context.
///
/// Implementations own any timeout or retry policy. Their error type is opaque
/// to the interceptor and is never turned into an [`AuthorizationError`].
pub trait IdentityResolver<Ctx: ?Sized>: Send + Sync {
    type Error;

    fn resolve(&self, ctx: &Ctx) -> impl Future<Output = Result<LoginUser, Self::Error>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DenyReason {
    UnknownRole,
    Banned,
    Insufficient,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::UnknownRole => f.write_str("unknown role"),
            DenyReason::Banned => f.write_str("banned"),
            DenyReason::Insufficient => f.write_str("insufficient role"),
        }
    }
}

fn deny(required: RequiredRole, caller: &LoginUser, reason: DenyReason) -> AuthorizationError {
    warn!(
        user_id = %caller.id,
        user_role = %caller.user_role,
        required_role = %required,
        reason = %reason,
        "Access denied"
    );
    AuthorizationError::no_auth()
}

/// Decides whether an already resolved caller satisfies `required`.
pub fn evaluate(required: RequiredRole, caller: &LoginUser) -> Result<(), AuthorizationError> {
    if required.is_none() {
        return Ok(());
    }

    let Some(role) = caller.role() else {
        return Err(deny(required, caller, DenyReason::UnknownRole));
    };

    if role == Role::Ban {
        return Err(deny(required, caller, DenyReason::Banned));
    }

    if !required.is_satisfied_by(role) {
        return Err(deny(required, caller, DenyReason::Insufficient));
    }

    debug!(user_id = %caller.id, role = %role, required_role = %required, "Access granted");
    Ok(())
}

/// Runs the role check for a request context without invoking anything.
///
/// Returns `None` when no role is required (the caller is not resolved) and
/// the resolved caller otherwise.
pub async fn check_access<Ctx, R, E>(
    required: RequiredRole,
    resolver: &R,
    ctx: &Ctx,
) -> Result<Option<LoginUser>, E>
where
    Ctx: ?Sized,
    R: IdentityResolver<Ctx>,
    E: From<AuthorizationError> + From<R::Error>,
{
    if required.is_none() {
        return Ok(None);
    }

    let caller = resolver.resolve(ctx).await?;
    evaluate(required, &caller)?;
    Ok(Some(caller))
}

/// Runs `operation` once if the caller behind `ctx` satisfies `required`.
///
/// The operation's result, success or error, is returned untouched. On denial
/// the operation is never called.
pub async fn authorize<Ctx, R, F, Fut, T, E>(
    required: RequiredRole,
    resolver: &R,
    ctx: &Ctx,
    operation: F,
) -> Result<T, E>
where
    Ctx: ?Sized,
    R: IdentityResolver<Ctx>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<AuthorizationError> + From<R::Error>,
{
    check_access::<Ctx, R, E>(required, resolver, ctx).await?;
    operation().await
}
