//! Context predicates
//!
//! Centralized answers to "is this statement running in a context that must
//! not be allowed to mint new superuser privileges".

use crate::catalog::RoleCatalog;
use crate::execution_context::ExecutionContext;

/// True when a non-superuser session is temporarily running as a superuser.
///
/// A session that was opened by a superuser is never considered elevated,
/// whatever identity it currently runs as. When the effective and session
/// identities match the catalog is not consulted.
pub fn is_elevated(ctx: &ExecutionContext, catalog: &dyn RoleCatalog) -> bool {
    if !ctx.is_switched() {
        return false;
    }

    let elevated = catalog.is_superuser(ctx.effective_role) && !ctx.session_is_superuser;
    if elevated {
        log::debug!(
            target: "gatekeeper::session",
            "Elevated context: session role {} running as superuser {}",
            ctx.session_role,
            ctx.effective_role
        );
    }
    elevated
}

/// True while the host is inside a security-restricted operation.
///
/// VACUUM, ANALYZE and materialized view refresh run user code under this
/// flag and have been the entry point of past escalation bugs
/// (CVE-2020-25695, CVE-2022-1552).
#[inline]
pub fn is_security_restricted(ctx: &ExecutionContext) -> bool {
    ctx.security_restricted
}
