//! Role catalog lookups
//!
//! The host owns role storage; the gatekeeper only asks two questions of it:
//! "which id does this name resolve to" and "is this id a superuser".

use crate::error::{SessionError, SessionResult};
use crate::execution_context::ExecutionContext;
use gatekeeper_commons::{RoleId, RoleName, RoleSpec, SystemRoles};

/// Read-only view of the host's role catalog.
pub trait RoleCatalog {
    /// Resolve a role name to its id, `None` if no such role exists.
    fn role_id(&self, name: &RoleName) -> Option<RoleId>;

    /// Whether the role currently holds superuser-equivalent rights.
    ///
    /// Unknown ids are not superusers.
    fn is_superuser(&self, role: RoleId) -> bool;
}

/// Resolve a plain role name, failing the same way the host does for a missing role.
pub fn resolve_role_name(catalog: &dyn RoleCatalog, name: &RoleName) -> SessionResult<RoleId> {
    catalog
        .role_id(name)
        .ok_or_else(|| SessionError::UndefinedRole(name.to_string()))
}

/// Resolve a role reference against the catalog and the current context.
///
/// `PUBLIC` is not a role and fails with [`SessionError::UndefinedRole`].
pub fn resolve_role_spec(
    catalog: &dyn RoleCatalog,
    ctx: &ExecutionContext,
    spec: &RoleSpec,
) -> SessionResult<RoleId> {
    match spec {
        RoleSpec::Name(name) => resolve_role_name(catalog, name),
        RoleSpec::CurrentRole | RoleSpec::CurrentUser => Ok(ctx.effective_role),
        RoleSpec::SessionUser => Ok(ctx.session_role),
        RoleSpec::Public => Err(SessionError::UndefinedRole(SystemRoles::PUBLIC.to_string())),
    }
}
