use super::decision::{Denial, DenialMessages, PolicyDecision};
use gatekeeper_configs::PolicySettings;
use gatekeeper_session::{is_elevated, is_security_restricted, ExecutionContext, RoleCatalog};

/// Decide whether the current context may hand out superuser rights.
///
/// Checks run in a fixed order and the first match wins, so the reason names
/// the most specific context: strict mode, extension script, restricted
/// operation, then elevation.
pub(crate) fn guard_role_statement(
    ctx: &ExecutionContext,
    catalog: &dyn RoleCatalog,
    settings: &PolicySettings,
) -> PolicyDecision {
    let reason = if settings.strict {
        Some(DenialMessages::ROLE_SUPERUSER)
    } else if ctx.creating_extension {
        Some(DenialMessages::ROLE_SUPERUSER_IN_EXTENSION)
    } else if is_security_restricted(ctx) {
        Some(DenialMessages::ROLE_SUPERUSER_IN_RESTRICTED)
    } else if is_elevated(ctx, catalog) {
        Some(DenialMessages::ROLE_SUPERUSER)
    } else {
        None
    };

    match reason {
        Some(reason) => PolicyDecision::Deny(Denial::violation(reason)),
        None => PolicyDecision::Allow,
    }
}
