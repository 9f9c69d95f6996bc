use super::decision::{Denial, DenialMessages, PolicyDecision};
use super::guard::guard_role_statement;
use gatekeeper_commons::{OptionNames, RoleSpec};
use gatekeeper_configs::PolicySettings;
use gatekeeper_session::{
    is_elevated, is_security_restricted, resolve_role_name, resolve_role_spec, ExecutionContext,
    RoleCatalog,
};
use gatekeeper_sql::ddl::{
    CopyStatement, CopyTarget, CreateExtensionStatement, CreateRoleStatement, GrantRoleStatement,
    RoleOption,
};
use gatekeeper_sql::{AdministrativeStatement, AdministrativeStatementKind};
use std::fmt;

type RuleResult = Result<(), Denial>;

/// Rule table over administrative statements.
///
/// Borrowed per call; holds no state of its own beyond the settings and the
/// catalog it was built with, so two evaluations of the same statement in the
/// same context always agree.
pub struct PolicyEngine<'a> {
    settings: &'a PolicySettings,
    catalog: &'a dyn RoleCatalog,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(settings: &'a PolicySettings, catalog: &'a dyn RoleCatalog) -> Self {
        Self { settings, catalog }
    }

    /// Evaluate one statement in the given context.
    pub fn evaluate(&self, stmt: &AdministrativeStatement, ctx: &ExecutionContext) -> PolicyDecision {
        if !self.settings.enabled {
            log::trace!(
                target: "gatekeeper::policy",
                "Policy disabled, passing {} through",
                stmt.name()
            );
            return PolicyDecision::Allow;
        }

        let result = match stmt.kind() {
            AdministrativeStatementKind::AlterRole(alter) => {
                self.check_alter_role(Some(&alter.role), &alter.options, ctx)
            }
            AdministrativeStatementKind::AlterRoleSet(alter) => {
                self.check_alter_role(alter.role.as_ref(), &[], ctx)
            }
            AdministrativeStatementKind::CreateRole(create) => self.check_create_role(create, ctx),
            // No rule for DROP ROLE; the host's own privilege checks apply.
            AdministrativeStatementKind::DropRole(_) => Ok(()),
            AdministrativeStatementKind::GrantRole(grant) => self.check_grant_role(grant, ctx),
            AdministrativeStatementKind::Copy(copy) => self.check_copy(copy, ctx),
            // The host refuses to change session authorization inside
            // security-definer functions and restricted operations.
            AdministrativeStatementKind::SetSessionVariable(_) => Ok(()),
            AdministrativeStatementKind::CreateExtension(create) => {
                self.check_create_extension(create)
            }
            AdministrativeStatementKind::Other(_) => Ok(()),
        };

        match result {
            Ok(()) => PolicyDecision::Allow,
            Err(denial) => {
                log::warn!(
                    target: "gatekeeper::policy",
                    "Denied {} for role {} (session role {}): {}",
                    stmt.name(),
                    ctx.effective_role,
                    ctx.session_role,
                    denial
                );
                PolicyDecision::Deny(denial)
            }
        }
    }

    /// Whether the current context may grant superuser rights at all.
    pub fn guard_role_statement(&self, ctx: &ExecutionContext) -> PolicyDecision {
        guard_role_statement(ctx, self.catalog, self.settings)
    }

    fn guard(&self, ctx: &ExecutionContext) -> RuleResult {
        self.guard_role_statement(ctx).into_result()
    }

    fn check_alter_role(
        &self,
        target: Option<&RoleSpec>,
        options: &[RoleOption],
        ctx: &ExecutionContext,
    ) -> RuleResult {
        if self.settings.protect_superuser_roles {
            // Unknown targets are left for the host to report.
            let target_is_superuser = target
                .and_then(|spec| resolve_role_spec(self.catalog, ctx, spec).ok())
                .is_some_and(|role| self.catalog.is_superuser(role));
            if target_is_superuser {
                self.guard(ctx)?;
            }
        }

        for option in options {
            if option.is(OptionNames::SUPERUSER) && grants_superuser(option)? {
                if let Some(target) = target {
                    self.check_superuser_permitted(target)?;
                }
                self.guard(ctx)?;
            }
        }
        Ok(())
    }

    fn check_create_role(&self, create: &CreateRoleStatement, ctx: &ExecutionContext) -> RuleResult {
        for option in &create.options {
            if option.is(OptionNames::SUPERUSER) {
                if grants_superuser(option)? {
                    self.check_superuser_permitted(&create.role)?;
                    self.guard(ctx)?;
                }
            } else if option.is(OptionNames::ADD_ROLE_TO) {
                let roles = option.as_role_list().ok_or_else(|| {
                    Denial::violation(format!("{} requires a list of roles", option.name))
                })?;
                for spec in roles {
                    let role = resolve_role_spec(self.catalog, ctx, spec)?;
                    if self.catalog.is_superuser(role) {
                        self.guard(ctx)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Enforce the reserved superuser list, when one is configured.
    ///
    /// Keyword targets such as `CURRENT_USER` are matched by their keyword,
    /// so they only pass if the keyword itself is listed.
    fn check_superuser_permitted(&self, role: &dyn fmt::Display) -> RuleResult {
        let role = role.to_string();
        if self.settings.is_superuser_role_permitted(&role) {
            return Ok(());
        }
        Err(Denial::violation(format!("Role {} not in permitted superuser list", role)))
    }

    fn check_grant_role(&self, grant: &GrantRoleStatement, ctx: &ExecutionContext) -> RuleResult {
        for name in &grant.granted_roles {
            let role = resolve_role_name(self.catalog, name)?;
            if self.catalog.is_superuser(role) {
                self.guard(ctx)?;
            }
        }
        Ok(())
    }

    fn check_copy(&self, copy: &CopyStatement, ctx: &ExecutionContext) -> RuleResult {
        match &copy.target {
            CopyTarget::Program(_) => Err(Denial::unconditional(DenialMessages::COPY_PROGRAM)),
            CopyTarget::File(_) => {
                let reason = if self.settings.strict {
                    Some(DenialMessages::COPY_FILE)
                } else if ctx.creating_extension {
                    Some(DenialMessages::COPY_FILE_IN_EXTENSION)
                } else if is_security_restricted(ctx) {
                    Some(DenialMessages::COPY_FILE_IN_RESTRICTED)
                } else if is_elevated(ctx, self.catalog) {
                    Some(DenialMessages::COPY_FILE)
                } else {
                    None
                };
                reason.map_or(Ok(()), |reason| Err(Denial::violation(reason)))
            }
            CopyTarget::Stdio => Ok(()),
        }
    }

    fn check_create_extension(&self, create: &CreateExtensionStatement) -> RuleResult {
        if self.settings.is_extension_denied(&create.name) {
            return Err(Denial::violation(format!("{} extension not allowed", create.name)));
        }
        Ok(())
    }
}

/// Boolean value of a `superuser` option; a value the host could not coerce
/// aborts the statement.
fn grants_superuser(option: &RoleOption) -> Result<bool, Denial> {
    option.as_bool().map_err(Denial::violation)
}
