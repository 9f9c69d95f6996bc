use crate::ddl::*;

/// An administrative statement handed over by the host parser.
///
/// Carries the original statement text (for diagnostics and log lines) next
/// to the parsed variant. The gatekeeper only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministrativeStatement {
    /// Original SQL text, empty when the host did not provide one
    pub(crate) sql_text: String,
    /// Parsed statement variant
    pub(crate) kind: AdministrativeStatementKind,
}

/// Statement variants (internal to AdministrativeStatement)
///
/// Only the variants with a dedicated arm in the policy rule table are
/// modelled; everything else is [`AdministrativeStatementKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdministrativeStatementKind {
    // ===== Role Management =====
    /// ALTER ROLE <role> [WITH] <options>
    AlterRole(AlterRoleStatement),
    /// ALTER ROLE <role> [IN DATABASE <db>] SET/RESET ...
    AlterRoleSet(AlterRoleSetStatement),
    /// CREATE ROLE|USER|GROUP <name> [WITH] <options>
    CreateRole(CreateRoleStatement),
    /// DROP ROLE [IF EXISTS] <name>, ...
    DropRole(DropRoleStatement),
    /// GRANT|REVOKE <role>, ... TO|FROM <role>, ...
    GrantRole(GrantRoleStatement),

    // ===== Bulk Transfer =====
    /// COPY ... FROM|TO <file|PROGRAM|STDIN|STDOUT>
    Copy(CopyStatement),

    // ===== Session =====
    /// SET / RESET <parameter>
    SetSessionVariable(SetVariableStatement),

    // ===== Extensions =====
    /// CREATE EXTENSION <name>
    CreateExtension(CreateExtensionStatement),

    // ===== Everything Else =====
    /// Any other utility statement, tagged with its command name
    Other(String),
}

impl AdministrativeStatement {
    /// Create a statement with SQL text and kind
    pub fn new(sql_text: impl Into<String>, kind: AdministrativeStatementKind) -> Self {
        Self {
            sql_text: sql_text.into(),
            kind,
        }
    }

    /// Create a statement without source text
    pub fn from_kind(kind: AdministrativeStatementKind) -> Self {
        Self::new(String::new(), kind)
    }

    /// Get the original SQL text
    pub fn as_str(&self) -> &str {
        &self.sql_text
    }

    /// Get the statement kind (for pattern matching)
    pub fn kind(&self) -> &AdministrativeStatementKind {
        &self.kind
    }

    /// Whether the statement manages roles or role membership
    pub fn is_role_statement(&self) -> bool {
        matches!(
            self.kind,
            AdministrativeStatementKind::AlterRole(_)
                | AdministrativeStatementKind::AlterRoleSet(_)
                | AdministrativeStatementKind::CreateRole(_)
                | AdministrativeStatementKind::DropRole(_)
                | AdministrativeStatementKind::GrantRole(_)
        )
    }

    /// Get a human-readable name for this statement type
    pub fn name(&self) -> &str {
        match &self.kind {
            AdministrativeStatementKind::AlterRole(_) => "ALTER ROLE",
            AdministrativeStatementKind::AlterRoleSet(_) => "ALTER ROLE SET",
            AdministrativeStatementKind::CreateRole(stmt) => match stmt.stmt_type {
                RoleStatementType::Role => "CREATE ROLE",
                RoleStatementType::User => "CREATE USER",
                RoleStatementType::Group => "CREATE GROUP",
            },
            AdministrativeStatementKind::DropRole(_) => "DROP ROLE",
            AdministrativeStatementKind::GrantRole(stmt) => {
                if stmt.is_grant {
                    "GRANT ROLE"
                } else {
                    "REVOKE ROLE"
                }
            },
            AdministrativeStatementKind::Copy(_) => "COPY",
            AdministrativeStatementKind::SetSessionVariable(stmt) => match stmt.kind {
                VariableSetKind::Reset | VariableSetKind::ResetAll => "RESET",
                VariableSetKind::Value | VariableSetKind::Default => "SET",
            },
            AdministrativeStatementKind::CreateExtension(_) => "CREATE EXTENSION",
            AdministrativeStatementKind::Other(tag) => tag,
        }
    }
}

impl From<AdministrativeStatementKind> for AdministrativeStatement {
    fn from(kind: AdministrativeStatementKind) -> Self {
        Self::from_kind(kind)
    }
}
