//! Role management statements
//!
//! - CREATE ROLE / USER / GROUP: create a role with options
//! - ALTER ROLE: change role options (SUPERUSER, LOGIN, PASSWORD, ...)
//! - ALTER ROLE ... SET: change a per-role configuration default
//! - DROP ROLE: remove roles
//! - GRANT / REVOKE role: change role membership

use super::options::RoleOption;
use super::variable_set::SetVariableStatement;
use gatekeeper_commons::{OptionNames, RoleName, RoleSpec};
use serde::{Deserialize, Serialize};

/// Which keyword introduced a CREATE ROLE statement. Only affects defaults
/// (USER implies LOGIN) in the host; the gatekeeper treats all three alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoleStatementType {
    #[default]
    Role,
    User,
    Group,
}

/// CREATE ROLE command
///
/// ```sql
/// CREATE ROLE name [ [ WITH ] option [ ... ] ]
///   -- option: SUPERUSER | NOSUPERUSER | IN ROLE role [, ...] | ROLE role [, ...] | ...
/// ```
///
/// `IN ROLE a, b` arrives as the `addroleto` option with a role list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleStatement {
    pub stmt_type: RoleStatementType,
    pub role: RoleName,
    pub options: Vec<RoleOption>,
}

impl CreateRoleStatement {
    pub fn new(role: impl Into<RoleName>) -> Self {
        Self {
            stmt_type: RoleStatementType::Role,
            role: role.into(),
            options: Vec::new(),
        }
    }

    pub fn with_type(mut self, stmt_type: RoleStatementType) -> Self {
        self.stmt_type = stmt_type;
        self
    }

    pub fn with_option(mut self, option: RoleOption) -> Self {
        self.options.push(option);
        self
    }

    /// Shorthand for `IN ROLE ...`.
    pub fn in_roles(self, roles: Vec<RoleSpec>) -> Self {
        self.with_option(RoleOption::role_list(OptionNames::ADD_ROLE_TO, roles))
    }
}

/// ALTER ROLE command
///
/// ```sql
/// ALTER ROLE role_specification [ WITH ] option [ ... ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterRoleStatement {
    pub role: RoleSpec,
    pub options: Vec<RoleOption>,
}

impl AlterRoleStatement {
    pub fn new(role: RoleSpec) -> Self {
        Self {
            role,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: RoleOption) -> Self {
        self.options.push(option);
        self
    }
}

/// ALTER ROLE ... SET command
///
/// ```sql
/// ALTER ROLE { role_specification | ALL } [ IN DATABASE database_name ] SET configuration_parameter { TO | = } value
/// ALTER ROLE { role_specification | ALL } [ IN DATABASE database_name ] RESET configuration_parameter
/// ```
///
/// Carries no role options; `role` is `None` for `ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterRoleSetStatement {
    pub role: Option<RoleSpec>,
    pub database: Option<String>,
    pub setting: SetVariableStatement,
}

impl AlterRoleSetStatement {
    pub fn new(role: Option<RoleSpec>, setting: SetVariableStatement) -> Self {
        Self {
            role,
            database: None,
            setting,
        }
    }
}

/// DROP ROLE command
///
/// ```sql
/// DROP ROLE [ IF EXISTS ] name [, ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRoleStatement {
    pub roles: Vec<RoleSpec>,
    pub missing_ok: bool,
}

impl DropRoleStatement {
    pub fn new(roles: Vec<RoleSpec>) -> Self {
        Self {
            roles,
            missing_ok: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// GRANT / REVOKE role membership
///
/// ```sql
/// GRANT role_name [, ...] TO role_specification [, ...] [ WITH ADMIN OPTION ] [ GRANTED BY role_specification ]
/// REVOKE [ ADMIN OPTION FOR ] role_name [, ...] FROM role_specification [, ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRoleStatement {
    pub granted_roles: Vec<RoleName>,
    pub grantees: Vec<RoleSpec>,
    pub is_grant: bool,
    pub admin_option: bool,
    pub grantor: Option<RoleSpec>,
}

impl GrantRoleStatement {
    pub fn grant(granted_roles: Vec<RoleName>, grantees: Vec<RoleSpec>) -> Self {
        Self {
            granted_roles,
            grantees,
            is_grant: true,
            admin_option: false,
            grantor: None,
        }
    }

    pub fn revoke(granted_roles: Vec<RoleName>, grantees: Vec<RoleSpec>) -> Self {
        Self {
            is_grant: false,
            ..Self::grant(granted_roles, grantees)
        }
    }
}
