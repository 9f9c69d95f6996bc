//! Well-known names shared by the statement model and the policy engine.

/// Option element names as produced by the host parser for role statements.
///
/// `SUPERUSER` is used for both `SUPERUSER` and `NOSUPERUSER`; the option value
/// carries the boolean.
pub struct OptionNames;

impl OptionNames {
    pub const SUPERUSER: &'static str = "superuser";
    /// `CREATE ROLE ... IN ROLE a, b`: the roles the new role joins.
    pub const ADD_ROLE_TO: &'static str = "addroleto";
    pub const CAN_LOGIN: &'static str = "canlogin";
}

/// Role names with special meaning in role references.
pub struct SystemRoles;

impl SystemRoles {
    /// Pseudo-role meaning "every role"; never resolvable to an id.
    pub const PUBLIC: &'static str = "public";
    pub const CURRENT_ROLE: &'static str = "current_role";
    pub const CURRENT_USER: &'static str = "current_user";
    pub const SESSION_USER: &'static str = "session_user";
}
