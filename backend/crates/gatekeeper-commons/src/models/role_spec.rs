//! Role references as they appear in statements.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::SystemRoles;
use crate::models::RoleName;

/// A reference to a role inside a statement.
///
/// `CURRENT_ROLE`/`CURRENT_USER` refer to the effective identity and
/// `SESSION_USER` to the session identity; they only become ids once a
/// session is available. `PUBLIC` never resolves to a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoleSpec {
    Name(RoleName),
    CurrentRole,
    CurrentUser,
    SessionUser,
    Public,
}

impl RoleSpec {
    /// Build a reference from a bare identifier, recognising the special keywords.
    ///
    /// Matching is case-insensitive, mirroring how the host parser treats the
    /// unquoted keywords.
    pub fn from_identifier(ident: &str) -> Self {
        match ident.to_ascii_lowercase().as_str() {
            SystemRoles::CURRENT_ROLE => RoleSpec::CurrentRole,
            SystemRoles::CURRENT_USER => RoleSpec::CurrentUser,
            SystemRoles::SESSION_USER => RoleSpec::SessionUser,
            SystemRoles::PUBLIC => RoleSpec::Public,
            _ => RoleSpec::Name(RoleName::new(ident)),
        }
    }

    /// The explicit role name, if this reference is a plain name.
    pub fn role_name(&self) -> Option<&RoleName> {
        match self {
            RoleSpec::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl From<RoleName> for RoleSpec {
    fn from(name: RoleName) -> Self {
        RoleSpec::Name(name)
    }
}

impl fmt::Display for RoleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleSpec::Name(name) => write!(f, "{}", name),
            RoleSpec::CurrentRole => write!(f, "{}", SystemRoles::CURRENT_ROLE),
            RoleSpec::CurrentUser => write!(f, "{}", SystemRoles::CURRENT_USER),
            RoleSpec::SessionUser => write!(f, "{}", SystemRoles::SESSION_USER),
            RoleSpec::Public => write!(f, "{}", SystemRoles::PUBLIC),
        }
    }
}
