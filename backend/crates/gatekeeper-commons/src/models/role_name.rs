//! Type-safe wrapper for role names.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A role name as written in a statement (already case-folded by the parser).
///
/// Names are not validated on construction since they come from the host
/// parser; use [`RoleName::try_new`] for untrusted input such as config files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleName(String);

/// Error type for RoleName validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNameValidationError(pub String);

impl fmt::Display for RoleNameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RoleNameValidationError {}

impl RoleName {
    /// Creates a new RoleName from a string.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new RoleName, rejecting empty names and names containing NUL bytes.
    pub fn try_new(name: impl Into<String>) -> Result<Self, RoleNameValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RoleNameValidationError("Role name cannot be empty".to_string()));
        }
        if name.contains('\0') {
            return Err(RoleNameValidationError("Role name cannot contain null bytes".to_string()));
        }
        Ok(Self(name))
    }

    /// Returns the role name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner String.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RoleName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
