//! Type-safe wrapper for role object ids.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Object id of a role as assigned by the host catalog.
///
/// Two contexts refer to the same principal exactly when their ids are
/// equal; names are resolved to ids before any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleId(u32);

impl RoleId {
    /// The id the host uses for "no role". Never assigned to a real role.
    pub const INVALID: RoleId = RoleId(0);

    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
