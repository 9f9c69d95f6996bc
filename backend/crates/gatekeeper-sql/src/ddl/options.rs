//! Generic option elements (`name [= value]`) attached to role statements.

use super::DdlResult;
use gatekeeper_commons::RoleSpec;
use serde::{Deserialize, Serialize};

/// Value of an option element. `None` means the option was given without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    None,
    Boolean(bool),
    Integer(i64),
    String(String),
    RoleList(Vec<RoleSpec>),
}

/// One option element of a role statement, e.g. `superuser = true` or
/// `addroleto = [admins, ops]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub name: String,
    pub value: OptionValue,
}

impl RoleOption {
    pub fn new(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, OptionValue::Boolean(value))
    }

    pub fn role_list(name: impl Into<String>, roles: Vec<RoleSpec>) -> Self {
        Self::new(name, OptionValue::RoleList(roles))
    }

    /// Case-sensitive name match; the parser lower-cases option names.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Interpret the value as a boolean the way the host does for definition options.
    ///
    /// - no value: true
    /// - integers: 0 and 1 only
    /// - strings: `true`, `false`, `on`, `off` (case-insensitive)
    pub fn as_bool(&self) -> DdlResult<bool> {
        let parsed = match &self.value {
            OptionValue::None => Some(true),
            OptionValue::Boolean(value) => Some(*value),
            OptionValue::Integer(0) => Some(false),
            OptionValue::Integer(1) => Some(true),
            OptionValue::Integer(_) => None,
            OptionValue::String(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "on" => Some(true),
                "false" | "off" => Some(false),
                _ => None,
            },
            OptionValue::RoleList(_) => None,
        };
        parsed.ok_or_else(|| format!("{} requires a Boolean value", self.name))
    }

    /// The role list carried by membership options (`addroleto`, `rolemembers`, ...).
    pub fn as_role_list(&self) -> Option<&[RoleSpec]> {
        match &self.value {
            OptionValue::RoleList(roles) => Some(roles),
            _ => None,
        }
    }
}
