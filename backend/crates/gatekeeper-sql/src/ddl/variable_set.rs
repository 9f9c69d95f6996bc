//! SET / RESET of run-time parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableSetKind {
    /// `SET name TO value`
    Value,
    /// `SET name TO DEFAULT`
    Default,
    /// `RESET name`
    Reset,
    /// `RESET ALL`
    ResetAll,
}

/// SET command
///
/// ```sql
/// SET [ SESSION | LOCAL ] configuration_parameter { TO | = } { value | DEFAULT }
/// SET SESSION AUTHORIZATION user_name
/// RESET configuration_parameter
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariableStatement {
    pub kind: VariableSetKind,
    pub name: String,
    pub values: Vec<String>,
    pub is_local: bool,
}

impl SetVariableStatement {
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: VariableSetKind::Value,
            name: name.into(),
            values: vec![value.into()],
            is_local: false,
        }
    }

    pub fn reset(name: impl Into<String>) -> Self {
        Self {
            kind: VariableSetKind::Reset,
            name: name.into(),
            values: Vec::new(),
            is_local: false,
        }
    }

    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }
}
