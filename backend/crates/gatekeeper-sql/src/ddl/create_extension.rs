//! CREATE EXTENSION statement

use serde::{Deserialize, Serialize};

/// CREATE EXTENSION command
///
/// ```sql
/// CREATE EXTENSION [ IF NOT EXISTS ] extension_name [ WITH ] [ SCHEMA schema_name ] [ VERSION version ] [ CASCADE ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExtensionStatement {
    pub name: String,
    pub if_not_exists: bool,
    pub schema: Option<String>,
    pub cascade: bool,
}

impl CreateExtensionStatement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_not_exists: false,
            schema: None,
            cascade: false,
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}
