use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main gatekeeper configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GatekeeperConfig {
    #[serde(default)]
    pub policy: PolicySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Policy settings
///
/// The defaults give the stock rule table: role and file-copy checks only in
/// privileged contexts, COPY PROGRAM always denied, extensions untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicySettings {
    /// Master switch; when false every statement is forwarded without inspection
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Block superuser grants and COPY to/from files regardless of context
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Also guard ALTER ROLE on a role that already is a superuser
    #[serde(default = "default_protect_superuser_roles")]
    pub protect_superuser_roles: bool,
    /// Extensions that may never be created
    #[serde(default = "default_denied_extensions")]
    pub denied_extensions: Vec<String>,
    /// Only these roles may be created or altered with SUPERUSER; unset means no restriction
    #[serde(default = "default_reserved_superuser_roles")]
    pub reserved_superuser_roles: Option<Vec<String>>,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            strict: default_strict(),
            protect_superuser_roles: default_protect_superuser_roles(),
            denied_extensions: default_denied_extensions(),
            reserved_superuser_roles: default_reserved_superuser_roles(),
        }
    }
}

impl PolicySettings {
    /// Whether `CREATE EXTENSION <name>` is blocked
    pub fn is_extension_denied(&self, name: &str) -> bool {
        self.denied_extensions.iter().any(|denied| denied == name)
    }

    /// Whether `role` may be given SUPERUSER
    pub fn is_superuser_role_permitted(&self, role: &str) -> bool {
        self.reserved_superuser_roles
            .as_ref()
            .map_or(true, |permitted| permitted.iter().any(|name| name == role))
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file_path")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Per-target level overrides, e.g. `"gatekeeper::policy" = "debug"`
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_file_path(),
            log_to_console: default_true(),
            format: default_log_format(),
            targets: HashMap::new(),
        }
    }
}
