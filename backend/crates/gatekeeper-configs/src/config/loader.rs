use super::types::GatekeeperConfig;
use gatekeeper_commons::RoleName;
use std::fs;
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const VALID_LOG_FORMATS: [&str; 2] = ["compact", "json"];

impl GatekeeperConfig {
    /// Load configuration from a TOML file
    ///
    /// Environment overrides are applied on top of the file contents before
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text without env overrides or validation
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }

    /// Apply environment variable overrides
    ///
    /// - `GATEKEEPER_ENABLED`: master switch (`true`/`false`)
    /// - `GATEKEEPER_STRICT`: strict mode (`true`/`false`)
    /// - `GATEKEEPER_RESERVED_SUPERUSER_ROLES`: comma-separated role names
    /// - `GATEKEEPER_LOG_LEVEL`: base log level
    /// - `GATEKEEPER_LOG_FILE_PATH`: log file location
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        if let Ok(value) = env::var("GATEKEEPER_ENABLED") {
            self.policy.enabled = parse_bool_env("GATEKEEPER_ENABLED", &value)?;
        }

        if let Ok(value) = env::var("GATEKEEPER_STRICT") {
            self.policy.strict = parse_bool_env("GATEKEEPER_STRICT", &value)?;
        }

        if let Ok(roles) = env::var("GATEKEEPER_RESERVED_SUPERUSER_ROLES") {
            self.policy.reserved_superuser_roles = Some(parse_role_list(&roles));
        }

        if let Ok(level) = env::var("GATEKEEPER_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(path) = env::var("GATEKEEPER_LOG_FILE_PATH") {
            self.logging.file_path = path;
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                VALID_LOG_FORMATS.join(", ")
            ));
        }

        for (target, level) in &self.logging.targets {
            if !VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}' for target '{}'. Must be one of: {}",
                    level,
                    target,
                    VALID_LOG_LEVELS.join(", ")
                ));
            }
        }

        if self.policy.denied_extensions.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow::anyhow!("denied_extensions cannot contain empty names"));
        }

        if let Some(roles) = &self.policy.reserved_superuser_roles {
            for role in roles {
                RoleName::try_new(role.as_str())
                    .map_err(|e| anyhow::anyhow!("Invalid reserved_superuser_roles entry '{}': {}", role, e))?;
            }
        }

        Ok(())
    }
}

/// `"postgres, admin"` -> `["postgres", "admin"]`; empty items are kept so
/// validation reports them.
fn parse_role_list(value: &str) -> Vec<String> {
    value.split(',').map(|role| role.trim().to_string()).collect()
}

fn parse_bool_env(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(anyhow::anyhow!("Invalid {} value: {}", key, value)),
    }
}
