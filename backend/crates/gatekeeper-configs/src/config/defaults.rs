// Default value functions

pub fn default_true() -> bool {
    true
}

pub fn default_strict() -> bool {
    false // reserved actions are only blocked in privileged contexts
}

pub fn default_protect_superuser_roles() -> bool {
    false
}

pub fn default_denied_extensions() -> Vec<String> {
    Vec::new() // e.g. ["file_fdw"] to keep file access out of extensions
}

pub fn default_reserved_superuser_roles() -> Option<Vec<String>> {
    None // any role may become superuser, subject to the context checks
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_file_path() -> String {
    "./logs/gatekeeper.log".to_string()
}

pub fn default_log_format() -> String {
    "compact".to_string()
}
