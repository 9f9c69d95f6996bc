use thiserror::Error;

/// Errors raised to the host when a statement must not proceed.
///
/// The `Display` output is the user-facing message the host reports; no
/// prefix is added so the wording matches the denial reason exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// Denied by the rule table in the current context
    #[error("{0}")]
    PolicyViolation(String),

    /// Denied in every context
    #[error("{0}")]
    UnconditionalDeny(String),

    /// A role reference in the statement does not exist
    #[error("{0}")]
    UndefinedRole(String),

    /// Raised by a downstream hook or the standard dispatcher
    #[error("Execution error: {0}")]
    Execution(String),
}

impl GatekeeperError {
    /// True when the error came from a policy decision rather than execution
    pub fn is_denial(&self) -> bool {
        !matches!(self, GatekeeperError::Execution(_))
    }
}

/// Result type for hook dispatch
pub type Result<T> = std::result::Result<T, GatekeeperError>;
