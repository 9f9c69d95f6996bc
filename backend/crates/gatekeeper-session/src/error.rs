use thiserror::Error;

/// Errors raised while resolving session facts against the host catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A role reference named a role the host does not know about.
    #[error("role \"{0}\" does not exist")]
    UndefinedRole(String),
}

/// Result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;
