//! Execution Context
//!
//! `ExecutionContext` is the set of facts the policy engine needs about the
//! caller at the moment a statement arrives. It is captured from the host via
//! [`HostSession`] once per statement and never stored.

use gatekeeper_commons::RoleId;

/// Host-side accessors for the session state of the backend running a statement.
///
/// Implementations read live host state; every call may return a different
/// answer as the host enters and leaves privileged contexts.
pub trait HostSession {
    /// Identity whose privileges are currently in effect (changes inside
    /// security-definer functions and extension scripts).
    fn current_role(&self) -> RoleId;

    /// Identity that authenticated and opened the session.
    fn session_role(&self) -> RoleId;

    /// Whether the session identity held superuser rights when the session
    /// authorization was established.
    fn session_is_superuser(&self) -> bool;

    /// True while `CREATE EXTENSION` / `ALTER EXTENSION UPDATE` scripts run.
    fn creating_extension(&self) -> bool;

    /// True inside a security-restricted operation (VACUUM, ANALYZE,
    /// materialized view refresh, index builds, ...).
    fn in_security_restricted_operation(&self) -> bool;
}

/// Snapshot of the host session taken when a statement is intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionContext {
    pub effective_role: RoleId,
    pub session_role: RoleId,
    pub session_is_superuser: bool,
    pub creating_extension: bool,
    pub security_restricted: bool,
}

impl ExecutionContext {
    /// Context for a plain session where the effective and session identity match.
    pub fn new(role: RoleId, is_superuser: bool) -> Self {
        Self {
            effective_role: role,
            session_role: role,
            session_is_superuser: is_superuser,
            creating_extension: false,
            security_restricted: false,
        }
    }

    /// Read the current facts from the host.
    pub fn capture(host: &dyn HostSession) -> Self {
        Self {
            effective_role: host.current_role(),
            session_role: host.session_role(),
            session_is_superuser: host.session_is_superuser(),
            creating_extension: host.creating_extension(),
            security_restricted: host.in_security_restricted_operation(),
        }
    }

    /// Switch the effective identity, as a security-definer call would.
    pub fn with_effective_role(mut self, role: RoleId) -> Self {
        self.effective_role = role;
        self
    }

    pub fn with_creating_extension(mut self, creating_extension: bool) -> Self {
        self.creating_extension = creating_extension;
        self
    }

    pub fn with_security_restricted(mut self, security_restricted: bool) -> Self {
        self.security_restricted = security_restricted;
        self
    }

    /// True when the effective identity differs from the session identity.
    #[inline]
    pub fn is_switched(&self) -> bool {
        self.effective_role != self.session_role
    }
}
