use crate::error::GatekeeperError;
use gatekeeper_session::SessionError;
use std::borrow::Cow;
use std::fmt;

/// Static denial messages, one per attempted action class and context.
pub struct DenialMessages;

impl DenialMessages {
    pub const ROLE_SUPERUSER: &'static str = "ROLE modification to SUPERUSER not allowed";
    pub const ROLE_SUPERUSER_IN_EXTENSION: &'static str =
        "ROLE modification to SUPERUSER not allowed in extensions";
    pub const ROLE_SUPERUSER_IN_RESTRICTED: &'static str =
        "ROLE modification to SUPERUSER not allowed in SECURITY_RESTRICTED_OPERATION";
    pub const COPY_PROGRAM: &'static str = "COPY TO/FROM PROGRAM not allowed";
    pub const COPY_FILE: &'static str = "COPY TO/FROM FILE not allowed";
    pub const COPY_FILE_IN_EXTENSION: &'static str = "COPY TO/FROM FILE not allowed in extensions";
    pub const COPY_FILE_IN_RESTRICTED: &'static str =
        "COPY TO/FROM FILE not allowed in SECURITY_RESTRICTED_OPERATION";
}

/// Why a statement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialKind {
    /// Refused because of the current execution context
    PolicyViolation,
    /// Refused in every context
    UnconditionalDeny,
    /// A referenced role could not be resolved
    UndefinedRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub kind: DenialKind,
    pub reason: Cow<'static, str>,
}

impl Denial {
    pub fn violation(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: DenialKind::PolicyViolation,
            reason: reason.into(),
        }
    }

    pub fn unconditional(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: DenialKind::UnconditionalDeny,
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<SessionError> for Denial {
    fn from(err: SessionError) -> Self {
        Self {
            kind: DenialKind::UndefinedRole,
            reason: Cow::Owned(err.to_string()),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl From<Denial> for GatekeeperError {
    fn from(denial: Denial) -> Self {
        let reason = denial.reason.into_owned();
        match denial.kind {
            DenialKind::PolicyViolation => GatekeeperError::PolicyViolation(reason),
            DenialKind::UnconditionalDeny => GatekeeperError::UnconditionalDeny(reason),
            DenialKind::UndefinedRole => GatekeeperError::UndefinedRole(reason),
        }
    }
}

/// Outcome of evaluating one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Deny(Denial),
}

impl PolicyDecision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allow)
    }

    #[inline]
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            PolicyDecision::Allow => None,
            PolicyDecision::Deny(denial) => Some(denial),
        }
    }

    /// `Ok(())` for Allow, so rule code can short-circuit with `?`.
    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            PolicyDecision::Allow => Ok(()),
            PolicyDecision::Deny(denial) => Err(denial),
        }
    }
}

impl From<Result<(), Denial>> for PolicyDecision {
    fn from(result: Result<(), Denial>) -> Self {
        match result {
            Ok(()) => PolicyDecision::Allow,
            Err(denial) => PolicyDecision::Deny(denial),
        }
    }
}
