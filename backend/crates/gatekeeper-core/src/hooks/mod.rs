//! Utility-hook chain
//!
//! The host exposes one hook slot for administrative statements. Whoever
//! installs a hook records the previous occupant and forwards to it, which
//! turns the slot into a chain: newest hook first, standard dispatcher last.

mod gatekeeper;
mod slot;

pub use gatekeeper::Gatekeeper;
pub use slot::HookSlot;

use crate::error::Result;
use gatekeeper_session::{HostSession, RoleCatalog};
use gatekeeper_sql::AdministrativeStatement;
use std::sync::Arc;

/// Everything a hook sees for one statement invocation.
#[derive(Clone, Copy)]
pub struct UtilityCall<'a> {
    pub statement: &'a AdministrativeStatement,
    pub session: &'a dyn HostSession,
    pub catalog: &'a dyn RoleCatalog,
}

impl<'a> UtilityCall<'a> {
    pub fn new(
        statement: &'a AdministrativeStatement,
        session: &'a dyn HostSession,
        catalog: &'a dyn RoleCatalog,
    ) -> Self {
        Self {
            statement,
            session,
            catalog,
        }
    }
}

/// The host's built-in statement executor, the end of every chain.
pub trait StandardUtility {
    fn execute(&self, call: &UtilityCall<'_>) -> Result<()>;
}

/// A link in the utility-hook chain.
///
/// Implementations either reject the call or pass it on, to the hook they
/// displaced if there was one, otherwise to `standard`.
pub trait UtilityHook: Send + Sync {
    fn process_utility(&self, call: &UtilityCall<'_>, standard: &dyn StandardUtility) -> Result<()>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "utility_hook"
    }
}

pub type UtilityHookRef = Arc<dyn UtilityHook>;

/// Identity comparison for hook references (data pointer only).
pub(crate) fn same_hook(a: &UtilityHookRef, b: &UtilityHookRef) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
