//! In-memory host for integration tests.
//!
//! Provides a role catalog, a configurable session, a standard dispatcher
//! that records what it executed, and a pass-through hook standing in for
//! another module loaded before the gatekeeper.

#![allow(dead_code)]

pub mod statements;

use gatekeeper::{GatekeeperError, HookSlot, UtilityCall, UtilityHook};
use gatekeeper_commons::{RoleId, RoleName};
use gatekeeper_core::StandardUtility;
use gatekeeper_session::{HostSession, RoleCatalog};
use gatekeeper_sql::AdministrativeStatement;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const POSTGRES: RoleId = RoleId::new(10);
pub const ADMIN: RoleId = RoleId::new(16384);
pub const ALICE: RoleId = RoleId::new(16385);
pub const BOB: RoleId = RoleId::new(16386);
pub const MONITOR: RoleId = RoleId::new(3373);

/// Role catalog backed by a map of name -> (id, superuser).
pub struct TestCatalog {
    roles: HashMap<String, (RoleId, bool)>,
}

impl TestCatalog {
    pub fn empty() -> Self {
        Self { roles: HashMap::new() }
    }

    pub fn with_role(mut self, name: &str, id: RoleId, superuser: bool) -> Self {
        self.roles.insert(name.to_string(), (id, superuser));
        self
    }
}

impl Default for TestCatalog {
    /// `postgres` and `admin` are superusers; `alice`, `bob` and
    /// `pg_monitor` are not.
    fn default() -> Self {
        Self::empty()
            .with_role("postgres", POSTGRES, true)
            .with_role("admin", ADMIN, true)
            .with_role("alice", ALICE, false)
            .with_role("bob", BOB, false)
            .with_role("pg_monitor", MONITOR, false)
    }
}

impl RoleCatalog for TestCatalog {
    fn role_id(&self, name: &RoleName) -> Option<RoleId> {
        self.roles.get(name.as_str()).map(|(id, _)| *id)
    }

    fn is_superuser(&self, role: RoleId) -> bool {
        self.roles.values().any(|(id, superuser)| *id == role && *superuser)
    }
}

/// Session state as the host would report it.
#[derive(Debug, Clone, Copy)]
pub struct TestSession {
    pub current: RoleId,
    pub session: RoleId,
    pub session_is_superuser: bool,
    pub creating_extension: bool,
    pub restricted: bool,
}

impl TestSession {
    /// Ordinary session for a non-superuser.
    pub fn plain(role: RoleId) -> Self {
        Self {
            current: role,
            session: role,
            session_is_superuser: false,
            creating_extension: false,
            restricted: false,
        }
    }

    /// Session opened by a superuser.
    pub fn superuser(role: RoleId) -> Self {
        Self {
            session_is_superuser: true,
            ..Self::plain(role)
        }
    }

    /// Non-superuser session currently running as `effective`, e.g. inside a
    /// security-definer function owned by a superuser.
    pub fn running_as(self, effective: RoleId) -> Self {
        Self {
            current: effective,
            ..self
        }
    }

    pub fn in_extension(self) -> Self {
        Self {
            creating_extension: true,
            ..self
        }
    }

    pub fn restricted(self) -> Self {
        Self {
            restricted: true,
            ..self
        }
    }
}

impl HostSession for TestSession {
    fn current_role(&self) -> RoleId {
        self.current
    }

    fn session_role(&self) -> RoleId {
        self.session
    }

    fn session_is_superuser(&self) -> bool {
        self.session_is_superuser
    }

    fn creating_extension(&self) -> bool {
        self.creating_extension
    }

    fn in_security_restricted_operation(&self) -> bool {
        self.restricted
    }
}

/// Standard dispatcher that records the statement text it executed.
#[derive(Default)]
pub struct RecordingUtility {
    executed: Mutex<Vec<String>>,
}

impl RecordingUtility {
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.executed.lock().len()
    }
}

impl StandardUtility for RecordingUtility {
    fn execute(&self, call: &UtilityCall<'_>) -> Result<(), GatekeeperError> {
        self.executed.lock().push(call.statement.as_str().to_string());
        Ok(())
    }
}

/// Hook that counts invocations and forwards to the standard dispatcher.
pub struct PassThroughHook {
    name: &'static str,
    calls: AtomicUsize,
}

impl PassThroughHook {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UtilityHook for PassThroughHook {
    fn process_utility(
        &self,
        call: &UtilityCall<'_>,
        standard: &dyn StandardUtility,
    ) -> Result<(), GatekeeperError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        standard.execute(call)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// A host: one hook slot, one catalog, one standard dispatcher.
pub struct TestHost {
    pub slot: HookSlot,
    pub catalog: TestCatalog,
    pub utility: RecordingUtility,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            slot: HookSlot::new(),
            catalog: TestCatalog::default(),
            utility: RecordingUtility::default(),
        }
    }

    pub fn with_slot(slot: HookSlot) -> Self {
        Self {
            slot,
            ..Self::new()
        }
    }

    /// Run a statement through the slot as `session`.
    pub fn run(
        &self,
        session: &TestSession,
        statement: &AdministrativeStatement,
    ) -> Result<(), GatekeeperError> {
        let call = UtilityCall::new(statement, session, &self.catalog);
        self.slot.dispatch(&call, &self.utility)
    }
}
