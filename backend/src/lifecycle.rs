//! Module lifecycle: install into and remove from the host hook slot.
//!
//! Registration state lives in a process-wide [`GatekeeperService`]. Tests
//! build their own service instead of going through the global one so they
//! do not share state.

use anyhow::Result;
use gatekeeper_configs::{GatekeeperConfig, PolicySettings};
use gatekeeper_core::{Gatekeeper, HookSlot, UtilityHookRef};
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::{Arc, OnceLock};

const TARGET: &str = "gatekeeper::lifecycle";

/// What `activate` put in place, kept so `deactivate` can undo it.
struct Installation {
    hook: UtilityHookRef,
    previous: Option<UtilityHookRef>,
}

/// Registration state of the gatekeeper in one hook slot.
#[derive(Default)]
pub struct GatekeeperService {
    installation: Mutex<Option<Installation>>,
}

impl GatekeeperService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a gatekeeper at the head of `slot`, chaining to whatever was there.
    ///
    /// Returns `false` without touching the slot when already active.
    pub fn activate(&self, slot: &HookSlot, settings: PolicySettings) -> bool {
        let mut installation = self.installation.lock();
        if installation.is_some() {
            warn!(target: TARGET, "Gatekeeper already active, ignoring repeated activation");
            return false;
        }

        let (hook, previous) =
            slot.chain(|previous| Arc::new(Gatekeeper::new(settings, previous)) as UtilityHookRef);

        info!(
            target: TARGET,
            "Gatekeeper activated (previous hook: {})",
            previous.as_ref().map_or("none", |p| p.name())
        );
        *installation = Some(Installation { hook, previous });
        true
    }

    /// Put back the hook that was in the slot before [`activate`](Self::activate).
    ///
    /// Returns `false` when not active.
    pub fn deactivate(&self, slot: &HookSlot) -> bool {
        let Some(Installation { hook, previous }) = self.installation.lock().take() else {
            debug!(target: TARGET, "Gatekeeper not active, nothing to deactivate");
            return false;
        };

        if !slot.restore(&hook, previous) {
            warn!(
                target: TARGET,
                "Hook slot head changed since activation; restoring previous hook anyway"
            );
        }
        info!(target: TARGET, "Gatekeeper deactivated");
        true
    }

    pub fn is_active(&self) -> bool {
        self.installation.lock().is_some()
    }
}

static SERVICE: OnceLock<GatekeeperService> = OnceLock::new();

/// The process-wide service used by the module entry points.
pub fn service() -> &'static GatekeeperService {
    SERVICE.get_or_init(GatekeeperService::new)
}

/// Module load entry point.
pub fn activate(slot: &HookSlot, config: &GatekeeperConfig) -> bool {
    service().activate(slot, config.policy.clone())
}

/// Module unload entry point.
pub fn deactivate(slot: &HookSlot) -> bool {
    service().deactivate(slot)
}

/// Load configuration from `path`, activate, then set up logging.
///
/// Activation happens before logging so a host that already owns the global
/// subscriber still gets the policy installed; a logging failure is reported
/// through whatever `log` backend is in place.
pub fn bootstrap(path: impl AsRef<Path>, slot: &HookSlot) -> Result<bool> {
    let config = GatekeeperConfig::from_file(path)?;
    let activated = activate(slot, &config);

    if let Err(e) = crate::logging::init_logging(&config.logging) {
        warn!(target: TARGET, "Logging setup skipped: {}", e);
    }
    debug!(
        target: TARGET,
        "Loaded policy: enabled={} strict={} protect_superuser_roles={} denied_extensions={:?} reserved_superuser_roles={:?}",
        config.policy.enabled,
        config.policy.strict,
        config.policy.protect_superuser_roles,
        config.policy.denied_extensions,
        config.policy.reserved_superuser_roles
    );
    Ok(activated)
}
