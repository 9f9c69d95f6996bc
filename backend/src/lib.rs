//! Gatekeeper module
//!
//! Entry points the host calls when it loads and unloads the module:
//! [`lifecycle::activate`] installs the gatekeeper into the host's
//! utility-hook slot, [`lifecycle::deactivate`] puts the previous hook back.
//! [`logging`] wires the `log` records emitted by the policy crates into a
//! tracing subscriber.

pub mod lifecycle;
pub mod logging;

pub use gatekeeper_configs::GatekeeperConfig;
pub use gatekeeper_core::{GatekeeperError, HookSlot, UtilityCall, UtilityHook};
pub use lifecycle::{activate, deactivate, service, GatekeeperService};
