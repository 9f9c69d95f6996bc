//! # gatekeeper-core
//!
//! Statement policy engine and the utility-hook chain it is installed into.
//!
//! ## Flow
//!
//! ```text
//! host ──▶ HookSlot::dispatch ──▶ Gatekeeper::process_utility
//!                                     │ capture ExecutionContext
//!                                     │ PolicyEngine::evaluate
//!                                     ├── Deny  ──▶ Err(GatekeeperError), nothing executes
//!                                     └── Allow ──▶ previous hook, else StandardUtility
//! ```
//!
//! The engine never mutates host state; a denial is reported before the
//! statement reaches the next stage.

pub mod error;
pub mod hooks;
pub mod policy;

pub use error::{GatekeeperError, Result};
pub use hooks::{Gatekeeper, HookSlot, StandardUtility, UtilityCall, UtilityHook, UtilityHookRef};
pub use policy::{Denial, DenialKind, DenialMessages, PolicyDecision, PolicyEngine};
