//! gatekeeper-configs
//!
//! Configuration types and loader for the gatekeeper module.

pub mod config;

pub use config::defaults;
pub use config::*;
