//! # gatekeeper-commons
//!
//! Shared types and constants used across the gatekeeper crates
//! (gatekeeper-session, gatekeeper-sql, gatekeeper-core). Apart from the
//! optional `serde` derives it has no external dependencies, so every other
//! crate can depend on it without cycles.
//!
//! ## Type-Safe Wrappers
//!
//! - `RoleId`: host object id of a role
//! - `RoleName`: validated role name as written in a statement
//! - `RoleSpec`: a role reference (`alice`, `CURRENT_USER`, `SESSION_USER`, `PUBLIC`, ...)
//!
//! ## Example Usage
//!
//! ```rust
//! use gatekeeper_commons::{RoleId, RoleName, RoleSpec};
//!
//! let role = RoleName::new("app_owner");
//! let spec = RoleSpec::Name(role.clone());
//! assert_eq!(spec.to_string(), "app_owner");
//! assert!(RoleId::new(10).is_valid());
//! ```

pub mod constants;
pub mod models;

pub use constants::{OptionNames, SystemRoles};
pub use models::{RoleId, RoleName, RoleNameValidationError, RoleSpec};
