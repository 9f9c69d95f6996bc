//! # gatekeeper-session
//!
//! Execution-context facts and host-engine abstractions used by the policy
//! engine.
//!
//! This crate provides:
//! - [`ExecutionContext`]: per-invocation snapshot of who is executing and in
//!   which host mode (extension install, security-restricted operation)
//! - [`HostSession`]: the host side that the snapshot is captured from
//! - [`RoleCatalog`]: superuser lookup and role-name resolution
//! - [`is_elevated`] / [`is_security_restricted`]: the context predicates
//!
//! ## Architecture
//!
//! ```text
//! Host pipeline → HostSession ──capture──▶ ExecutionContext ──▶ policy rules
//!                 RoleCatalog ◀──────────── is_elevated / role resolution
//! ```
//!
//! Nothing in here caches host state: a context is captured for each
//! statement and dropped with it.

pub mod catalog;
pub mod elevation;
pub mod error;
pub mod execution_context;

pub use catalog::{resolve_role_name, resolve_role_spec, RoleCatalog};
pub use elevation::{is_elevated, is_security_restricted};
pub use error::{SessionError, SessionResult};
pub use execution_context::{ExecutionContext, HostSession};
