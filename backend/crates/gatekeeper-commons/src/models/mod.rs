//! Type-safe wrappers for role identities and role references.
//!
//! ```rust
//! use gatekeeper_commons::models::{RoleId, RoleName, RoleSpec};
//!
//! let id = RoleId::new(16384);
//! let name = RoleName::new("reporting");
//! let spec = RoleSpec::from(name);
//!
//! assert_eq!(id.as_u32(), 16384);
//! assert_eq!(spec.role_name().map(|n| n.as_str()), Some("reporting"));
//! ```

pub mod ids;

mod role_name;
mod role_spec;

pub use ids::RoleId;
pub use role_name::{RoleName, RoleNameValidationError};
pub use role_spec::RoleSpec;
