//! Administrative statement model
//!
//! The host engine parses SQL; this crate describes the parts of the parsed
//! tree that the gatekeeper inspects. Statements the gatekeeper has no rule
//! for are carried as [`AdministrativeStatementKind::Other`] with their tag
//! so they can still be logged.
//!
//! # Example
//!
//! ```
//! use gatekeeper_sql::{AdministrativeStatement, AdministrativeStatementKind};
//! use gatekeeper_sql::ddl::{CreateRoleStatement, RoleOption};
//!
//! let create = CreateRoleStatement::new("eve").with_option(RoleOption::boolean("superuser", true));
//! let stmt = AdministrativeStatement::new(
//!     "CREATE ROLE eve SUPERUSER",
//!     AdministrativeStatementKind::CreateRole(create),
//! );
//! assert_eq!(stmt.name(), "CREATE ROLE");
//! ```

pub mod ddl;
pub mod statement;

pub use statement::{AdministrativeStatement, AdministrativeStatementKind};
