//! Statement definitions for the administrative commands the gatekeeper inspects.
//!
//! Each struct mirrors the fields the host parser fills in; constructors and
//! `with_*` builders exist so hosts and tests can assemble them directly.

pub mod copy_commands;
pub mod create_extension;
pub mod options;
pub mod role_commands;
pub mod variable_set;

/// Result type used by the statement helpers.
/// String errors carry the message the host would raise for the same input.
pub type DdlResult<T> = Result<T, String>;

pub use copy_commands::{CopyStatement, CopyTarget};
pub use create_extension::CreateExtensionStatement;
pub use options::{OptionValue, RoleOption};
pub use role_commands::{
    AlterRoleSetStatement, AlterRoleStatement, CreateRoleStatement, DropRoleStatement,
    GrantRoleStatement, RoleStatementType,
};
pub use variable_set::{SetVariableStatement, VariableSetKind};
