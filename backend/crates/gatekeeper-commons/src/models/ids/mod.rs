//! Identifier newtypes.

mod role_id;

pub use role_id::RoleId;
