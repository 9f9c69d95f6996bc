//! COPY statement

use serde::{Deserialize, Serialize};

/// Where a COPY reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyTarget {
    /// `STDIN` / `STDOUT`: data flows over the client connection.
    Stdio,
    /// A file path on the server host.
    File(String),
    /// A shell command run on the server host (`PROGRAM 'cmd'`).
    Program(String),
}

/// COPY command
///
/// ```sql
/// COPY table_name [ ( column_name [, ...] ) ] FROM { 'filename' | PROGRAM 'command' | STDIN }
/// COPY { table_name [ ( column_name [, ...] ) ] | ( query ) } TO { 'filename' | PROGRAM 'command' | STDOUT }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyStatement {
    /// Target relation, `None` for `COPY (query) TO ...`
    pub relation: Option<String>,
    pub is_from: bool,
    pub target: CopyTarget,
}

impl CopyStatement {
    pub fn copy_from(relation: impl Into<String>, target: CopyTarget) -> Self {
        Self {
            relation: Some(relation.into()),
            is_from: true,
            target,
        }
    }

    pub fn copy_to(relation: impl Into<String>, target: CopyTarget) -> Self {
        Self {
            relation: Some(relation.into()),
            is_from: false,
            target,
        }
    }

    /// `COPY (query) TO ...`
    pub fn query_to(target: CopyTarget) -> Self {
        Self {
            relation: None,
            is_from: false,
            target,
        }
    }

    #[inline]
    pub fn is_program(&self) -> bool {
        matches!(self.target, CopyTarget::Program(_))
    }

    /// Server-side file path, if the COPY targets a file.
    pub fn filename(&self) -> Option<&str> {
        match &self.target {
            CopyTarget::File(path) => Some(path),
            _ => None,
        }
    }
}
