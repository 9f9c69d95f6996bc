//! Statement policy
//!
//! | Module | Contents |
//! |--------|----------|
//! | `decision` | `PolicyDecision`, `Denial`, denial messages |
//! | `guard` | the single "may this grant superuser" check |
//! | `engine` | rule table over every statement kind |

mod decision;
mod engine;
mod guard;


pub use decision::{Denial, DenialKind, DenialMessages, PolicyDecision};
pub use engine::PolicyEngine;
