//! Data model for parsed traindown sessions
//!
//! A [`Session`] owns its [`Movement`]s, which own their [`Performance`]s. Each of the three
//! levels carries its own [`Metadata`] and notes. The builder creates every entity empty,
//! fills it while it is the current one and never touches it again once it has been
//! appended to its parent.
//!
//! All types serialize with camelCase keys.

pub mod diagnostics;
pub mod metadata;
pub mod movement;
pub mod performance;
pub mod session;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use metadata::Metadata;
pub use movement::Movement;
pub use performance::Performance;
pub use session::Session;
