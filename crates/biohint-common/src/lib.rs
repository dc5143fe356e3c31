//! biohint-common — Shared types and errors used across all biohint crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{EntityKind, Hint, HintType, Section, Xref};
pub use error::{HintError, Result};
