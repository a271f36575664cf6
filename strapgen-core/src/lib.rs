//! Core utilities and types for strapgen.
//!
//! This crate provides file output primitives and the naming helpers
//! shared by the schema loader and the code generators.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{USER_UID, last_segment, to_pascal_case, type_name_from_uid};
