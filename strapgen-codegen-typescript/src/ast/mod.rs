//! TypeScript AST builders for type expressions, interfaces and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod imports;
mod interface;
mod types;

pub use imports::Import;
pub use interface::{FieldType, Interface, InterfaceField};
pub use types::TsType;
