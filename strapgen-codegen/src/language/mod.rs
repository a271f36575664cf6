//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Trait for mapping schema attributes to language types
//! - [`GenerateResult`] / [`PreviewResult`] - Results of a generation run

mod traits;

pub use traits::{
    GenerateResult, ImportRequirement, LanguageCodegen, MappedType, PreviewFile, PreviewResult,
    TypeMapper, WrittenFile,
};
