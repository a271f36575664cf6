//! Shared code generation utilities for strapgen.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific generators (e.g., `strapgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
mod config;
mod diagnostic;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use config::GeneratorConfig;
pub use diagnostic::{Diagnostic, Severity};
pub use generation::ImportCollector;
pub use language::{LanguageCodegen, MappedType, TypeMapper};
