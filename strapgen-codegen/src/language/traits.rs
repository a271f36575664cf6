//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use strapgen_core::WriteResult;
use strapgen_schema::Attribute;

use crate::Diagnostic;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating types in a new language.
pub trait LanguageCodegen {
    /// Render all files in memory without writing to disk
    fn preview(&self) -> PreviewResult;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in generation order
    pub written: Vec<WrittenFile>,
    /// Schemas or directories that were skipped
    pub diagnostics: Vec<Diagnostic>,
}

/// A file written to disk
#[derive(Debug, Clone)]
pub struct WrittenFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// Whether the file was created or replaced
    pub status: WriteResult,
}

/// Result of an in-memory generation run
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be written
    pub files: Vec<PreviewFile>,
    /// Schemas or directories that were skipped
    pub diagnostics: Vec<Diagnostic>,
}

impl PreviewResult {
    /// Find a previewed file by its relative path.
    pub fn file(&self, path: &str) -> Option<&PreviewFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// A type expression produced for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// The type expression (e.g. `{ data: Tag[] } | number[]`)
    pub ty: String,
    /// Imports the expression depends on
    pub imports: Vec<ImportRequirement>,
}

/// A symbol that must be imported from a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequirement {
    pub symbol: String,
    /// Local name when the symbol clashes with a name already in scope
    pub alias: Option<String>,
    pub module: String,
}

/// Trait for mapping schema attributes to language-specific type expressions.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map an attribute to a type expression.
    ///
    /// Returns `None` for attributes that must not appear in generated output.
    fn map_attribute(&self, attribute: &Attribute) -> Option<MappedType>;
}
