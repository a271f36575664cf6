//! TypeScript interface generator for Strapi schemas.
//!
//! Turns the content-type and component JSON schemas of a Strapi project
//! into one TypeScript interface per file.
//!
//! # Usage
//!
//! This crate is used internally by the `strapgen` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use strapgen_codegen::GeneratorConfig;
//! use strapgen_codegen_typescript::{Generator, LanguageCodegen};
//!
//! let config = GeneratorConfig::new("./backend");
//! let generator = Generator::new(config.clone());
//!
//! // Render files without writing
//! let preview = generator.preview();
//!
//! // Write files to disk
//! let result = generator.generate(config.output_dir())?;
//! ```
//!
//! # Generated Output
//!
//! - `Payload.ts`, `User.ts`, `Media.ts`, `MediaFormat.ts` - fixed declarations
//! - `<Name>.ts` - one per content type under `src/api`
//! - `components/<Name>.ts` - one per component under `src/components`

mod code_file;
mod emitter;
mod generator;
mod naming;
mod paths;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use emitter::InterfaceEmitter;
pub use generator::Generator;
pub use paths::{COMPONENTS_DIR, import_path, output_path};
pub use strapgen_codegen::language::{
    GenerateResult, LanguageCodegen, PreviewFile, PreviewResult, WrittenFile,
};
pub use type_mapper::{MEDIA_TYPE, TypeScriptTypeMapper};
