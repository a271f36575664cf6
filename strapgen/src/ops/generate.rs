//! Generate operation - TypeScript interfaces from a Strapi project.

use eyre::{Context, Result};
use strapgen_codegen::{GeneratorConfig, LanguageCodegen};
use strapgen_codegen_typescript::Generator;
use strapgen_core::WriteResult;
use tracing::debug;

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Skipped schemas and missing directories end up in the report's
/// diagnostics; only a failure to write output is an error.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport> {
    debug!(
        root = %config.root().display(),
        output = %config.output_dir().display(),
        "generating types"
    );

    let generator = Generator::new(config.clone());
    let result = generator
        .generate(config.output_dir())
        .wrap_err("Failed to write generated types")?;

    let (created, overwritten): (Vec<_>, Vec<_>) = result
        .written
        .into_iter()
        .partition(|file| file.status == WriteResult::Created);

    Ok(GenerateReport {
        output_dir: config.output_dir().to_path_buf(),
        created: created.into_iter().map(|file| file.path).collect(),
        overwritten: overwritten.into_iter().map(|file| file.path).collect(),
        diagnostics: result.diagnostics,
    })
}
