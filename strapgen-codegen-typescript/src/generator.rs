//! TypeScript interface generator for a Strapi project.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use eyre::Result;
use strapgen_codegen::{
    Diagnostic, GeneratorConfig,
    language::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult, WrittenFile},
};
use strapgen_core::GeneratedFile;
use strapgen_schema::{ProjectLayout, SchemaSource};
use tracing::{debug, warn};

use crate::{
    files::{MediaFormatTs, MediaTs, PayloadTs, SchemaTs, UserTs},
    paths::output_path,
};

/// Generates one interface per content type and component, plus the fixed
/// `Payload`, `User`, `Media` and `MediaFormat` declarations.
///
/// Missing input directories, unreadable schema files and schemas whose
/// output path is already taken are reported as diagnostics; every other
/// file is still generated.
pub struct Generator {
    config: GeneratorConfig,
}

impl LanguageCodegen for Generator {
    fn preview(&self) -> PreviewResult {
        let (files, diagnostics) = self.collect_files();
        let base = Path::new("");

        PreviewResult {
            files: files
                .iter()
                .map(|file| PreviewFile {
                    path: file.path(base).to_string_lossy().replace('\\', "/"),
                    content: file.render(),
                })
                .collect(),
            diagnostics,
        }
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (files, diagnostics) = self.collect_files();

        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            let status = file.write(output_dir)?;
            let path = file.path(Path::new(""));
            debug!(path = %path.display(), ?status, "wrote file");
            written.push(WrittenFile { path, status });
        }

        Ok(GenerateResult {
            written,
            diagnostics,
        })
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Render every output file in memory, in write order.
    fn collect_files(&self) -> (Vec<Box<dyn GeneratedFile>>, Vec<Diagnostic>) {
        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(PayloadTs),
            Box::new(UserTs),
            Box::new(MediaFormatTs),
            Box::new(MediaTs),
        ];
        let mut diagnostics = Vec::new();

        // Output path -> schema file that produced it, `None` for fixed files.
        let mut claimed: HashMap<PathBuf, Option<PathBuf>> = files
            .iter()
            .map(|file| (file.path(Path::new("")), None))
            .collect();

        let layout = ProjectLayout::new(self.config.root());
        for discovered in [layout.entities(), layout.components()] {
            match discovered {
                Ok(sources) => {
                    for source in &sources {
                        let output = output_path(source.origin, &source.type_name);
                        if let Some(owner) = claimed.get(&output) {
                            diagnostics.push(self.collision(source, &output, owner.as_deref()));
                            continue;
                        }
                        claimed.insert(output, Some(source.path.clone()));

                        match self.render_source(source) {
                            Ok(file) => files.push(Box::new(file)),
                            Err(diagnostic) => diagnostics.push(diagnostic),
                        }
                    }
                }
                Err(err) => {
                    warn!("{}", err);
                    diagnostics.push(Diagnostic::warning(format!("{}, skipping", err)));
                }
            }
        }

        (files, diagnostics)
    }

    fn collision(&self, source: &SchemaSource, output: &Path, owner: Option<&Path>) -> Diagnostic {
        let output = output.to_string_lossy().replace('\\', "/");
        let message = match owner {
            Some(owner) => format!(
                "skipped {}: {} is already generated from {}",
                source.type_name,
                output,
                self.display_path(owner)
            ),
            None => format!(
                "skipped {}: {} is reserved for a built-in declaration",
                source.type_name, output
            ),
        };
        warn!(path = %source.path.display(), "{}", message);
        Diagnostic::error(message).at(&source.path)
    }

    /// Schema path relative to the project root.
    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.config.root())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    fn render_source(&self, source: &SchemaSource) -> std::result::Result<SchemaTs, Diagnostic> {
        debug!(
            path = %source.path.display(),
            type_name = %source.type_name,
            "generating interface"
        );

        SchemaTs::from_source(source).map_err(|err| {
            warn!(path = %source.path.display(), "skipping schema: {}", err);
            let message = format!("skipped {}: {}", source.type_name, err);
            let report = miette::Report::new(*err);
            Diagnostic::error(message)
                .at(&source.path)
                .with_detail(format!("{:?}", report))
        })
    }
}
