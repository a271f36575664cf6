//! Generate command report data structures.

use std::path::PathBuf;

use strapgen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory the files were written to.
    pub output_dir: PathBuf,

    /// Files that did not exist before, relative to the output directory.
    pub created: Vec<PathBuf>,

    /// Files whose previous content was replaced.
    pub overwritten: Vec<PathBuf>,

    /// Skipped schemas and directories.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateReport {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.created.len() + self.overwritten.len()
    }

    fn render_diagnostic(out: &mut dyn Output, diagnostic: &Diagnostic) {
        let message = match &diagnostic.location {
            Some(location) => format!("{} ({})", diagnostic.message, location.display()),
            None => diagnostic.message.clone(),
        };

        if diagnostic.severity.is_error() {
            out.error(&message);
        } else {
            out.warning(&message);
        }

        if let Some(detail) = &diagnostic.detail {
            out.preformatted(detail);
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            Self::render_diagnostic(out, diagnostic);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.key_value(
            "Generated",
            &format!(
                "{} files in {}",
                self.file_count(),
                self.output_dir.display()
            ),
        );

        if !self.created.is_empty() {
            out.newline();
            out.section("New files");
            for path in &self.created {
                out.added_item(&path.display().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered lines for assertions.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("+ {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {}", msg));
        }

        fn error(&mut self, msg: &str) {
            self.lines.push(format!("error: {}", msg));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }

    #[test]
    fn test_render_summary_and_new_files() {
        let report = GenerateReport {
            output_dir: PathBuf::from("types"),
            created: vec![PathBuf::from("Article.ts")],
            overwritten: vec![PathBuf::from("Payload.ts"), PathBuf::from("User.ts")],
            diagnostics: Vec::new(),
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Generated: 3 files in types",
                "",
                "New files:",
                "+ Article.ts",
            ]
        );
    }

    #[test]
    fn test_render_diagnostics_first() {
        let report = GenerateReport {
            output_dir: PathBuf::from("types"),
            created: Vec::new(),
            overwritten: vec![PathBuf::from("Payload.ts")],
            diagnostics: vec![
                Diagnostic::warning("no component directory found").at("src/components"),
                Diagnostic::error("skipped Broken")
                    .at("src/api/broken/content-types/broken/schema.json")
                    .with_detail("  x could not parse schema"),
            ],
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: no component directory found (src/components)",
                "error: skipped Broken (src/api/broken/content-types/broken/schema.json)",
                "  x could not parse schema",
                "",
                "Generated: 1 files in types",
            ]
        );
    }
}
