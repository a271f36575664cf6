//! Generator configuration.

use std::path::{Path, PathBuf};

/// Default directory generated files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "types";

/// Resolved input and output locations for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the Strapi project (contains `src/api` and `src/components`)
    pub root: PathBuf,
    /// Directory receiving the generated files
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Read schemas from `root` and write to the default output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
