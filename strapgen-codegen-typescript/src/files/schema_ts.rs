//! Generated interface document for one schema file.

use std::path::{Path, PathBuf};

use strapgen_core::GeneratedFile;
use strapgen_schema::{SchemaOrigin, SchemaSource};

use crate::{emitter::InterfaceEmitter, paths::output_path};

/// A rendered entity or component interface.
#[derive(Debug, Clone)]
pub struct SchemaTs {
    relative_path: PathBuf,
    content: String,
}

impl SchemaTs {
    pub fn new(origin: SchemaOrigin, type_name: &str, content: impl Into<String>) -> Self {
        Self {
            relative_path: output_path(origin, type_name),
            content: content.into(),
        }
    }

    /// Load and render a discovered schema file.
    pub fn from_source(source: &SchemaSource) -> strapgen_schema::Result<Self> {
        let schema = source.load()?;
        let content = InterfaceEmitter::for_source(source).emit(&schema);
        Ok(Self::new(source.origin, &source.type_name, content))
    }
}

impl GeneratedFile for SchemaTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
