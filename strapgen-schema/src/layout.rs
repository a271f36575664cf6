//! Discovery of schema files inside a Strapi project.
//!
//! Content types live at `src/api/<api>/content-types/<name>/schema.json`,
//! components at `src/components/<category>/<name>.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use strapgen_core::to_pascal_case;

use crate::{Error, Result, Schema};

/// Which tree a schema file was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaOrigin {
    /// Top-level addressable content type
    Entity,
    /// Reusable component
    Component,
}

impl SchemaOrigin {
    /// Whether schemas of this origin describe a reusable substructure.
    pub fn is_structural(&self) -> bool {
        matches!(self, SchemaOrigin::Component)
    }
}

/// A discovered schema file and the type name it generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    pub path: PathBuf,
    pub origin: SchemaOrigin,
    pub type_name: String,
}

impl SchemaSource {
    /// Read and parse the schema file.
    pub fn load(&self) -> Result<Schema> {
        Schema::from_file(&self.path)
    }
}

/// Directory layout of a Strapi project rooted at `root`.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `src/api` under the project root.
    pub fn api_dir(&self) -> PathBuf {
        self.root.join("src").join("api")
    }

    /// `src/components` under the project root.
    pub fn components_dir(&self) -> PathBuf {
        self.root.join("src").join("components")
    }

    /// Find every content-type schema, sorted by path.
    ///
    /// Fails with [`Error::MissingDirectory`] if there is no `src/api` directory.
    pub fn entities(&self) -> Result<Vec<SchemaSource>> {
        let api_dir = self.api_dir();
        if !api_dir.is_dir() {
            return Err(Error::missing_directory("API", api_dir));
        }

        let mut sources = Vec::new();
        for api in visible_entries(&api_dir)? {
            let content_types = api.join("content-types");
            if !content_types.is_dir() {
                continue;
            }
            for content_type in visible_entries(&content_types)? {
                if !content_type.is_dir() {
                    continue;
                }
                sources.push(SchemaSource {
                    path: content_type.join("schema.json"),
                    origin: SchemaOrigin::Entity,
                    type_name: to_pascal_case(&file_name(&content_type)),
                });
            }
        }

        sources.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(sources)
    }

    /// Find every component schema, sorted by path.
    ///
    /// Fails with [`Error::MissingDirectory`] if there is no `src/components` directory.
    pub fn components(&self) -> Result<Vec<SchemaSource>> {
        let components_dir = self.components_dir();
        if !components_dir.is_dir() {
            return Err(Error::missing_directory("component", components_dir));
        }

        let mut sources = Vec::new();
        for category in visible_entries(&components_dir)? {
            if !category.is_dir() {
                continue;
            }
            for file in visible_entries(&category)? {
                let is_json = file.extension().is_some_and(|ext| ext == "json");
                if !is_json || !file.is_file() {
                    continue;
                }
                let stem = file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                sources.push(SchemaSource {
                    type_name: to_pascal_case(&stem),
                    path: file,
                    origin: SchemaOrigin::Component,
                });
            }
        }

        sources.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(sources)
    }
}

/// List directory entries, skipping hidden names such as `.DS_Store`.
fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    Ok(paths)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
