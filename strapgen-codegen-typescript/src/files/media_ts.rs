//! Media.ts generator.

use std::path::{Path, PathBuf};

use strapgen_core::GeneratedFile;
use strapgen_schema::SchemaOrigin;

use super::media_format_ts::MEDIA_FORMAT_TYPE;
use crate::{
    ast::{Import, Interface, InterfaceField},
    code_file::CodeFile,
    paths::import_path,
    type_mapper::MEDIA_TYPE,
};

/// A file managed by the upload plugin.
pub struct MediaTs;

impl GeneratedFile for MediaTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.ts", MEDIA_TYPE))
    }

    fn render(&self) -> String {
        let formats = ["thumbnail", "medium", "small"]
            .into_iter()
            .map(|name| InterfaceField::new(name, MEDIA_FORMAT_TYPE))
            .collect();

        let attributes = vec![
            InterfaceField::new("name", "string"),
            InterfaceField::new("alternativeText", "string"),
            InterfaceField::new("caption", "string"),
            InterfaceField::new("width", "number"),
            InterfaceField::new("height", "number"),
            InterfaceField::object("formats", formats),
            InterfaceField::new("hash", "string"),
            InterfaceField::new("ext", "string"),
            InterfaceField::new("mime", "string"),
            InterfaceField::new("size", "number"),
            InterfaceField::new("url", "string"),
            InterfaceField::new("previewUrl", "string"),
            InterfaceField::new("provider", "string"),
            InterfaceField::new("createdAt", "Date"),
            InterfaceField::new("updatedAt", "Date"),
        ];

        let format_module =
            import_path(SchemaOrigin::Entity, SchemaOrigin::Entity, MEDIA_FORMAT_TYPE);

        CodeFile::new()
            .import(Import::new(format_module).named(MEDIA_FORMAT_TYPE))
            .add(
                Interface::new(MEDIA_TYPE)
                    .field("id", "number")
                    .object_field("attributes", attributes),
            )
            .render()
    }
}
