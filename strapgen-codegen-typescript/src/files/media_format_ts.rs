//! MediaFormat.ts generator.

use std::path::{Path, PathBuf};

use strapgen_core::GeneratedFile;

use crate::{ast::Interface, code_file::CodeFile};

/// Name of the interface describing one resized variant of an upload.
pub const MEDIA_FORMAT_TYPE: &str = "MediaFormat";

/// One resized rendition of an uploaded image.
pub struct MediaFormatTs;

impl GeneratedFile for MediaFormatTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.ts", MEDIA_FORMAT_TYPE))
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(
                Interface::new(MEDIA_FORMAT_TYPE)
                    .field("name", "string")
                    .field("hash", "string")
                    .field("ext", "string")
                    .field("mime", "string")
                    .field("width", "number")
                    .field("height", "number")
                    .field("size", "number")
                    .field("path", "string")
                    .field("url", "string"),
            )
            .render()
    }
}
