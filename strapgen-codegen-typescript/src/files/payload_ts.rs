//! Payload.ts generator.

use std::path::{Path, PathBuf};

use strapgen_core::GeneratedFile;

use crate::{
    ast::{Interface, InterfaceField},
    code_file::CodeFile,
};

/// The generic response envelope returned by the Strapi REST API.
pub struct PayloadTs;

impl GeneratedFile for PayloadTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Payload.ts")
    }

    fn render(&self) -> String {
        let pagination = vec![
            InterfaceField::new("page", "number"),
            InterfaceField::new("pageSize", "number"),
            InterfaceField::new("pageCount", "number"),
            InterfaceField::new("total", "number"),
        ];

        CodeFile::new()
            .add(
                Interface::new("Payload<T>")
                    .field("data", "T")
                    .object_field(
                        "meta",
                        vec![InterfaceField::object("pagination", pagination).optional()],
                    ),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        insta::assert_snapshot!(PayloadTs.render(), @r"
        export interface Payload<T> {
          data: T;
          meta: {
            pagination?: {
              page: number;
              pageSize: number;
              pageCount: number;
              total: number;
            };
          };
        }
        ");
    }
}
