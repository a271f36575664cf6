//! User.ts generator.

use std::path::{Path, PathBuf};

use strapgen_core::GeneratedFile;

use crate::{
    ast::{Interface, InterfaceField},
    code_file::CodeFile,
};

/// The users-permissions account, referenced by relations to `plugin::users-permissions.user`.
pub struct UserTs;

impl GeneratedFile for UserTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("User.ts")
    }

    fn render(&self) -> String {
        let attributes = vec![
            InterfaceField::new("username", "string"),
            InterfaceField::new("email", "string"),
            InterfaceField::new("provider", "string"),
            InterfaceField::new("confirmed", "boolean"),
            InterfaceField::new("blocked", "boolean"),
            InterfaceField::new("createdAt", "Date"),
            InterfaceField::new("updatedAt", "Date"),
        ];

        CodeFile::new()
            .add(
                Interface::new("User")
                    .field("id", "number")
                    .object_field("attributes", attributes),
            )
            .render()
    }
}
