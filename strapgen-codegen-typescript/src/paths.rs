//! Output locations and relative import paths.
//!
//! Entity files sit at the output root, component files one level down in
//! `components/`, so every reference resolves to one of four relative forms.

use std::path::PathBuf;

use strapgen_schema::SchemaOrigin;

/// Subdirectory of the output directory holding component files.
pub const COMPONENTS_DIR: &str = "components";

/// Path of a generated file relative to the output directory.
pub fn output_path(origin: SchemaOrigin, type_name: &str) -> PathBuf {
    let file = format!("{}.ts", type_name);
    match origin {
        SchemaOrigin::Entity => PathBuf::from(file),
        SchemaOrigin::Component => PathBuf::from(COMPONENTS_DIR).join(file),
    }
}

/// Module specifier used by a file of origin `from` to import `type_name`
/// declared by a file of origin `to`.
pub fn import_path(from: SchemaOrigin, to: SchemaOrigin, type_name: &str) -> String {
    match (from, to) {
        (SchemaOrigin::Entity, SchemaOrigin::Entity) => format!("./{}", type_name),
        (SchemaOrigin::Entity, SchemaOrigin::Component) => {
            format!("./{}/{}", COMPONENTS_DIR, type_name)
        }
        (SchemaOrigin::Component, SchemaOrigin::Entity) => format!("../{}", type_name),
        (SchemaOrigin::Component, SchemaOrigin::Component) => format!("./{}", type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        assert_eq!(
            output_path(SchemaOrigin::Entity, "Article"),
            PathBuf::from("Article.ts")
        );
        assert_eq!(
            output_path(SchemaOrigin::Component, "Seo"),
            PathBuf::from("components/Seo.ts")
        );
    }

    #[test]
    fn test_import_paths() {
        use SchemaOrigin::{Component, Entity};

        assert_eq!(import_path(Entity, Entity, "Media"), "./Media");
        assert_eq!(import_path(Entity, Component, "Seo"), "./components/Seo");
        assert_eq!(import_path(Component, Entity, "Media"), "../Media");
        assert_eq!(import_path(Component, Component, "Seo"), "./Seo");
    }
}
