//! Interface emission for a single schema.

use strapgen_codegen::{ImportCollector, TypeMapper};
use strapgen_schema::{Schema, SchemaOrigin, SchemaSource};

use crate::{
    ast::{Import, Interface, InterfaceField, TsType},
    code_file::CodeFile,
    naming::property_name,
    type_mapper::TypeScriptTypeMapper,
};

/// Renders one schema as a TypeScript interface document.
///
/// Entity interfaces nest their attributes under `attributes`, component
/// interfaces list them next to `id`. Imports are deduplicated by module and
/// keep the order of first use.
#[derive(Debug, Clone)]
pub struct InterfaceEmitter<'a> {
    type_name: &'a str,
    origin: SchemaOrigin,
}

impl<'a> InterfaceEmitter<'a> {
    pub fn new(type_name: &'a str, origin: SchemaOrigin) -> Self {
        Self { type_name, origin }
    }

    /// Emitter for a discovered schema file.
    pub fn for_source(source: &'a SchemaSource) -> Self {
        Self::new(&source.type_name, source.origin)
    }

    /// Render the document for an already parsed schema.
    pub fn emit(&self, schema: &Schema) -> String {
        let mapper = TypeScriptTypeMapper::new(self.origin).declaring(self.type_name);
        let mut imports = ImportCollector::new();
        let mut fields = Vec::with_capacity(schema.attributes.len() + 2);

        for (name, attribute) in &schema.attributes {
            let Some(mapped) = mapper.map_attribute(attribute) else {
                continue;
            };
            for import in &mapped.imports {
                match &import.alias {
                    Some(alias) => {
                        imports.add(&import.module, &format!("{} as {}", import.symbol, alias))
                    }
                    None => imports.add(&import.module, &import.symbol),
                }
            }
            fields.push(
                InterfaceField::new(property_name(name), mapped.ty)
                    .optional_if(attribute.is_optional()),
            );
        }

        if schema.is_localized() {
            fields.push(InterfaceField::new("locale", "string"));
            fields.push(InterfaceField::new(
                "localizations",
                TsType::data(TsType::array(TsType::named(self.type_name))),
            ));
        }

        let interface = Interface::new(self.type_name).field("id", "number");
        let interface = if self.origin.is_structural() {
            interface.fields(fields)
        } else {
            interface.object_field("attributes", fields)
        };

        CodeFile::new()
            .imports(Import::from_collector(&imports))
            .add(interface)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(json: &str, type_name: &str, origin: SchemaOrigin) -> String {
        let schema: Schema = json.parse().unwrap();
        InterfaceEmitter::new(type_name, origin).emit(&schema)
    }

    #[test]
    fn test_entity_with_media() {
        let output = emit(
            r#"{
                "kind": "collectionType",
                "attributes": {
                    "title": { "type": "string", "required": true },
                    "cover": { "type": "media", "multiple": false }
                }
            }"#,
            "Article",
            SchemaOrigin::Entity,
        );

        insta::assert_snapshot!(output, @r#"
        import { Media } from "./Media";

        export interface Article {
          id: number;
          attributes: {
            title: string;
            cover?: { data: Media };
          };
        }
        "#);
    }

    #[test]
    fn test_component_is_flat() {
        let output = emit(
            r#"{
                "attributes": {
                    "metaTitle": { "type": "string", "required": true },
                    "metaImage": { "type": "media" }
                }
            }"#,
            "Seo",
            SchemaOrigin::Component,
        );

        insta::assert_snapshot!(output, @r#"
        import { Media } from "../Media";

        export interface Seo {
          id: number;
          metaTitle: string;
          metaImage?: { data: Media };
        }
        "#);
    }

    #[test]
    fn test_password_and_optional_rules() {
        let output = emit(
            r#"{
                "kind": "collectionType",
                "attributes": {
                    "secret": { "type": "password" },
                    "tags": { "type": "relation", "relation": "manyToMany", "target": "api::tag.tag" },
                    "links": { "type": "component", "component": "shared.link", "repeatable": true },
                    "views": { "type": "integer" }
                }
            }"#,
            "Post",
            SchemaOrigin::Entity,
        );

        assert!(!output.contains("secret"));
        assert!(output.contains("    tags: { data: Tag[] } | number[];\n"));
        assert!(output.contains("    links: { data: Link[] } | number[];\n"));
        assert!(output.contains("    views?: number;\n"));
    }

    #[test]
    fn test_imports_are_deduplicated_in_first_use_order() {
        let output = emit(
            r#"{
                "kind": "collectionType",
                "attributes": {
                    "seo": { "type": "component", "component": "shared.seo" },
                    "cover": { "type": "media" },
                    "gallery": { "type": "media", "multiple": true },
                    "author": { "type": "relation", "relation": "manyToOne", "target": "api::author.author" }
                }
            }"#,
            "Page",
            SchemaOrigin::Entity,
        );

        assert!(output.starts_with(
            "import { Seo } from \"./components/Seo\";\nimport { Media } from \"./Media\";\nimport { Author } from \"./Author\";\n\n"
        ));
        assert_eq!(output.matches("import { Media }").count(), 1);
    }

    #[test]
    fn test_self_relation_is_not_imported() {
        let output = emit(
            r#"{
                "kind": "collectionType",
                "attributes": {
                    "parent": { "type": "relation", "relation": "manyToOne", "target": "api::category.category" }
                }
            }"#,
            "Category",
            SchemaOrigin::Entity,
        );

        assert!(!output.contains("import"));
        assert!(output.contains("parent?: { data: Category } | number;"));
    }

    #[test]
    fn test_component_relating_to_entity_of_the_same_name() {
        let output = emit(
            r#"{ "attributes": { "author": { "type": "relation", "relation": "oneToOne", "target": "api::author.author" } } }"#,
            "Author",
            SchemaOrigin::Component,
        );

        insta::assert_snapshot!(output, @r#"
        import { Author as AuthorEntity } from "../Author";

        export interface Author {
          id: number;
          author?: { data: AuthorEntity } | number;
        }
        "#);
    }

    #[test]
    fn test_entity_embedding_component_of_the_same_name() {
        let output = emit(
            r#"{
                "kind": "collectionType",
                "attributes": {
                    "seo": { "type": "component", "component": "shared.seo", "repeatable": false },
                    "blocks": { "type": "dynamiczone", "components": ["shared.seo"] }
                }
            }"#,
            "Seo",
            SchemaOrigin::Entity,
        );

        insta::assert_snapshot!(output, @r#"
        import { Seo as SeoComponent } from "./components/Seo";

        export interface Seo {
          id: number;
          attributes: {
            seo?: { data: SeoComponent } | number;
            blocks: ({ __component: "shared.seo" } & SeoComponent)[];
          };
        }
        "#);
    }

    #[test]
    fn test_localized_entity() {
        let output = emit(
            r#"{
                "kind": "singleType",
                "pluginOptions": { "i18n": { "localized": true } },
                "attributes": {
                    "headline": { "type": "text" }
                }
            }"#,
            "Homepage",
            SchemaOrigin::Entity,
        );

        insta::assert_snapshot!(output, @r"
        export interface Homepage {
          id: number;
          attributes: {
            headline?: string;
            locale: string;
            localizations: { data: Homepage[] };
          };
        }
        ");
    }

    #[test]
    fn test_quoted_property_names() {
        let output = emit(
            r#"{ "attributes": { "meta-title": { "type": "string" } } }"#,
            "Meta",
            SchemaOrigin::Component,
        );
        assert!(output.contains("  \"meta-title\"?: string;\n"));
    }
}
