//! TypeScript type mapper implementation.

use strapgen_codegen::{MappedType, TypeMapper, language::ImportRequirement};
use strapgen_core::{USER_UID, type_name_from_uid};
use strapgen_schema::{Attribute, AttributeKind, SchemaOrigin};

use crate::{ast::TsType, paths::import_path};

/// Name of the fixed upload file interface.
pub const MEDIA_TYPE: &str = "Media";

/// Maps attributes to TypeScript types as seen from a file of a given origin.
///
/// The origin decides the relative import paths attached to the result. When
/// the mapper knows the interface being declared, references back to it are
/// left unimported and other interfaces sharing its name get an alias.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper<'a> {
    origin: SchemaOrigin,
    declaring: Option<&'a str>,
}

impl<'a> TypeScriptTypeMapper<'a> {
    pub fn new(origin: SchemaOrigin) -> Self {
        Self {
            origin,
            declaring: None,
        }
    }

    /// Map types for the file that declares `type_name`.
    pub fn declaring(mut self, type_name: &'a str) -> Self {
        self.declaring = Some(type_name);
        self
    }

    /// The users-permissions user lives next to the entities.
    fn component_origin(uid: &str) -> SchemaOrigin {
        if uid == USER_UID {
            SchemaOrigin::Entity
        } else {
            SchemaOrigin::Component
        }
    }

    /// Local name of a referenced interface, recording the import it needs.
    fn reference(
        &self,
        name: String,
        to: SchemaOrigin,
        imports: &mut Vec<ImportRequirement>,
    ) -> String {
        let module = import_path(self.origin, to, &name);
        if self.declaring != Some(name.as_str()) {
            imports.push(ImportRequirement {
                symbol: name.clone(),
                alias: None,
                module,
            });
            return name;
        }
        if to == self.origin {
            return name;
        }

        let alias = match to {
            SchemaOrigin::Entity => format!("{}Entity", name),
            SchemaOrigin::Component => format!("{}Component", name),
        };
        imports.push(ImportRequirement {
            symbol: name,
            alias: Some(alias.clone()),
            module,
        });
        alias
    }

    fn map_kind(
        &self,
        kind: &AttributeKind,
        imports: &mut Vec<ImportRequirement>,
    ) -> Option<TsType> {
        let ty = match kind {
            AttributeKind::Relation {
                cardinality,
                target,
            } => {
                let name =
                    self.reference(type_name_from_uid(target), SchemaOrigin::Entity, imports);
                TsType::reference(name, cardinality.is_many())
            }
            AttributeKind::Component {
                component,
                repeatable,
            } => {
                let to = Self::component_origin(component);
                let name = self.reference(type_name_from_uid(component), to, imports);
                TsType::reference(name, *repeatable)
            }
            AttributeKind::DynamicZone { components } if components.is_empty() => {
                TsType::array(TsType::named("any"))
            }
            AttributeKind::DynamicZone { components } => {
                let arms = components
                    .iter()
                    .map(|uid| {
                        let to = Self::component_origin(uid);
                        let name = self.reference(type_name_from_uid(uid), to, imports);
                        TsType::Intersection(vec![
                            TsType::Object(vec![(
                                "__component".to_string(),
                                TsType::literal(uid.as_str()),
                            )]),
                            TsType::named(name),
                        ])
                    })
                    .collect();
                TsType::array(TsType::Union(arms))
            }
            AttributeKind::Media { multiple } => {
                let name = self.reference(MEDIA_TYPE.to_string(), SchemaOrigin::Entity, imports);
                TsType::data(TsType::named(name).array_if(*multiple))
            }
            AttributeKind::Enumeration { values } if values.is_empty() => TsType::named("string"),
            AttributeKind::Enumeration { values } => {
                TsType::Union(values.iter().map(|v| TsType::literal(v.as_str())).collect())
            }
            AttributeKind::Password => return None,
            AttributeKind::Text(_) => TsType::named("string"),
            AttributeKind::Number(_) => TsType::named("number"),
            AttributeKind::Temporal(_) => TsType::named("Date"),
            AttributeKind::Boolean => TsType::named("boolean"),
            AttributeKind::Json | AttributeKind::Other(_) => TsType::named("any"),
        };
        Some(ty)
    }
}

impl TypeMapper for TypeScriptTypeMapper<'_> {
    fn map_attribute(&self, attribute: &Attribute) -> Option<MappedType> {
        let mut imports = Vec::new();
        let ty = self.map_kind(&attribute.kind, &mut imports)?;
        Some(MappedType {
            ty: ty.to_string(),
            imports,
        })
    }
}

#[cfg(test)]
mod tests {
    use strapgen_schema::{Cardinality, NumberKind, TemporalKind, TextKind};

    use super::*;

    fn entity() -> TypeScriptTypeMapper<'static> {
        TypeScriptTypeMapper::new(SchemaOrigin::Entity)
    }

    fn component() -> TypeScriptTypeMapper<'static> {
        TypeScriptTypeMapper::new(SchemaOrigin::Component)
    }

    fn map(mapper: TypeScriptTypeMapper<'_>, kind: AttributeKind) -> MappedType {
        mapper.map_attribute(&Attribute::new(kind)).unwrap()
    }

    fn modules(mapped: &MappedType) -> Vec<&str> {
        mapped.imports.iter().map(|i| i.module.as_str()).collect()
    }

    #[test]
    fn test_scalar_types() {
        let cases = [
            (AttributeKind::Text(TextKind::String), "string"),
            (AttributeKind::Text(TextKind::RichText), "string"),
            (AttributeKind::Text(TextKind::Email), "string"),
            (AttributeKind::Text(TextKind::Uid), "string"),
            (AttributeKind::Json, "any"),
            (AttributeKind::Number(NumberKind::Integer), "number"),
            (AttributeKind::Number(NumberKind::Decimal), "number"),
            (AttributeKind::Temporal(TemporalKind::DateTime), "Date"),
            (AttributeKind::Temporal(TemporalKind::Time), "Date"),
            (AttributeKind::Boolean, "boolean"),
            (AttributeKind::Other("blocks".to_string()), "any"),
        ];
        for (kind, expected) in cases {
            let mapped = map(entity(), kind);
            assert_eq!(mapped.ty, expected);
            assert!(mapped.imports.is_empty());
        }
    }

    #[test]
    fn test_password_is_suppressed() {
        let attribute = Attribute::new(AttributeKind::Password).required();
        assert!(entity().map_attribute(&attribute).is_none());
    }

    #[test]
    fn test_relation_single_and_many() {
        let author = map(
            entity(),
            AttributeKind::Relation {
                cardinality: Cardinality::ManyToOne,
                target: "api::author.author".to_string(),
            },
        );
        assert_eq!(author.ty, "{ data: Author } | number");
        assert_eq!(modules(&author), ["./Author"]);

        let tags = map(
            entity(),
            AttributeKind::Relation {
                cardinality: Cardinality::ManyToMany,
                target: "api::tag.tag".to_string(),
            },
        );
        assert_eq!(tags.ty, "{ data: Tag[] } | number[]");
    }

    #[test]
    fn test_relation_to_user() {
        let mapped = map(
            component(),
            AttributeKind::Relation {
                cardinality: Cardinality::OneToOne,
                target: USER_UID.to_string(),
            },
        );
        assert_eq!(mapped.ty, "{ data: User } | number");
        assert_eq!(modules(&mapped), ["../User"]);
    }

    #[test]
    fn test_component_paths() {
        let kind = AttributeKind::Component {
            component: "shared.seo".to_string(),
            repeatable: false,
        };
        let from_entity = map(entity(), kind.clone());
        assert_eq!(from_entity.ty, "{ data: Seo } | number");
        assert_eq!(modules(&from_entity), ["./components/Seo"]);

        let from_component = map(component(), kind);
        assert_eq!(modules(&from_component), ["./Seo"]);
    }

    #[test]
    fn test_repeatable_component() {
        let mapped = map(
            entity(),
            AttributeKind::Component {
                component: "shared.link".to_string(),
                repeatable: true,
            },
        );
        assert_eq!(mapped.ty, "{ data: Link[] } | number[]");
    }

    #[test]
    fn test_dynamic_zone() {
        let mapped = map(
            entity(),
            AttributeKind::DynamicZone {
                components: vec!["blocks.hero".to_string(), "blocks.rich-text".to_string()],
            },
        );
        assert_eq!(
            mapped.ty,
            "Array<({ __component: \"blocks.hero\" } & Hero) | ({ __component: \"blocks.rich-text\" } & RichText)>"
        );
        assert_eq!(
            modules(&mapped),
            ["./components/Hero", "./components/RichText"]
        );
    }

    #[test]
    fn test_empty_dynamic_zone() {
        let mapped = map(entity(), AttributeKind::DynamicZone { components: vec![] });
        assert_eq!(mapped.ty, "any[]");
    }

    #[test]
    fn test_media() {
        let single = map(entity(), AttributeKind::Media { multiple: false });
        assert_eq!(single.ty, "{ data: Media }");
        assert_eq!(modules(&single), ["./Media"]);

        let gallery = map(component(), AttributeKind::Media { multiple: true });
        assert_eq!(gallery.ty, "{ data: Media[] }");
        assert_eq!(modules(&gallery), ["../Media"]);
    }

    #[test]
    fn test_enumeration() {
        let mapped = map(
            entity(),
            AttributeKind::Enumeration {
                values: vec!["draft".to_string(), "published".to_string()],
            },
        );
        assert_eq!(mapped.ty, "\"draft\" | \"published\"");

        let empty = map(entity(), AttributeKind::Enumeration { values: vec![] });
        assert_eq!(empty.ty, "string");
    }

    fn relation(target: &str) -> AttributeKind {
        AttributeKind::Relation {
            cardinality: Cardinality::ManyToOne,
            target: target.to_string(),
        }
    }

    #[test]
    fn test_self_reference_is_not_imported() {
        let mapped = map(entity().declaring("Category"), relation("api::category.category"));
        assert_eq!(mapped.ty, "{ data: Category } | number");
        assert!(mapped.imports.is_empty());
    }

    #[test]
    fn test_entity_named_like_the_component_is_aliased() {
        let mapped = map(component().declaring("Author"), relation("api::author.author"));
        assert_eq!(mapped.ty, "{ data: AuthorEntity } | number");
        assert_eq!(
            mapped.imports,
            [ImportRequirement {
                symbol: "Author".to_string(),
                alias: Some("AuthorEntity".to_string()),
                module: "../Author".to_string(),
            }]
        );
    }

    #[test]
    fn test_component_named_like_the_entity_is_aliased() {
        let kind = AttributeKind::Component {
            component: "shared.seo".to_string(),
            repeatable: false,
        };
        let mapped = map(entity().declaring("Seo"), kind);
        assert_eq!(mapped.ty, "{ data: SeoComponent } | number");
        assert_eq!(modules(&mapped), ["./components/Seo"]);
        assert_eq!(mapped.imports[0].alias.as_deref(), Some("SeoComponent"));
    }

    #[test]
    fn test_media_inside_a_media_component_is_aliased() {
        let mapped = map(
            component().declaring("Media"),
            AttributeKind::Media { multiple: true },
        );
        assert_eq!(mapped.ty, "{ data: MediaEntity[] }");
        assert_eq!(modules(&mapped), ["../Media"]);
    }
}
