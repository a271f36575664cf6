//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Schema;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.json")
    }
}

impl Schema {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_schema(&content, &path.display().to_string())
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeKind;

    #[test]
    fn test_parse_collection_type() {
        let schema: Schema = r#"{
            "kind": "collectionType",
            "collectionName": "articles",
            "info": { "singularName": "article", "pluralName": "articles", "displayName": "Article" },
            "options": { "draftAndPublish": true },
            "pluginOptions": { "i18n": { "localized": true } },
            "attributes": {
                "title": { "type": "string", "required": true },
                "body": { "type": "richtext" }
            }
        }"#
        .parse()
        .unwrap();

        assert!(schema.is_localized());
        let names: Vec<_> = schema.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["title", "body"]);
        assert!(schema.attributes["title"].required);
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let schema: Schema = r#"{"attributes": {
            "zeta": { "type": "string" },
            "alpha": { "type": "integer" },
            "mid": { "type": "boolean" }
        }}"#
        .parse()
        .unwrap();

        let names: Vec<_> = schema.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_component_schema_defaults() {
        let schema: Schema = r#"{
            "collectionName": "components_shared_seos",
            "info": { "displayName": "seo" },
            "attributes": { "metaTitle": { "type": "string" } }
        }"#
        .parse()
        .unwrap();

        assert!(!schema.is_localized());
        assert_eq!(
            schema.attributes["metaTitle"].kind,
            AttributeKind::Text(crate::TextKind::String)
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_schema("{ \"attributes\": { ", "broken.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "could not parse schema");
    }

    #[test]
    fn test_missing_attributes_is_parse_error() {
        let err = parse_schema("{ \"kind\": \"singleType\" }", "schema.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Schema::from_file("/definitely/not/here/schema.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
