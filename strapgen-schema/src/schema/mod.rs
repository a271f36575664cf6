//! Schema types and parsing for content-type and component JSON files.

mod parse;

use indexmap::IndexMap;
pub use parse::parse_schema;
use serde::Deserialize;

use crate::Attribute;

/// A parsed `schema.json` (content type) or component definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Plugin settings (only i18n is read)
    #[serde(default)]
    pub plugin_options: PluginOptions,

    /// Attributes in declaration order
    pub attributes: IndexMap<String, Attribute>,
}

/// The `pluginOptions` object of a schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub i18n: Option<I18nOptions>,
}

/// The `pluginOptions.i18n` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nOptions {
    #[serde(default)]
    pub localized: bool,
}

impl Schema {
    /// Whether the i18n plugin localizes this content type.
    pub fn is_localized(&self) -> bool {
        self.plugin_options
            .i18n
            .as_ref()
            .is_some_and(|i18n| i18n.localized)
    }
}
