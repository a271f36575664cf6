//! Attribute descriptors as found under `attributes` in a schema file.

use std::fmt;

use serde::Deserialize;

/// A single attribute of a content type or component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAttribute")]
pub struct Attribute {
    /// Whether the attribute is marked `"required": true`
    pub required: bool,
    /// Kind-specific data
    pub kind: AttributeKind,
}

/// The closed set of attribute kinds understood by the generators.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    /// Reference to another content type
    Relation {
        cardinality: Cardinality,
        target: String,
    },
    /// Embedded component
    Component { component: String, repeatable: bool },
    /// List of components chosen from a fixed set
    DynamicZone { components: Vec<String> },
    /// Upload plugin file(s)
    Media { multiple: bool },
    /// One of a fixed list of string values
    Enumeration { values: Vec<String> },
    Text(TextKind),
    Json,
    Password,
    Number(NumberKind),
    Temporal(TemporalKind),
    Boolean,
    /// Any kind without a dedicated mapping, keeping the raw name
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    String,
    Text,
    RichText,
    Email,
    Uid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    BigInteger,
    Decimal,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    DateTime,
    Time,
}

/// Relation cardinality as written in the `relation` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    Other(String),
}

impl Cardinality {
    fn parse(s: &str) -> Self {
        match s {
            "oneToOne" => Self::OneToOne,
            "oneToMany" => Self::OneToMany,
            "manyToOne" => Self::ManyToOne,
            "manyToMany" => Self::ManyToMany,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the owning side holds a list of targets.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

impl Attribute {
    /// Create a non-required attribute of the given kind.
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            required: false,
            kind,
        }
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the attribute value is always a list.
    ///
    /// Lists come back empty rather than missing, so these are never rendered optional.
    pub fn is_array(&self) -> bool {
        match &self.kind {
            AttributeKind::Relation { cardinality, .. } => cardinality.is_many(),
            AttributeKind::Component { repeatable, .. } => *repeatable,
            AttributeKind::DynamicZone { .. } => true,
            _ => false,
        }
    }

    /// Whether the generated property gets a `?` marker.
    pub fn is_optional(&self) -> bool {
        !self.required && !self.is_array()
    }
}

impl AttributeKind {
    /// The `type` string this kind is declared with.
    pub fn name(&self) -> &str {
        match self {
            Self::Relation { .. } => "relation",
            Self::Component { .. } => "component",
            Self::DynamicZone { .. } => "dynamiczone",
            Self::Media { .. } => "media",
            Self::Enumeration { .. } => "enumeration",
            Self::Text(TextKind::String) => "string",
            Self::Text(TextKind::Text) => "text",
            Self::Text(TextKind::RichText) => "richtext",
            Self::Text(TextKind::Email) => "email",
            Self::Text(TextKind::Uid) => "uid",
            Self::Json => "json",
            Self::Password => "password",
            Self::Number(NumberKind::Integer) => "integer",
            Self::Number(NumberKind::BigInteger) => "biginteger",
            Self::Number(NumberKind::Decimal) => "decimal",
            Self::Number(NumberKind::Float) => "float",
            Self::Temporal(TemporalKind::Date) => "date",
            Self::Temporal(TemporalKind::DateTime) => "datetime",
            Self::Temporal(TemporalKind::Time) => "time",
            Self::Boolean => "boolean",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat attribute shape used for deserialization.
#[derive(Debug, Deserialize)]
struct RawAttribute {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    required: bool,
    relation: Option<String>,
    target: Option<String>,
    component: Option<String>,
    #[serde(default)]
    repeatable: bool,
    #[serde(default)]
    components: Vec<String>,
    #[serde(default)]
    multiple: bool,
    #[serde(default, rename = "enum")]
    values: Vec<String>,
}

impl From<RawAttribute> for Attribute {
    fn from(raw: RawAttribute) -> Self {
        let kind = match raw.kind.as_str() {
            // Polymorphic relations have no target and fall through to Other
            "relation" => match raw.target {
                Some(target) => AttributeKind::Relation {
                    cardinality: Cardinality::parse(raw.relation.as_deref().unwrap_or_default()),
                    target,
                },
                None => AttributeKind::Other(raw.kind),
            },
            "component" => match raw.component {
                Some(component) => AttributeKind::Component {
                    component,
                    repeatable: raw.repeatable,
                },
                None => AttributeKind::Other(raw.kind),
            },
            "dynamiczone" => AttributeKind::DynamicZone {
                components: raw.components,
            },
            "media" => AttributeKind::Media {
                multiple: raw.multiple,
            },
            "enumeration" => AttributeKind::Enumeration { values: raw.values },
            "string" => AttributeKind::Text(TextKind::String),
            "text" => AttributeKind::Text(TextKind::Text),
            "richtext" => AttributeKind::Text(TextKind::RichText),
            "email" => AttributeKind::Text(TextKind::Email),
            "uid" => AttributeKind::Text(TextKind::Uid),
            "json" => AttributeKind::Json,
            "password" => AttributeKind::Password,
            "integer" => AttributeKind::Number(NumberKind::Integer),
            "biginteger" => AttributeKind::Number(NumberKind::BigInteger),
            "decimal" => AttributeKind::Number(NumberKind::Decimal),
            "float" => AttributeKind::Number(NumberKind::Float),
            "date" => AttributeKind::Temporal(TemporalKind::Date),
            "datetime" => AttributeKind::Temporal(TemporalKind::DateTime),
            "time" => AttributeKind::Temporal(TemporalKind::Time),
            "boolean" => AttributeKind::Boolean,
            _ => AttributeKind::Other(raw.kind),
        };

        Attribute {
            required: raw.required,
            kind,
        }
    }
}
