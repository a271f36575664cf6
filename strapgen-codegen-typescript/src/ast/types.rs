//! TypeScript type expressions.

use std::fmt;

use crate::naming::string_literal;

/// A TypeScript type expression.
///
/// Rendering through [`fmt::Display`] adds the parentheses or `Array<...>`
/// form needed to keep precedence intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// A type name or keyword (`string`, `number`, `Article`)
    Named(String),
    /// A string literal type (`"draft"`)
    Literal(String),
    /// An array of the inner type
    Array(Box<TsType>),
    /// Strapi's response envelope `{ data: T }`
    Data(Box<TsType>),
    /// An inline object type (`{ __component: "blocks.hero" }`)
    Object(Vec<(String, TsType)>),
    /// `A | B`
    Union(Vec<TsType>),
    /// `A & B`
    Intersection(Vec<TsType>),
}

impl TsType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn array(inner: TsType) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn data(inner: TsType) -> Self {
        Self::Data(Box::new(inner))
    }

    /// Wrap in an array when `is_array` is set.
    pub fn array_if(self, is_array: bool) -> Self {
        if is_array { Self::array(self) } else { self }
    }

    /// A reference to another record: the populated `{ data: T }` form or its bare numeric id.
    pub fn reference(name: impl Into<String>, is_array: bool) -> Self {
        Self::Union(vec![
            Self::data(Self::named(name).array_if(is_array)),
            Self::named("number").array_if(is_array),
        ])
    }

    /// Whether this type renders as a single token that needs no parentheses.
    fn is_atomic(&self) -> bool {
        match self {
            Self::Union(members) | Self::Intersection(members) => members.len() <= 1,
            _ => true,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Named(name) => f.write_str(name),
            TsType::Literal(value) => f.write_str(&string_literal(value)),
            TsType::Array(inner) if inner.is_atomic() => write!(f, "{}[]", inner),
            TsType::Array(inner) => write!(f, "Array<{}>", inner),
            TsType::Data(inner) => write!(f, "{{ data: {} }}", inner),
            TsType::Object(fields) if fields.is_empty() => f.write_str("{}"),
            TsType::Object(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", name, ty))
                    .collect();
                write!(f, "{{ {} }}", fields.join("; "))
            }
            TsType::Union(members) => join_members(f, members, " | "),
            TsType::Intersection(members) => join_members(f, members, " & "),
        }
    }
}

fn join_members(f: &mut fmt::Formatter<'_>, members: &[TsType], separator: &str) -> fmt::Result {
    if members.is_empty() {
        return f.write_str("never");
    }
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if member.is_atomic() {
            write!(f, "{}", member)?;
        } else {
            write!(f, "({})", member)?;
        }
    }
    Ok(())
}
