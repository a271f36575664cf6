//! TypeScript interface builder.

use strapgen_codegen::builder::{CodeFragment, Renderable};

/// The type of an interface member.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// A single-line type expression
    Inline(String),
    /// An inline object type spread over several lines
    Object(Vec<InterfaceField>),
}

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: FieldType,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl ToString) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Inline(ty.to_string()),
            optional: false,
        }
    }

    /// A field whose type is a nested object literal.
    pub fn object(name: impl Into<String>, fields: Vec<InterfaceField>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Object(fields),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark optional when `optional` is set.
    pub fn optional_if(self, optional: bool) -> Self {
        if optional { self.optional() } else { self }
    }

    fn to_fragment(&self) -> CodeFragment {
        let optional = if self.optional { "?" } else { "" };
        match &self.ty {
            FieldType::Inline(ty) => {
                CodeFragment::line(format!("{}{}: {};", self.name, optional, ty))
            }
            FieldType::Object(fields) if fields.is_empty() => {
                CodeFragment::line(format!("{}{}: {{}};", self.name, optional))
            }
            FieldType::Object(fields) => CodeFragment::block(
                format!("{}{}: {{", self.name, optional),
                fields.iter().map(InterfaceField::to_fragment).collect(),
                Some("};".to_string()),
            ),
        }
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl ToString) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a required field holding a nested object type.
    pub fn object_field(mut self, name: impl Into<String>, fields: Vec<InterfaceField>) -> Self {
        self.fields.push(InterfaceField::object(name, fields));
        self
    }

    /// Add several fields in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::line(format!(
                "export interface {} {{}}",
                self.name
            ))]
        } else {
            vec![CodeFragment::block(
                format!("export interface {} {{", self.name),
                self.fields.iter().map(InterfaceField::to_fragment).collect(),
                Some("}".to_string()),
            )]
        }
    }
}
