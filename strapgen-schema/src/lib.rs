//! Schema JSON parsing and project discovery for strapgen.
//!
//! Reads Strapi content-type (`schema.json`) and component definitions
//! into typed [`Schema`] values and locates them inside a project.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod attribute;
mod error;
mod layout;
mod schema;

pub use attribute::{Attribute, AttributeKind, Cardinality, NumberKind, TemporalKind, TextKind};
pub use error::{Error, Result, SourceContext};
pub use layout::{ProjectLayout, SchemaOrigin, SchemaSource};
pub use schema::{I18nOptions, PluginOptions, Schema, parse_schema};
