//! TypeScript type model.
//!
//! A small, closed AST of TypeScript type expressions. Every node renders
//! itself through [`std::fmt::Display`]; rendering never fails.

use crate::casing::to_pascal_case;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// TypeScript scalar keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `bigint`
    BigInt,
    /// `boolean`
    Boolean,
    /// `any`
    Any,
    /// `unknown`
    Unknown,
    /// `never`
    Never,
}

impl TsPrimitive {
    /// Returns the TypeScript keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
        }
    }
}

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Scalar keyword.
    Primitive(TsPrimitive),
    /// `Array<T>`.
    Array(Box<Type>),
    /// Union of rendered member types.
    Union(Union),
    /// Object literal or keyed record.
    Record(Record),
    /// Named top-level interface.
    Interface(Interface),
}

impl Type {
    /// Creates a primitive type.
    #[must_use]
    pub const fn primitive(primitive: TsPrimitive) -> Self {
        Self::Primitive(primitive)
    }

    /// Creates an `Array<element>` type.
    #[must_use]
    pub fn array(element: Type) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns true if this type renders as the plain `string` keyword.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.to_string() == TsPrimitive::String.keyword()
    }
}

impl From<TsPrimitive> for Type {
    fn from(primitive: TsPrimitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Union> for Type {
    fn from(union: Union) -> Self {
        Self::Union(union)
    }
}

impl From<Record> for Type {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Interface> for Type {
    fn from(interface: Interface) -> Self {
        Self::Interface(interface)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Array(element) => write!(f, "Array<{}>", element),
            Self::Union(union) => fmt::Display::fmt(union, f),
            Self::Record(record) => fmt::Display::fmt(record, f),
            Self::Interface(interface) => fmt::Display::fmt(interface, f),
        }
    }
}

/// Union of already-rendered member types.
///
/// Members are deduplicated by exact text when the union is built and sorted
/// only when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Union {
    members: Vec<String>,
}

impl Union {
    /// Creates a union, dropping repeated members.
    #[must_use]
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            members: unique(members),
        }
    }

    /// Creates a union of single-quoted string literals.
    ///
    /// Backslashes and single quotes inside a value are escaped.
    #[must_use]
    pub fn of_literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            values
                .into_iter()
                .map(|value| format!("'{}'", escape_literal(value.as_ref()))),
        )
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns the number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the union has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return f.write_str(TsPrimitive::Never.keyword());
        }

        let mut sorted: Vec<&str> = self.members.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        f.write_str(&sorted.join(" | "))
    }
}

/// Associative record type with a key type and a list of fields.
///
/// A record keyed by `string` renders as an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: Box<Type>,
    fields: Vec<Field>,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Creates an empty record keyed by `string`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key: Box::new(Type::Primitive(TsPrimitive::String)),
            fields: Vec::new(),
        }
    }

    /// Replaces the key type.
    pub fn set_key_type(&mut self, key: Type) {
        self.key = Box::new(key);
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the key type.
    #[must_use]
    pub fn key(&self) -> &Type {
        &self.key
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.to_string();

        if self.fields.is_empty() {
            return write!(f, "Record<{}, {}>", key, TsPrimitive::Any.keyword());
        }

        let body = join_fields(&self.fields);
        if key == TsPrimitive::String.keyword() {
            write!(f, "{{\n{}\n}}", body)
        } else {
            write!(f, "Record<{}, {{\n{}\n}}>", key, body)
        }
    }
}

/// A named member of a record or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Member name as declared in the schema.
    pub name: String,
    /// Member type.
    pub value: Type,
    /// Whether the member may be absent.
    pub nullable: bool,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Type, nullable: bool) -> Self {
        Self {
            name: name.into(),
            value,
            nullable,
        }
    }

    /// Returns true if the name must be quoted to be a valid property key.
    #[must_use]
    pub fn needs_quotes(&self) -> bool {
        self.name.contains('-')
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.nullable { "?" } else { "" };

        if self.needs_quotes() {
            write!(f, "\"{}\"{}: {};", self.name, optional, self.value)
        } else {
            write!(f, "{}{}: {};", self.name, optional, self.value)
        }
    }
}

/// Outer syntax of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeclarationStyle {
    /// `export interface Name { ... }`
    #[default]
    Interface,
    /// `export type Name = { ... };`
    TypeAlias,
}

/// Named top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<Field>,
}

impl Interface {
    /// Creates an empty interface. The name is normalized when rendered.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the schema name of the interface.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized TypeScript identifier.
    #[must_use]
    pub fn ts_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the interface has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the interface in the given declaration style.
    #[must_use]
    pub fn declaration(&self, style: DeclarationStyle) -> String {
        let body = join_fields(&self.fields);
        match style {
            DeclarationStyle::Interface => {
                format!("export interface {} {{\n{}\n}}", self.ts_name(), body)
            }
            DeclarationStyle::TypeAlias => {
                format!("export type {} = {{\n{}\n}};", self.ts_name(), body)
            }
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration(DeclarationStyle::Interface))
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes repeated items, keeping the first occurrence of each.
#[must_use]
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}
