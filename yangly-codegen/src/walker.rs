//! Schema tree to type model conversion.
//!
//! [`SchemaWalker`] performs a depth-first walk over a resolved entry tree and
//! builds the matching [`Type`] for every node. Children are visited in name
//! order, so the output is reproducible for a given module.

use crate::ast::{Field, Interface, Record, TsPrimitive, Type, Union};
use crate::error::CodegenError;
use yangly_schema::types::{Entry, EntryKind, Module, TypeKind, YangType};

/// Result of converting a module root into an interface.
#[derive(Debug, Clone)]
pub struct ParsedSchema {
    /// Interface named after the module.
    pub interface: Interface,
    /// True if no top-level entry produced a field.
    pub is_empty: bool,
}

/// Converts resolved schema entries into TypeScript types.
#[derive(Debug, Clone, Copy)]
pub struct SchemaWalker {
    strict: bool,
}

impl Default for SchemaWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaWalker {
    /// Creates a strict walker, which falls back to `unknown`.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: true }
    }

    /// Creates a permissive walker, which falls back to `any`.
    #[must_use]
    pub const fn permissive() -> Self {
        Self { strict: false }
    }

    /// Sets strict mode.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if the walker is strict.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Type used for anything that cannot be mapped precisely.
    #[must_use]
    pub const fn default_type(&self) -> Type {
        if self.strict {
            Type::Primitive(TsPrimitive::Unknown)
        } else {
            Type::Primitive(TsPrimitive::Any)
        }
    }

    /// Converts a module into a single interface.
    ///
    /// Top-level rpcs/actions and entries flagged as action input only are
    /// skipped. Every other top-level entry becomes a field.
    ///
    /// # Errors
    /// Returns [`CodegenError::NilModule`] if `module` is `None` and
    /// [`CodegenError::NilEntry`] if the module does not resolve to a root
    /// entry.
    pub fn parse_schema(&self, module: Option<&Module>) -> Result<ParsedSchema, CodegenError> {
        let module = module.ok_or(CodegenError::NilModule)?;
        let root = module
            .to_entry()
            .ok_or_else(|| CodegenError::nil_entry(&module.name))?;

        let mut interface = Interface::new(root.name.clone());

        for entry in root.dir.values() {
            if entry.rpc {
                tracing::debug!("Skipping rpc '{}' in module {}", entry.name, module.name);
                continue;
            }

            if entry.config_only {
                tracing::debug!(
                    "Skipping action input '{}' in module {}",
                    entry.name,
                    module.name
                );
                continue;
            }

            interface.add_field(Field::new(
                entry.name.clone(),
                self.walk(entry),
                !entry.mandatory,
            ));
        }

        let is_empty = interface.is_empty();
        Ok(ParsedSchema {
            interface,
            is_empty,
        })
    }

    /// Converts an entry and its subtree into a type.
    #[must_use]
    pub fn walk(&self, entry: &Entry) -> Type {
        match entry.kind {
            EntryKind::AnyXml => Type::Primitive(TsPrimitive::String),
            EntryKind::AnyData => self.default_type(),
            EntryKind::Leaf => {
                let scalar = self.scalar_type(entry.yang_type.as_ref(), &entry.name);
                if entry.is_leaf_list() {
                    Type::array(scalar)
                } else {
                    scalar
                }
            }
            EntryKind::Directory => Type::Record(self.walk_directory(entry)),
            EntryKind::Choice | EntryKind::Case | EntryKind::Notification => {
                tracing::warn!(
                    "Unhandled {} entry '{}', using {}",
                    entry.kind.keyword(),
                    entry.name,
                    self.default_type()
                );
                self.default_type()
            }
        }
    }

    /// Builds the record for a container or list.
    ///
    /// The record is keyed by `string` unless a child is named by the list
    /// key, in which case that child's type becomes the key type.
    fn walk_directory(&self, entry: &Entry) -> Record {
        let mut record = Record::new();

        for child in entry.dir.values() {
            let value = self.walk(child);

            if entry.key.as_deref() == Some(child.name.as_str()) {
                record.set_key_type(value.clone());
            }

            record.add_field(Field::new(child.name.clone(), value, !child.mandatory));
        }

        record
    }

    /// Maps a resolved scalar type descriptor.
    ///
    /// `owner` names the leaf for diagnostics.
    #[must_use]
    pub fn scalar_type(&self, yang_type: Option<&YangType>, owner: &str) -> Type {
        let Some(yang_type) = yang_type else {
            tracing::warn!("Leaf '{}' has no type, using {}", owner, self.default_type());
            return self.default_type();
        };

        match &yang_type.kind {
            TypeKind::Int8
            | TypeKind::Int16
            | TypeKind::Int32
            | TypeKind::Uint8
            | TypeKind::Uint16
            | TypeKind::Uint32
            | TypeKind::Decimal64 => Type::Primitive(TsPrimitive::Number),
            TypeKind::Int64 | TypeKind::Uint64 => Type::Primitive(TsPrimitive::BigInt),

            TypeKind::String
            | TypeKind::Binary
            | TypeKind::IdentityRef
            | TypeKind::InstanceIdentifier => Type::Primitive(TsPrimitive::String),

            // `empty` is a presence flag.
            TypeKind::Bool | TypeKind::Empty => Type::Primitive(TsPrimitive::Boolean),

            // Each set bit is reported by name.
            TypeKind::Bits => Type::array(Type::Primitive(TsPrimitive::String)),

            TypeKind::Enumeration => Type::Union(Union::of_literals(&yang_type.enum_values)),

            TypeKind::Union => Type::Union(Union::new(
                yang_type
                    .members
                    .iter()
                    .map(|member| self.scalar_type(Some(member), owner).to_string()),
            )),

            // The target leaf is not resolved.
            TypeKind::LeafRef => self.default_type(),

            TypeKind::None => Type::Primitive(TsPrimitive::Never),

            TypeKind::Unknown(name) => {
                tracing::warn!(
                    "Unhandled YANG base type '{}' for leaf '{}', using {}",
                    name,
                    owner,
                    self.default_type()
                );
                self.default_type()
            }
        }
    }
}

/// Converts a module into an interface with a strict walker.
///
/// # Errors
/// See [`SchemaWalker::parse_schema`].
pub fn parse_schema(module: Option<&Module>) -> Result<ParsedSchema, CodegenError> {
    SchemaWalker::new().parse_schema(module)
}
