//! Resolved schema tree definitions.
//!
//! This module contains the data structures representing an already-resolved
//! YANG module: the module itself, its entry tree, and the scalar type
//! descriptors attached to leaves.

use std::collections::BTreeMap;

/// A resolved YANG module (or submodule).
#[derive(Debug, Clone, Default)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// XML namespace URI.
    pub namespace: Option<String>,
    /// Module prefix.
    pub prefix: Option<String>,
    /// Parent module name, set only for submodules.
    pub belongs_to: Option<String>,
    /// Revision dates (`YYYY-MM-DD`) in declaration order.
    pub revisions: Vec<String>,
    /// Description.
    pub description: Option<String>,
    /// Top-level entries keyed by name.
    pub entries: BTreeMap<String, Entry>,
}

impl Module {
    /// Creates a new empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if this is a submodule.
    #[must_use]
    pub fn is_submodule(&self) -> bool {
        self.belongs_to.is_some()
    }

    /// Returns the newest revision date, if any.
    ///
    /// Dates compare lexically since they are zero-padded ISO dates.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.revisions.iter().map(String::as_str).max()
    }

    /// Adds a top-level entry, returning the entry it replaced (if any).
    pub fn add_entry(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Resolves the module into its root directory entry.
    ///
    /// Submodules only resolve through the module they belong to, so they
    /// return `None`.
    #[must_use]
    pub fn to_entry(&self) -> Option<Entry> {
        if self.is_submodule() {
            return None;
        }

        let mut root = Entry::new(self.name.clone(), EntryKind::Directory);
        root.description = self.description.clone();
        root.dir = self.entries.clone();
        Some(root)
    }
}

/// Kind of a schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    /// Leaf or leaf-list.
    #[default]
    Leaf,
    /// Container, list, rpc or action.
    Directory,
    /// `anyxml` node.
    AnyXml,
    /// `anydata` node.
    AnyData,
    /// `choice` node.
    Choice,
    /// `case` node.
    Case,
    /// `notification` node.
    Notification,
}

impl EntryKind {
    /// Returns the schema keyword for this kind.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Directory => "directory",
            Self::AnyXml => "anyxml",
            Self::AnyData => "anydata",
            Self::Choice => "choice",
            Self::Case => "case",
            Self::Notification => "notification",
        }
    }
}

/// A node of the resolved schema tree.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    /// Entry name.
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Whether the node must always be present.
    pub mandatory: bool,
    /// Whether the node is only used as action/RPC input.
    pub config_only: bool,
    /// Whether the node is an rpc or action.
    pub rpc: bool,
    /// Whether a leaf is repeated (leaf-list).
    pub list_attr: bool,
    /// Key child name(s) for lists, space separated.
    pub key: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Resolved type (leaves only).
    pub yang_type: Option<YangType>,
    /// Children keyed by name.
    pub dir: BTreeMap<String, Entry>,
}

impl Entry {
    /// Creates a new entry of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Creates a single-valued leaf of the given type.
    #[must_use]
    pub fn leaf(name: impl Into<String>, yang_type: YangType) -> Self {
        let mut entry = Self::new(name, EntryKind::Leaf);
        entry.yang_type = Some(yang_type);
        entry
    }

    /// Creates a repeated leaf (leaf-list) of the given type.
    #[must_use]
    pub fn leaf_list(name: impl Into<String>, yang_type: YangType) -> Self {
        let mut entry = Self::leaf(name, yang_type);
        entry.list_attr = true;
        entry
    }

    /// Creates an empty directory (container) entry.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// Sets the mandatory flag.
    #[must_use]
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the list key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a child entry, returning the entry it replaced (if any).
    pub fn add_child(&mut self, child: Entry) -> Option<Entry> {
        self.dir.insert(child.name.clone(), child)
    }

    /// Adds a child entry, builder style.
    #[must_use]
    pub fn with_child(mut self, child: Entry) -> Self {
        self.add_child(child);
        self
    }

    /// Returns true if this is a leaf-list.
    #[must_use]
    pub const fn is_leaf_list(&self) -> bool {
        matches!(self.kind, EntryKind::Leaf) && self.list_attr
    }

    /// Iterates over the key child names of a list.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.key.as_deref().unwrap_or_default().split_whitespace()
    }
}

/// Resolved YANG type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YangType {
    /// Typedef or builtin name.
    pub name: String,
    /// Resolved base kind.
    pub kind: TypeKind,
    /// Enumeration values in declaration order.
    pub enum_values: Vec<String>,
    /// Bit names.
    pub bits: Vec<String>,
    /// Union member types.
    pub members: Vec<YangType>,
    /// Leafref target path.
    pub path: Option<String>,
}

impl YangType {
    /// Creates a type descriptor of the given kind named after its keyword.
    #[must_use]
    pub fn new(kind: TypeKind) -> Self {
        Self {
            name: kind.keyword().to_string(),
            kind,
            enum_values: Vec::new(),
            bits: Vec::new(),
            members: Vec::new(),
            path: None,
        }
    }

    /// Creates an enumeration with the given values.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut yang_type = Self::new(TypeKind::Enumeration);
        yang_type.enum_values = values.into_iter().map(Into::into).collect();
        yang_type
    }

    /// Creates a union of the given member types.
    #[must_use]
    pub fn union(members: Vec<YangType>) -> Self {
        let mut yang_type = Self::new(TypeKind::Union);
        yang_type.members = members;
        yang_type
    }
}

/// Base kinds of YANG types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Fixed-point decimal.
    Decimal64,
    /// Character string.
    String,
    /// Binary blob.
    Binary,
    /// Reference to an identity.
    IdentityRef,
    /// Instance identifier path.
    InstanceIdentifier,
    /// Boolean.
    Bool,
    /// Presence flag.
    Empty,
    /// Bit-flag set.
    Bits,
    /// Enumeration.
    Enumeration,
    /// Union of types.
    Union,
    /// Reference to another leaf.
    LeafRef,
    /// Explicit "no value" type.
    None,
    /// Kind not recognized by the loader.
    Unknown(String),
}

impl TypeKind {
    /// Parses a kind from its YANG keyword. Unrecognized names are kept as
    /// [`TypeKind::Unknown`].
    #[must_use]
    pub fn from_keyword(name: &str) -> Self {
        match name {
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint8" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "decimal64" => Self::Decimal64,
            "string" => Self::String,
            "binary" => Self::Binary,
            "identityref" => Self::IdentityRef,
            "instance-identifier" => Self::InstanceIdentifier,
            "boolean" => Self::Bool,
            "empty" => Self::Empty,
            "bits" => Self::Bits,
            "enumeration" => Self::Enumeration,
            "union" => Self::Union,
            "leafref" => Self::LeafRef,
            "none" => Self::None,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the YANG keyword for this kind.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Decimal64 => "decimal64",
            Self::String => "string",
            Self::Binary => "binary",
            Self::IdentityRef => "identityref",
            Self::InstanceIdentifier => "instance-identifier",
            Self::Bool => "boolean",
            Self::Empty => "empty",
            Self::Bits => "bits",
            Self::Enumeration => "enumeration",
            Self::Union => "union",
            Self::LeafRef => "leafref",
            Self::None => "none",
            Self::Unknown(name) => name,
        }
    }
}
