//! # yangly Schema
//!
//! Resolved YANG schema trees.
//!
//! This crate provides:
//! - Type definitions for modules, entries and resolved type descriptors
//! - A loader for the XML export of resolved modules
//! - A revision-aware module set
//! - Structural validation

pub mod error;
pub mod module_set;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use module_set::ModuleSet;
pub use parser::{load_module, parse_module};
pub use types::{Entry, EntryKind, Module, TypeKind, YangType};
pub use validation::{check_module, validate_module};
