//! Schema validation utilities.
//!
//! [`validate_module`] checks the structure a module must have before it is
//! handed to code generation. [`check_module`] collects leaf-level findings
//! that generation absorbs with a fallback type; callers report them as
//! diagnostics and carry on.

use crate::error::SchemaError;
use crate::types::{Entry, EntryKind, Module, TypeKind, YangType};

/// Validates a loaded module for structural consistency.
///
/// # Arguments
/// * `module` - The module to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError::UnknownKey` if a list key names no child.
pub fn validate_module(module: &Module) -> Result<(), SchemaError> {
    for entry in module.entries.values() {
        validate_entry(entry, &module.name)?;
    }
    Ok(())
}

/// Collects non-fatal findings for a loaded module.
///
/// Reports leaves without a type and enumerations or unions with no members,
/// in name order. An empty result means nothing will fall back.
#[must_use]
pub fn check_module(module: &Module) -> Vec<SchemaError> {
    let mut findings = Vec::new();
    for entry in module.entries.values() {
        check_entry(entry, &module.name, &mut findings);
    }
    findings
}

/// Validates an entry and its subtree.
fn validate_entry(entry: &Entry, parent_path: &str) -> Result<(), SchemaError> {
    let path = format!("{}/{}", parent_path, entry.name);

    if entry.kind == EntryKind::Directory {
        validate_keys(entry, &path)?;
    }

    for child in entry.dir.values() {
        validate_entry(child, &path)?;
    }

    Ok(())
}

/// Validates that every key name of a list refers to a child.
fn validate_keys(entry: &Entry, path: &str) -> Result<(), SchemaError> {
    for key in entry.key_names() {
        if !entry.dir.contains_key(key) {
            return Err(SchemaError::UnknownKey {
                list: path.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_entry(entry: &Entry, parent_path: &str, findings: &mut Vec<SchemaError>) {
    let path = format!("{}/{}", parent_path, entry.name);

    if entry.kind == EntryKind::Leaf {
        match &entry.yang_type {
            Some(yang_type) => check_type(yang_type, &path, findings),
            None => findings.push(SchemaError::MissingType { path: path.clone() }),
        }
    }

    for child in entry.dir.values() {
        check_entry(child, &path, findings);
    }
}

/// Checks a type descriptor and its union members.
fn check_type(yang_type: &YangType, path: &str, findings: &mut Vec<SchemaError>) {
    match yang_type.kind {
        TypeKind::Enumeration if yang_type.enum_values.is_empty() => {
            findings.push(SchemaError::EmptyEnumeration {
                path: path.to_string(),
            });
        }
        TypeKind::Union if yang_type.members.is_empty() => {
            findings.push(SchemaError::EmptyUnion {
                path: path.to_string(),
            });
        }
        TypeKind::Union => {
            for member in &yang_type.members {
                check_type(member, path, findings);
            }
        }
        _ => {}
    }
}
