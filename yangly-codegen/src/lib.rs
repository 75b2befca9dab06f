//! # yangly Codegen
//!
//! TypeScript type generation from resolved YANG modules.
//!
//! This crate provides:
//! - A TypeScript type model that renders itself to source text
//! - The schema walker that maps entry trees onto the type model
//! - Output generation with module headers and declaration styles

pub mod ast;
pub mod casing;
pub mod error;
pub mod generator;
pub mod walker;

pub use ast::{DeclarationStyle, Field, Interface, Record, TsPrimitive, Type, Union};
pub use error::CodegenError;
pub use generator::{GenerateOptions, Generator};
pub use walker::{ParsedSchema, SchemaWalker, parse_schema};

use yangly_schema::Module;

/// Generates TypeScript for a loaded module.
///
/// # Returns
/// The file contents, or `None` if the module produces no fields.
///
/// # Errors
/// Returns `CodegenError` if the module does not resolve to a root entry.
pub fn generate_module(
    module: &Module,
    options: &GenerateOptions,
) -> Result<Option<String>, CodegenError> {
    let walker = SchemaWalker::new().with_strict(options.strict);
    let parsed = walker.parse_schema(Some(module))?;

    if parsed.is_empty {
        return Ok(None);
    }

    let generator = Generator::with_options(module, &parsed.interface, options);
    Ok(Some(generator.generate()))
}

/// Generates TypeScript from a resolved module XML document.
///
/// # Arguments
/// * `xml` - Resolved module document content
/// * `options` - Generation options
///
/// # Returns
/// Generated TypeScript, or `None` if the module is empty.
///
/// Leaves the walker can only render with a fallback type are logged as
/// warnings and do not stop generation.
///
/// # Errors
/// Returns `CodegenError` if loading, structural validation, or generation
/// fails.
pub fn generate_from_xml(
    xml: &str,
    options: &GenerateOptions,
) -> Result<Option<String>, CodegenError> {
    let module = yangly_schema::parse_module(xml)?;
    yangly_schema::validate_module(&module)?;
    for finding in yangly_schema::check_module(&module) {
        tracing::warn!("Module {}: {}", module.name, finding);
    }
    generate_module(&module, options)
}

/// Generates TypeScript from a resolved module XML file.
///
/// # Arguments
/// * `path` - Path to the resolved module document
/// * `options` - Generation options
///
/// # Returns
/// Generated TypeScript, or `None` if the module is empty.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, validation, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GenerateOptions,
) -> Result<Option<String>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INTERFACES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="acme-interfaces" namespace="urn:acme:interfaces">
    <revision date="2024-05-01"/>
    <container name="interfaces">
        <list name="interface" key="index">
            <leaf name="index" mandatory="true"><type kind="uint32"/></leaf>
            <leaf name="oper-status">
                <type kind="enumeration"><enum name="up"/><enum name="down"/><enum name="up"/></type>
            </leaf>
            <leaf-list name="counters"><type kind="uint64"/></leaf-list>
        </list>
    </container>
    <rpc name="reset"/>
</module>"#;

    #[test]
    fn test_generate_from_xml() {
        let output = generate_from_xml(INTERFACES, &GenerateOptions::default())
            .expect("Failed to generate")
            .expect("Module should not be empty");

        assert!(output.starts_with(
            "// Module: acme-interfaces@2024-05-01 (Namespace: urn:acme:interfaces)\n\n"
        ));
        assert!(output.contains("export interface AcmeInterfaces {\n"));
        assert!(output.contains("interface?: Record<number, {\n"));
        assert!(output.contains("counters?: Array<bigint>;"));
        assert!(output.contains("\"oper-status\"?: 'down' | 'up';"));
        assert!(!output.contains("reset"));
    }

    #[test]
    fn test_generate_empty_module() {
        let xml = r#"<module name="only-rpcs"><rpc name="ping"/></module>"#;
        let output =
            generate_from_xml(xml, &GenerateOptions::default()).expect("Failed to generate");
        assert!(output.is_none());
    }

    #[test]
    fn test_generate_rejects_invalid_module() {
        let xml = r#"<module name="m"><list name="l" key="id"/></module>"#;
        let err = generate_from_xml(xml, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_keeps_fallback_leaves() {
        let xml = r#"<module name="m">
            <leaf name="ok"><type kind="string"/></leaf>
            <leaf name="x"/>
            <leaf name="state"><type kind="enumeration"/></leaf>
        </module>"#;

        let output = generate_from_xml(xml, &GenerateOptions::default().with_header(false))
            .expect("Failed to generate")
            .expect("Module should not be empty");
        assert_eq!(
            output,
            "export interface M {\nok?: string;\nstate?: never;\nx?: unknown;\n}\n"
        );
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(INTERFACES.as_bytes())
            .expect("Failed to write temp file");

        let options = GenerateOptions::default().with_header(false);
        let output = generate_from_file(file.path(), &options)
            .expect("Failed to generate")
            .expect("Module should not be empty");
        assert!(output.starts_with("export interface AcmeInterfaces"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let err = generate_from_file(
            std::path::Path::new("/nonexistent/acme.xml"),
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
