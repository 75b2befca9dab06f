//! Prelude module for convenient imports.
//!
//! ```ignore
//! use yangly::prelude::*;
//! ```

// Schema types
pub use yangly_schema::{
    Entry, EntryKind, Module, ModuleSet, ParseError, SchemaError, TypeKind, YangType,
    check_module, load_module, parse_module, validate_module,
};

// Codegen types
pub use yangly_codegen::{
    CodegenError, DeclarationStyle, GenerateOptions, Generator, Interface, SchemaWalker,
    generate_from_file, generate_from_xml, generate_module, parse_schema,
};

// Driver
pub use crate::cli::{Cli, CliStyle, RunSummary};
pub use crate::scanner::scan_dir;
