//! # yangly
//!
//! Generate TypeScript interfaces from resolved YANG modules.
//!
//! yangly reads module trees that a YANG front end has already resolved
//! (groupings expanded, typedefs flattened) and emits one TypeScript file
//! per module describing its configuration and state data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yangly::prelude::*;
//!
//! let module = load_module(Path::new("yangs/acme-device.xml"))?;
//! validate_module(&module)?;
//!
//! if let Some(source) = generate_module(&module, &GenerateOptions::default())? {
//!     std::fs::write("dist/acme-device.ts", source)?;
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Resolved module model, XML loading and validation
//! - [`codegen`] - TypeScript type model and generation
//! - [`cli`] - Command line driver
//! - [`scanner`] - Input file discovery

pub mod cli;
pub mod prelude;
pub mod scanner;

/// Resolved module model, loading and validation.
pub mod schema {
    pub use yangly_schema::*;
}

/// TypeScript generation from resolved modules.
pub mod codegen {
    pub use yangly_codegen::*;
}
