//! TypeScript source generation for a walked module.

use crate::ast::{DeclarationStyle, Interface};
use yangly_schema::types::Module;

/// Options controlling generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Fall back to `unknown` (strict) rather than `any`.
    pub strict: bool,
    /// Outer declaration syntax.
    pub style: DeclarationStyle,
    /// Emit the module header comment.
    pub header: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            strict: true,
            style: DeclarationStyle::Interface,
            header: true,
        }
    }
}

impl GenerateOptions {
    /// Sets strict mode.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the declaration style.
    #[must_use]
    pub const fn with_style(mut self, style: DeclarationStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables or disables the header comment.
    #[must_use]
    pub const fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Renders the output file for one module.
pub struct Generator<'a> {
    module: &'a Module,
    interface: &'a Interface,
    style: DeclarationStyle,
    header: bool,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default style and a header.
    #[must_use]
    pub fn new(module: &'a Module, interface: &'a Interface) -> Self {
        Self {
            module,
            interface,
            style: DeclarationStyle::default(),
            header: true,
        }
    }

    /// Creates a generator configured from options.
    #[must_use]
    pub fn with_options(
        module: &'a Module,
        interface: &'a Interface,
        options: &GenerateOptions,
    ) -> Self {
        Self::new(module, interface)
            .style(options.style)
            .header(options.header)
    }

    /// Sets the declaration style.
    #[must_use]
    pub fn style(mut self, style: DeclarationStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables or disables the header comment.
    #[must_use]
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Generates the complete file contents.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        if self.header {
            output.push_str(&self.header_line());
            output.push_str("\n\n");
        }

        output.push_str(&self.interface.declaration(self.style));
        output.push('\n');

        output
    }

    /// Returns the header comment identifying the source module.
    #[must_use]
    pub fn header_line(&self) -> String {
        let name = match self.module.current() {
            Some(revision) => format!("{}@{}", self.module.name, revision),
            None => self.module.name.clone(),
        };
        let namespace = self.module.namespace.as_deref().unwrap_or("none");

        format!("// Module: {} (Namespace: {})", name, namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, TsPrimitive, Type};

    fn fixture() -> (Module, Interface) {
        let mut module = Module::new("acme-device");
        module.namespace = Some("urn:acme:device".to_string());
        module.revisions = vec!["2024-03-01".to_string()];

        let mut interface = Interface::new("acme-device");
        interface.add_field(Field::new("name", Type::from(TsPrimitive::String), false));

        (module, interface)
    }

    #[test]
    fn test_generate_with_header() {
        let (module, interface) = fixture();
        let output = Generator::new(&module, &interface).generate();

        assert_eq!(
            output,
            "// Module: acme-device@2024-03-01 (Namespace: urn:acme:device)\n\n\
             export interface AcmeDevice {\nname: string;\n}\n"
        );
    }

    #[test]
    fn test_generate_without_header() {
        let (module, interface) = fixture();
        let output = Generator::new(&module, &interface).header(false).generate();

        assert!(output.starts_with("export interface AcmeDevice"));
    }

    #[test]
    fn test_generate_type_alias() {
        let (module, interface) = fixture();
        let options = GenerateOptions::default()
            .with_style(DeclarationStyle::TypeAlias)
            .with_header(false);
        let output = Generator::with_options(&module, &interface, &options).generate();

        assert_eq!(output, "export type AcmeDevice = {\nname: string;\n};\n");
    }

    #[test]
    fn test_header_without_revision_or_namespace() {
        let module = Module::new("bare");
        let interface = Interface::new("bare");
        let generator = Generator::new(&module, &interface);

        assert_eq!(generator.header_line(), "// Module: bare (Namespace: none)");
    }

    #[test]
    fn test_default_options() {
        let options = GenerateOptions::default();
        assert!(options.strict);
        assert!(options.header);
        assert_eq!(options.style, DeclarationStyle::Interface);
        assert!(!options.with_strict(false).strict);
    }
}
