//! Code generators for the language lookup tables
//!
//! Each target language has its own module that implements the `Generator` trait.

pub mod rust;

use crate::error::Result;
use crate::ir::LanguageRegistry;

/// Trait that all language generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from the language registry
    fn generate(&self, registry: &LanguageRegistry) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Module wrapping the generated items; `None` emits them at file level
    pub module_name: Option<String>,
    /// Whether to generate documentation comments
    pub generate_docs: bool,
    /// Whether rendered `Language` values carry their filenames.
    ///
    /// Off by default: values are emitted with `filenames: &[]` and the
    /// filenames only show up as keys of the filename index.
    pub render_filenames: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            module_name: Some("lingo".to_string()),
            generate_docs: true,
            render_filenames: false,
        }
    }
}
