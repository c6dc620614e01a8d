//! Language Lookup Table Generator
//!
//! Reads a `languages.yml` definition file (language name -> id, extensions,
//! filenames) and generates Rust source with static lookup maps by name, by
//! extension and by filename, meant to be compiled into another crate.
//!
//! ## Architecture
//!
//! The generator uses a four-stage pipeline:
//! 1. **Parser**: Loads the definition file into `Language` records
//! 2. **IR (Intermediate Representation)**: Primary table plus extension and filename indexes
//! 3. **Generators**: Language-specific code generation from the IR
//! 4. **Output**: Source formatting and writing
//!
//! The generated file looks like:
//!
//! ```text
//! // Code generated by "lingo"; DO NOT EDIT.
//!
//! pub mod lingo {
//!     pub struct Language { pub id: u64, pub name: &'static str, .. }
//!     pub static LANGUAGES: ::phf::Map<&'static str, Language> = ..;
//!     pub static LANGUAGES_BY_EXTENSION: ::phf::Map<&'static str, &'static [Language]> = ..;
//!     pub static LANGUAGES_BY_FILENAME: ::phf::Map<&'static str, &'static [Language]> = ..;
//! }
//! ```

pub mod error;
pub mod generators;
pub mod ir;
pub mod output;
pub mod parser;

use std::path::Path;

pub use error::{Error, Result};
use generators::rust::RustGenerator;
use generators::GeneratorConfig;
use ir::LanguageRegistry;
use tracing::debug;

/// Target used for every diagnostic emitted by the generator
pub const LOG_TARGET: &str = "lingo";

/// Main entry point for code generation
pub struct CodeGenerator {
    registry: LanguageRegistry,
}

impl CodeGenerator {
    /// Create a new code generator from a definition file
    pub fn from_path(path: &Path) -> Result<Self> {
        let languages = parser::load_languages(path)?;
        debug!(target: LOG_TARGET, "loaded {} languages from {}", languages.len(), path.display());
        Ok(Self {
            registry: LanguageRegistry::new(languages),
        })
    }

    /// Create a new code generator from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let languages = parser::parse_languages(content)?;
        Ok(Self {
            registry: LanguageRegistry::new(languages),
        })
    }

    /// Get the language registry
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Generate code for a specific language
    pub fn generate<G: generators::Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.registry)
    }
}

/// Counts reported after a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub languages: usize,
    pub extensions: usize,
    pub filenames: usize,
    /// `false` when the raw, unformatted emission was written
    pub formatted: bool,
}

/// Convenience helper to run the Rust code generator from a definition file.
///
/// The output file is only touched once the input has been loaded and parsed.
pub fn generate_rust_from_file(
    input: &Path,
    output: &Path,
    config: GeneratorConfig,
) -> Result<GenerationSummary> {
    let codegen = CodeGenerator::from_path(input)?;

    let generated = codegen.generate(RustGenerator::new(config))?;
    let source = output::format_or_raw(generated.source);

    output::write_output(output, &source.contents)?;
    debug!(target: LOG_TARGET, "wrote {}", output.display());

    let registry = codegen.registry();
    Ok(GenerationSummary {
        languages: registry.len(),
        extensions: registry.by_extension().len(),
        filenames: registry.by_filename().len(),
        formatted: source.formatted,
    })
}
