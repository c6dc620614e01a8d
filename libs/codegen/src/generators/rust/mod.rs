//! Rust code generator for language lookup tables
//!
//! Emits a single source file with the `Language` struct and three
//! `phf::Map` statics: by name, by extension and by filename. The consumer
//! crate needs `phf` as a dependency.

mod types;

use crate::error::Result;
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::{Language, LanguageRegistry};
use std::collections::BTreeMap;
use tracing::debug;

/// Output of the Rust generator
#[derive(Debug)]
pub struct RustOutput {
    /// Unformatted source, marker comment included
    pub source: String,
}

/// Rust code generator
pub struct RustGenerator {
    config: GeneratorConfig,
}

impl RustGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for RustGenerator {
    type Output = RustOutput;

    fn generate(&self, registry: &LanguageRegistry) -> Result<Self::Output> {
        let mut code = String::new();

        code.push_str(types::GENERATED_MARKER);
        code.push_str("\n\n");

        if let Some(module) = &self.config.module_name {
            code.push_str(&format!("pub mod {} {{\n", module));
        }

        code.push_str(&types::generate_language_struct(&self.config));
        code.push_str("\n\n");

        code.push_str(&self.generate_language_table(registry));
        code.push('\n');

        code.push_str(&self.generate_index(
            "LANGUAGES_BY_EXTENSION",
            "Languages keyed by file extension",
            registry.by_extension(),
        ));
        code.push('\n');

        code.push_str(&self.generate_index(
            "LANGUAGES_BY_FILENAME",
            "Languages keyed by exact filename",
            registry.by_filename(),
        ));

        if self.config.module_name.is_some() {
            code.push_str("}\n");
        }

        debug!(
            target: crate::LOG_TARGET,
            "emitted {} languages, {} extensions, {} filenames",
            registry.len(),
            registry.by_extension().len(),
            registry.by_filename().len()
        );

        Ok(RustOutput { source: code })
    }
}

impl RustGenerator {
    /// Generate the `LANGUAGES` map keyed by language name
    fn generate_language_table(&self, registry: &LanguageRegistry) -> String {
        let mut map = phf_codegen::Map::new();
        for (name, language) in registry.languages() {
            let value = types::render_language(language, &self.config);
            map.entry(name.as_str(), value.as_str());
        }

        let mut code = String::new();
        if self.config.generate_docs {
            code.push_str("/// Languages keyed by name\n");
        }
        code.push_str(&format!(
            "pub static LANGUAGES: ::phf::Map<&'static str, Language> = {};\n",
            map.build()
        ));

        code
    }

    /// Generate an index map from a key to every language declaring it
    fn generate_index(
        &self,
        name: &str,
        doc: &str,
        index: &BTreeMap<String, Vec<Language>>,
    ) -> String {
        let mut map = phf_codegen::Map::new();
        for (key, languages) in index {
            let value = types::render_language_slice(languages, &self.config);
            map.entry(key.as_str(), value.as_str());
        }

        let mut code = String::new();
        if self.config.generate_docs {
            code.push_str(&format!("/// {}\n", doc));
        }
        code.push_str(&format!(
            "pub static {}: ::phf::Map<&'static str, &'static [Language]> = {};\n",
            name,
            map.build()
        ));

        code
    }
}
