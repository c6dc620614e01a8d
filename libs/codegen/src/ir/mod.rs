//! Intermediate Representation (IR)
//!
//! The primary language table plus the two lookup indexes derived from it.
//! This is what every generator consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single language entry as declared in `languages.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Numeric identifier assigned by the definition file (0 if absent)
    #[serde(rename = "language_id")]
    pub id: u64,
    /// Always the key the record was declared under
    pub name: String,
    /// File extensions in declared order
    pub extensions: Vec<String>,
    /// Exact filenames in declared order
    pub filenames: Vec<String>,
}

/// Registry of all languages and the lookups derived from them
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// All languages indexed by name
    languages: BTreeMap<String, Language>,
    /// Extension -> every language declaring it
    by_extension: BTreeMap<String, Vec<Language>>,
    /// Filename -> every language declaring it
    by_filename: BTreeMap<String, Vec<Language>>,
}

impl LanguageRegistry {
    /// Build the registry and both indexes in a single pass.
    ///
    /// Buckets are filled in language-name order. Repeated declarations are
    /// kept as-is, so a language listing an extension twice shows up twice
    /// in that extension's bucket.
    pub fn new(languages: BTreeMap<String, Language>) -> Self {
        let mut by_extension: BTreeMap<String, Vec<Language>> = BTreeMap::new();
        let mut by_filename: BTreeMap<String, Vec<Language>> = BTreeMap::new();

        for language in languages.values() {
            for extension in &language.extensions {
                by_extension
                    .entry(extension.clone())
                    .or_default()
                    .push(language.clone());
            }

            for filename in &language.filenames {
                by_filename
                    .entry(filename.clone())
                    .or_default()
                    .push(language.clone());
            }
        }

        Self {
            languages,
            by_extension,
            by_filename,
        }
    }

    /// Get a language by its name
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.get(name)
    }

    /// Iterate over all languages in name order
    pub fn languages(&self) -> impl Iterator<Item = (&String, &Language)> {
        self.languages.iter()
    }

    pub fn by_extension(&self) -> &BTreeMap<String, Vec<Language>> {
        &self.by_extension
    }

    pub fn by_filename(&self) -> &BTreeMap<String, Vec<Language>> {
        &self.by_filename
    }

    /// Languages declaring the given extension (empty if none)
    pub fn languages_for_extension(&self, extension: &str) -> &[Language] {
        self.by_extension
            .get(extension)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Languages declaring the given filename (empty if none)
    pub fn languages_for_filename(&self, filename: &str) -> &[Language] {
        self.by_filename
            .get(filename)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
