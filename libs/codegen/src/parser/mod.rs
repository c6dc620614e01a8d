//! Parser for language definition files
//!
//! Reads a `languages.yml` mapping (language name -> record) into the IR.
//! Only `language_id`, `extensions` and `filenames` are read; other keys are
//! ignored.

use crate::error::{Error, Result};
use crate::ir::Language;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse a YAML document into languages keyed by name
pub fn parse_languages(content: &str) -> serde_yaml::Result<BTreeMap<String, Language>> {
    let mut languages: BTreeMap<String, Language> = serde_yaml::from_str(content)?;

    // The declaring key wins over any `name` carried by the record itself
    for (name, language) in languages.iter_mut() {
        language.name = name.clone();
    }

    Ok(languages)
}

/// Read and parse a language definition file
pub fn load_languages(path: &Path) -> Result<BTreeMap<String, Language>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_languages(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
