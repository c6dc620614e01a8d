//! Formatting and writing of generated sources

use crate::error::{Error, Result};
use crate::LOG_TARGET;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Generated source ready to be written
#[derive(Debug, Clone)]
pub struct FormattedSource {
    pub contents: String,
    /// `false` when formatting failed and `contents` is the raw emission
    pub formatted: bool,
}

/// Pretty-print a generated Rust file.
///
/// Leading `//` comments are kept in front of the formatted items since the
/// pretty-printer only preserves doc comments.
pub fn format_source(source: &str) -> std::result::Result<String, syn::Error> {
    let (header, body) = split_header(source);
    let file = syn::parse_file(body)?;
    let formatted = prettyplease::unparse(&file);

    let mut out = String::with_capacity(header.len() + formatted.len() + 2);
    if !header.is_empty() {
        out.push_str(header);
        out.push_str("\n\n");
    }
    out.push_str(&formatted);

    Ok(out)
}

/// Format the source, falling back to the raw text if it does not parse.
///
/// The fallback still gets written so the error surfaces when the consumer
/// compiles it.
pub fn format_or_raw(source: String) -> FormattedSource {
    match format_source(&source) {
        Ok(contents) => FormattedSource {
            contents,
            formatted: true,
        },
        Err(err) => {
            warn!(target: LOG_TARGET, "warning: internal error: invalid Rust generated: {}", err);
            warn!(target: LOG_TARGET, "warning: compile the package to analyze the error");
            FormattedSource {
                contents: source,
                formatted: false,
            }
        }
    }
}

/// Write the generated file, replacing any existing one
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Split leading line comments (and blank lines) from the rest of the source
fn split_header(source: &str) -> (&str, &str) {
    let mut end = 0;
    for line in source.split_inclusive('\n') {
        let trimmed = line.trim();
        let is_line_comment =
            trimmed.starts_with("//") && !trimmed.starts_with("///") && !trimmed.starts_with("//!");
        if !is_line_comment && !trimmed.is_empty() {
            break;
        }
        end += line.len();
    }

    (source[..end].trim_end(), &source[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_marker_comment() {
        let source = "// Code generated by \"lingo\"; DO NOT EDIT.\n\npub   struct  A{x:u8}\n";
        let formatted = format_source(source).unwrap();
        assert!(formatted.starts_with("// Code generated by \"lingo\"; DO NOT EDIT.\n\npub struct A"));
    }

    #[test]
    fn doc_comments_are_not_header() {
        let (header, body) = split_header("// a\n// b\n\n/// doc\nstruct A;\n");
        assert_eq!(header, "// a\n// b");
        assert_eq!(body, "/// doc\nstruct A;\n");
    }

    #[test]
    fn no_header() {
        let (header, body) = split_header("struct A;\n");
        assert_eq!(header, "");
        assert_eq!(body, "struct A;\n");
    }

    #[test]
    fn invalid_source_falls_back_to_raw() {
        let source = "// header\n\npub mod 1bad {}\n".to_string();
        let result = format_or_raw(source.clone());
        assert!(!result.formatted);
        assert_eq!(result.contents, source);
    }

    #[test]
    fn valid_source_is_formatted() {
        let result = format_or_raw("pub static X:u8=1;".to_string());
        assert!(result.formatted);
        assert_eq!(result.contents, "pub static X: u8 = 1;\n");
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("languages.rs");
        let err = write_output(&path, "").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
