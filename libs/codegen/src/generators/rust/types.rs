//! Type declaration and value literals for the generated `Language` struct

use crate::generators::GeneratorConfig;
use crate::ir::Language;

/// First line of every generated file
pub const GENERATED_MARKER: &str = "// Code generated by \"lingo\"; DO NOT EDIT.";

/// Generate the `Language` struct declaration shared by all tables
pub fn generate_language_struct(config: &GeneratorConfig) -> String {
    let mut code = String::new();

    if config.generate_docs {
        code.push_str("/// A language and the file names that identify it\n");
    }

    code.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    code.push_str("pub struct Language {\n");
    code.push_str("    pub id: u64,\n");
    code.push_str("    pub name: &'static str,\n");
    code.push_str("    pub extensions: &'static [&'static str],\n");
    code.push_str("    pub filenames: &'static [&'static str],\n");
    code.push('}');

    code
}

/// Render a single `Language { .. }` value
///
/// Filenames are only rendered when `render_filenames` is set; otherwise the
/// value carries an empty slice.
pub fn render_language(language: &Language, config: &GeneratorConfig) -> String {
    let filenames = if config.render_filenames {
        render_str_slice(&language.filenames)
    } else {
        "&[]".to_string()
    };

    format!(
        "Language {{ id: {}, name: {}, extensions: {}, filenames: {} }}",
        language.id,
        string_literal(&language.name),
        render_str_slice(&language.extensions),
        filenames
    )
}

/// Render a `&[Language { .. }, ..]` slice for an index bucket
pub fn render_language_slice(languages: &[Language], config: &GeneratorConfig) -> String {
    let values: Vec<String> = languages
        .iter()
        .map(|language| render_language(language, config))
        .collect();

    format!("&[{}]", values.join(", "))
}

/// Render a `&["a", "b"]` slice preserving order
fn render_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
    format!("&[{}]", items.join(", "))
}

/// Quote a string as a Rust string literal
pub fn string_literal(value: &str) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown() -> Language {
        Language {
            id: 222,
            name: "Markdown".to_string(),
            extensions: vec!["md".to_string(), "markdown".to_string()],
            filenames: vec!["contents.lr".to_string()],
        }
    }

    #[test]
    fn renders_id_name_and_extensions_in_order() {
        let rendered = render_language(&markdown(), &GeneratorConfig::default());
        assert_eq!(
            rendered,
            r#"Language { id: 222, name: "Markdown", extensions: &["md", "markdown"], filenames: &[] }"#
        );
    }

    #[test]
    fn filenames_rendered_only_on_request() {
        let config = GeneratorConfig {
            render_filenames: true,
            ..GeneratorConfig::default()
        };
        let rendered = render_language(&markdown(), &config);
        assert!(rendered.ends_with(r#"filenames: &["contents.lr"] }"#));
    }

    #[test]
    fn escapes_string_literals() {
        assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(string_literal(r"C:\dir"), r#""C:\\dir""#);
        assert_eq!(string_literal("Nu"), r#""Nu""#);
    }

    #[test]
    fn empty_extensions_render_empty_slice() {
        let language = Language {
            id: 1,
            name: "Text".to_string(),
            ..Language::default()
        };
        let rendered = render_language(&language, &GeneratorConfig::default());
        assert!(rendered.contains("extensions: &[]"));
    }

    #[test]
    fn struct_declares_all_four_fields() {
        let code = generate_language_struct(&GeneratorConfig::default());
        assert!(code.contains("pub struct Language {"));
        for field in ["pub id: u64", "pub name:", "pub extensions:", "pub filenames:"] {
            assert!(code.contains(field), "missing {field}");
        }
    }
}
