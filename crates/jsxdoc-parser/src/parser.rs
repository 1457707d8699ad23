//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the JSX-capable grammar for a file path extension.
///
/// Returns `None` for extensions whose grammar cannot hold JSX. Plain `.ts`
/// is among them: `<Button>` there is a type assertion, not an element.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let (_, ext) = file_path.rsplit_once('.')?;
    match ext {
        "tsx" => Some(SupportLang::Tsx),
        "jsx" | "js" | "mjs" | "cjs" => Some(SupportLang::JavaScript),
        _ => None,
    }
}

/// Like [`detect_language`], but reports the offending extension.
///
/// # Errors
/// Returns [`ParserError::UnsupportedLanguage`] when no JSX grammar matches.
pub fn require_language(file_path: &str) -> Result<SupportLang, ParserError> {
    detect_language(file_path).ok_or_else(|| {
        let ext = file_path
            .rsplit_once('.')
            .map_or(file_path, |(_, ext)| ext);
        ParserError::UnsupportedLanguage(ext.to_string())
    })
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}
