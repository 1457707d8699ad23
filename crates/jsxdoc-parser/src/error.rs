//! Parser error types for jsxdoc-parser.

/// Errors that can occur while turning a document into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Position {line}:{column} is outside the document")]
    PositionOutOfRange { line: u32, column: u32 },
}
