//! Error types for the vim syntax parser.

use thiserror::Error;

/// Why a single line could not be turned into a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// `syn match` argument is not a double-quote delimited string.
    #[error("malformed match argument, expected a double-quoted pattern: {args}")]
    MalformedMatch { args: String },

    /// `syn region` argument is not `start="..." end="..."`.
    #[error(r#"malformed region argument, expected start="..." end="...": {args}"#)]
    MalformedRegion { args: String },

    /// A `syn` command other than keyword, match or region.
    #[error("unsupported syn command: {command}")]
    UnsupportedCommand { command: String },
}

/// A fatal parse error located at a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
