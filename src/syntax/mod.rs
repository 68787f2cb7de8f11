//! Vim syntax file parsing.
//!
//! Turns the lines of a hand-written `.vim` syntax definition into typed
//! [`Declaration`]s plus the [`Metadata`] found in its comment header.

pub mod declaration;
mod error;
pub mod parser;
pub mod visitor;

pub use declaration::{
    Declaration, DeclarationKind, DisplayOption, MetaKey, Metadata, SyntaxFile,
};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_line, parse_lines, parse_str, parse_syntax_command};
pub use visitor::{DeclarationVisitor, walk};
