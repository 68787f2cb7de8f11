//! Error types for language-file emission.

use thiserror::Error;

use crate::syntax::{DeclarationKind, MetaKey};

/// Errors that can occur while emitting a GtkSourceView language file.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A style link chain ends in a name that is neither a link nor a known style.
    #[error("style for `{id}` does not resolve: `{target}` is neither a link nor a known style")]
    UnresolvedStyle { id: String, target: String },

    /// A style link chain loops back on itself.
    #[error("style links for `{id}` form a cycle: {}", .chain.join(" -> "))]
    StyleCycle { id: String, chain: Vec<String> },

    /// A declaration required by the metadata block is absent.
    #[error("declaration `{id}` not found")]
    MissingDeclaration { id: String },

    /// A declaration required by the metadata block has the wrong kind.
    #[error("declaration `{id}` is a {found}, expected a {expected}")]
    UnexpectedDeclaration {
        id: String,
        expected: DeclarationKind,
        found: DeclarationKind,
    },

    /// A metadata comment required by the header is absent.
    #[error("missing metadata: {key}")]
    MissingMetadata { key: MetaKey },

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),
}

impl EmitError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing declaration error.
    pub fn missing_declaration(id: impl Into<String>) -> Self {
        Self::MissingDeclaration { id: id.into() }
    }
}
