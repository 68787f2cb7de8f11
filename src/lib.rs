//! # vim2lang
//!
//! Converts a hand-written vim syntax definition into a GtkSourceView 2.0
//! language definition file.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → Pipeline: read file, parse, emit, write
//!   ↓
//! emit      → GtkSourceEmitter, StyleTable, link-chain resolution
//!   ↓
//! syntax    → Declaration records, line parser, visitor
//!   ↓
//! config    → ConverterConfig (paths, styles, skip set, comment ids)
//! ```

// ============================================================================
// MODULES (dependency order: config → syntax → emit → convert)
// ============================================================================

/// Configuration: paths, style table, skip set, comment ids
pub mod config;

/// Syntax: vim syntax file parsing into declarations
pub mod syntax;

/// Emission: GtkSourceView language file writer
pub mod emit;

/// Pipeline: load → parse → emit → write
pub mod convert;

mod error;

pub use config::{CommentIds, ConfigError, ConverterConfig};
pub use convert::{Conversion, convert_file, convert_str, render_file};
pub use emit::{EmitError, Emission, GtkSourceEmitter, StyleResolver, StyleTable};
pub use error::Error;
pub use syntax::{Declaration, ParseError, ParseErrorKind, SyntaxFile, parse_str};
