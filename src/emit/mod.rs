//! GtkSourceView language file emission.
//!
//! ```text
//! SyntaxFile ──► GtkSourceEmitter ──► header
//!                     │               metadata   (globs, comment delimiters)
//!                     │               styles     (StyleTable, in order)
//!                     ▼               definitions
//!               StyleResolver           one <context> per declaration
//!               (link chains)           language context including them all
//! ```

mod error;
mod gtk;
pub mod pattern;
mod styles;
mod template;

pub use error::EmitError;
pub use gtk::{Emission, GtkSourceEmitter};
pub use pattern::{clean_match_pattern, escape_slashes, is_renderable};
pub use styles::{StyleRef, StyleResolver, StyleTable};
