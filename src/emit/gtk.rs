//! GtkSourceView 2.0 language file emitter.
//!
//! See <https://developer.gnome.org/gtksourceview/stable/lang-tutorial.html>.
//!
//! ## Document Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!-- license -->
//! <!-- provenance -->
//! <language id="uclid" _name="Uclid" version="2.0" _section="Source">
//!   <metadata>...</metadata>
//!   <styles>...</styles>
//!   <definitions>
//!     <context id="ucl4Keyword" style-ref="Keyword">...</context>
//!     <context id="uclid">
//!       <include><context ref="ucl4Keyword"/></include>
//!     </context>
//!   </definitions>
//! </language>
//! ```

use std::collections::HashSet;
use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::pattern::{clean_match_pattern, escape_slashes, is_renderable, strip_backslashes};
use super::styles::StyleResolver;
use super::template;
use super::EmitError;
use crate::config::ConverterConfig;
use crate::syntax::{
    Declaration, DeclarationKind, DeclarationVisitor, DisplayOption, MetaKey, SyntaxFile, walk,
};

/// Outcome of one emission pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emission {
    /// Context ids written, in output order. The language context includes these.
    pub contexts: Vec<String>,
    /// Match ids left out because their cleaned pattern still contains `<`.
    pub skipped: Vec<String>,
}

/// Emits a GtkSourceView language definition from a parsed vim syntax file.
pub struct GtkSourceEmitter<'a> {
    file: &'a SyntaxFile,
    config: &'a ConverterConfig,
    /// Declarations rendered as contexts: no links, nothing in the skip set.
    declarations: Vec<&'a Declaration>,
    resolver: StyleResolver<'a>,
    source_name: String,
}

impl<'a> GtkSourceEmitter<'a> {
    pub fn new(file: &'a SyntaxFile, config: &'a ConverterConfig) -> Self {
        let skip: HashSet<&str> = config.skip_set();
        let declarations = file
            .declarations
            .iter()
            .filter(|d| !d.is_link() && !d.id().is_some_and(|id| skip.contains(id)))
            .collect();
        let source_name = config
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            config,
            declarations,
            resolver: StyleResolver::from_file(file, &config.styles),
            source_name,
        }
    }

    /// Override the source file name recorded in the provenance comment.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Declarations that will be considered for context emission, in order.
    pub fn renderable(&self) -> &[&'a Declaration] {
        &self.declarations
    }

    pub fn resolver(&self) -> &StyleResolver<'a> {
        &self.resolver
    }

    /// Render the document into a string.
    pub fn render(&self) -> Result<(String, Emission), EmitError> {
        let mut buffer = Cursor::new(Vec::new());
        let emission = self.emit(&mut buffer)?;
        let text = String::from_utf8(buffer.into_inner())
            .map_err(|e| EmitError::xml(format!("Invalid UTF-8: {e}")))?;
        Ok((text, emission))
    }

    /// Write the complete document to `out`.
    pub fn emit<W: Write>(&self, out: W) -> Result<Emission, EmitError> {
        let language = self.required(MetaKey::Language)?;
        let maintainer = self.required(MetaKey::Maintainer)?;
        let globs = self.required(MetaKey::Filenames)?;

        let mut writer = Writer::new_with_indent(out, b' ', 2);

        self.write_header(&mut writer, language, maintainer)?;
        self.write_metadata(&mut writer, globs)?;
        self.write_styles(&mut writer)?;

        start(&mut writer, BytesStart::new("definitions"))?;
        let mut contexts = ContextWriter {
            writer: &mut writer,
            resolver: &self.resolver,
            emission: Emission::default(),
        };
        walk(&mut contexts, self.declarations.iter().copied())?;
        let emission = contexts.emission;
        write_language_context(&mut writer, language, &emission.contexts)?;
        end(&mut writer, "definitions")?;
        end(&mut writer, "language")?;

        writer
            .get_mut()
            .write_all(b"\n")
            .map_err(|e| EmitError::xml(format!("Write error: {e}")))?;

        tracing::debug!(
            "emitted {} contexts, skipped {}",
            emission.contexts.len(),
            emission.skipped.len()
        );
        Ok(emission)
    }

    fn required(&self, key: MetaKey) -> Result<&'a str, EmitError> {
        self.file
            .metadata
            .get(key)
            .ok_or(EmitError::MissingMetadata { key })
    }

    /// Look up a renderable declaration by id.
    fn declaration(&self, id: &str) -> Result<&'a Declaration, EmitError> {
        self.declarations
            .iter()
            .copied()
            .find(|d| d.id() == Some(id))
            .ok_or_else(|| EmitError::missing_declaration(id))
    }

    fn write_header<W: Write>(
        &self,
        writer: &mut Writer<W>,
        language: &str,
        maintainer: &str,
    ) -> Result<(), EmitError> {
        write(writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let license =
            template::license_comment(&self.config.authors(maintainer), self.config.year());
        write(writer, Event::Comment(BytesText::from_escaped(license)))?;

        let provenance = template::generator_comment(&self.source_name, &self.config.tool);
        write(writer, Event::Comment(BytesText::from_escaped(provenance)))?;

        let display_name = template::display_name(language);
        let mut root = BytesStart::new("language");
        root.push_attribute(("id", language));
        root.push_attribute(("_name", display_name.as_str()));
        root.push_attribute(("version", "2.0"));
        root.push_attribute(("_section", self.config.section.as_str()));
        start(writer, root)
    }

    fn write_metadata<W: Write>(
        &self,
        writer: &mut Writer<W>,
        globs: &str,
    ) -> Result<(), EmitError> {
        let mut properties: Vec<(&str, String)> = vec![
            ("globs", globs.to_string()),
            ("mimetypes", self.config.mimetype.clone()),
        ];

        if let Some(id) = &self.config.comments.line {
            match self.declaration(id)? {
                Declaration::Match { pattern, .. } => {
                    properties.push(("line-comment-start", pattern.clone()));
                }
                other => return Err(unexpected(id, DeclarationKind::Match, other)),
            }
        }

        if let Some(id) = &self.config.comments.block {
            match self.declaration(id)? {
                Declaration::Region { start, end, .. } => {
                    properties.push(("block-comment-start", strip_backslashes(start)));
                    properties.push(("block-comment-end", strip_backslashes(end)));
                }
                other => return Err(unexpected(id, DeclarationKind::Region, other)),
            }
        }

        start(writer, BytesStart::new("metadata"))?;
        for (name, value) in &properties {
            let mut property = BytesStart::new("property");
            property.push_attribute(("name", *name));
            text_element(writer, property, value)?;
        }
        end(writer, "metadata")
    }

    fn write_styles<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), EmitError> {
        start(writer, BytesStart::new("styles"))?;
        for (name, category) in self.config.styles.iter() {
            let map_to = format!("def:{category}");
            let mut style = BytesStart::new("style");
            style.push_attribute(("id", name));
            style.push_attribute(("name", name));
            style.push_attribute(("map-to", map_to.as_str()));
            write(writer, Event::Empty(style))?;
        }
        end(writer, "styles")
    }
}

/// Writes one `<context>` per declaration into the definitions block.
struct ContextWriter<'w, 'a, W: Write> {
    writer: &'w mut Writer<W>,
    resolver: &'w StyleResolver<'a>,
    emission: Emission,
}

impl<W: Write> ContextWriter<'_, '_, W> {
    fn start_context(&mut self, id: &str) -> Result<(), EmitError> {
        let style = self.resolver.resolve(id)?;
        let mut context = BytesStart::new("context");
        context.push_attribute(("id", id));
        context.push_attribute(("style-ref", style.name));
        start(self.writer, context)?;
        self.emission.contexts.push(id.to_string());
        Ok(())
    }

    fn end_context(&mut self) -> Result<(), EmitError> {
        end(self.writer, "context")
    }
}

impl<W: Write> DeclarationVisitor for ContextWriter<'_, '_, W> {
    type Error = EmitError;

    fn visit_keyword(&mut self, id: &str, words: &[String]) -> Result<(), EmitError> {
        self.start_context(id)?;
        for word in words {
            text_element(self.writer, BytesStart::new("keyword"), word)?;
        }
        self.end_context()
    }

    fn visit_match(
        &mut self,
        id: &str,
        pattern: &str,
        _options: &[DisplayOption],
    ) -> Result<(), EmitError> {
        let cleaned = clean_match_pattern(pattern);
        tracing::info!("{pattern} --> {cleaned}");
        if !is_renderable(&cleaned) {
            tracing::warn!("skipping context {id}: pattern {cleaned} contains '<'");
            self.emission.skipped.push(id.to_string());
            return Ok(());
        }

        self.start_context(id)?;
        let mut element = BytesStart::new("match");
        element.push_attribute(("extended", "true"));
        text_element(self.writer, element, &cleaned)?;
        self.end_context()
    }

    fn visit_region(
        &mut self,
        id: &str,
        start: &str,
        end: &str,
        _options: &[DisplayOption],
    ) -> Result<(), EmitError> {
        let start_pattern = escape_slashes(start);
        let end_pattern = escape_slashes(end);
        self.start_context(id)?;
        text_element(self.writer, BytesStart::new("start"), &start_pattern)?;
        text_element(self.writer, BytesStart::new("end"), &end_pattern)?;
        self.end_context()
    }
}

/// The top-level context named after the language, including every emitted context.
fn write_language_context<W: Write>(
    writer: &mut Writer<W>,
    language: &str,
    contexts: &[String],
) -> Result<(), EmitError> {
    let mut context = BytesStart::new("context");
    context.push_attribute(("id", language));
    start(writer, context)?;
    start(writer, BytesStart::new("include"))?;
    for id in contexts {
        let mut reference = BytesStart::new("context");
        reference.push_attribute(("ref", id.as_str()));
        write(writer, Event::Empty(reference))?;
    }
    end(writer, "include")?;
    end(writer, "context")
}

fn unexpected(id: &str, expected: DeclarationKind, found: &Declaration) -> EmitError {
    EmitError::UnexpectedDeclaration {
        id: id.to_string(),
        expected,
        found: found.kind(),
    }
}

// ============================================================================
// WRITER HELPERS
// ============================================================================

fn write<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), EmitError> {
    writer
        .write_event(event)
        .map_err(|e| EmitError::xml(format!("Write error: {e}")))
}

fn start<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<(), EmitError> {
    write(writer, Event::Start(element))
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), EmitError> {
    write(writer, Event::End(BytesEnd::new(name)))
}

/// `<name attrs>text</name>` on a single line.
fn text_element<W: Write>(
    writer: &mut Writer<W>,
    element: BytesStart<'_>,
    text: &str,
) -> Result<(), EmitError> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    start(writer, element)?;
    write(writer, Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    end(writer, &name)
}
