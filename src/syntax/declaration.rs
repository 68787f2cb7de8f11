//! Declaration records produced by the vim syntax parser.

use std::fmt;

/// Kind tag of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Keyword,
    Match,
    Region,
    Link,
    Metadata,
}

impl DeclarationKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Match => "match",
            Self::Region => "region",
            Self::Link => "link",
            Self::Metadata => "metadata",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering option that may prefix a `match` or `region` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayOption {
    Display,
}

impl DisplayOption {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "display" => Some(Self::Display),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Display => "display",
        }
    }
}

/// Key of a metadata comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Language,
    Maintainer,
    Filenames,
}

impl MetaKey {
    pub const ALL: [MetaKey; 3] = [Self::Language, Self::Maintainer, Self::Filenames];

    /// Match the capitalised key as written in the source comment.
    pub fn from_source(key: &str) -> Option<Self> {
        match key {
            "Language" => Some(Self::Language),
            "Maintainer" => Some(Self::Maintainer),
            "Filenames" => Some(Self::Filenames),
            _ => None,
        }
    }

    /// Lower-cased storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Maintainer => "maintainer",
            Self::Filenames => "filenames",
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed unit of a vim syntax file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `syn keyword <id> <word> <word> ...`
    Keyword { id: String, words: Vec<String> },
    /// `syn match <id> [display] "<pattern>"`
    Match {
        id: String,
        pattern: String,
        options: Vec<DisplayOption>,
    },
    /// `syn region <id> [display] start="<start>" end="<end>"`
    Region {
        id: String,
        start: String,
        end: String,
        options: Vec<DisplayOption>,
    },
    /// `hi def link <id> <style>`
    Link { id: String, style: String },
    /// `" <Key>: <value>`
    Metadata { key: MetaKey, value: String },
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Keyword { .. } => DeclarationKind::Keyword,
            Self::Match { .. } => DeclarationKind::Match,
            Self::Region { .. } => DeclarationKind::Region,
            Self::Link { .. } => DeclarationKind::Link,
            Self::Metadata { .. } => DeclarationKind::Metadata,
        }
    }

    /// Identifier of the declaration; metadata has none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Keyword { id, .. }
            | Self::Match { id, .. }
            | Self::Region { id, .. }
            | Self::Link { id, .. } => Some(id),
            Self::Metadata { .. } => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }

    /// Display options attached to a match or region.
    pub fn options(&self) -> &[DisplayOption] {
        match self {
            Self::Match { options, .. } | Self::Region { options, .. } => options,
            _ => &[],
        }
    }
}

/// Metadata collected from the comment header of a syntax file.
///
/// Duplicate keys keep the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub language: Option<String>,
    pub maintainer: Option<String>,
    pub filenames: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: MetaKey) -> Option<&str> {
        match key {
            MetaKey::Language => self.language.as_deref(),
            MetaKey::Maintainer => self.maintainer.as_deref(),
            MetaKey::Filenames => self.filenames.as_deref(),
        }
    }

    pub fn set(&mut self, key: MetaKey, value: impl Into<String>) {
        let slot = match key {
            MetaKey::Language => &mut self.language,
            MetaKey::Maintainer => &mut self.maintainer,
            MetaKey::Filenames => &mut self.filenames,
        };
        *slot = Some(value.into());
    }

    /// Builder-style setter used by fixtures and tests.
    pub fn with(mut self, key: MetaKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        MetaKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

/// A parsed syntax file: metadata plus the ordered non-metadata declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxFile {
    pub metadata: Metadata,
    pub declarations: Vec<Declaration>,
}

impl SyntaxFile {
    /// Split a flat declaration sequence into metadata and the remaining
    /// declarations, preserving relative order.
    pub fn from_declarations(all: impl IntoIterator<Item = Declaration>) -> Self {
        let mut file = Self::default();
        for declaration in all {
            match declaration {
                Declaration::Metadata { key, value } => file.metadata.set(key, value),
                other => file.declarations.push(other),
            }
        }
        file
    }

    /// Find a non-link declaration by id.
    pub fn find(&self, id: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| !d.is_link() && d.id() == Some(id))
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Link { id, style } => Some((id.as_str(), style.as_str())),
            _ => None,
        })
    }
}
