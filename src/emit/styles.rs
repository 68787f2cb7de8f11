//! Style categories and link-chain resolution.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::EmitError;
use crate::syntax::SyntaxFile;

/// Ordered mapping from vim highlight group names to GtkSourceView
/// default style categories (`def:<category>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable(IndexMap<String, String>);

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Add or replace an entry, keeping its original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, category: impl Into<String>) {
        self.0.insert(name.into(), category.into());
    }

    /// Builder-style [`StyleTable::insert`].
    pub fn with(mut self, name: impl Into<String>, category: impl Into<String>) -> Self {
        self.insert(name, category);
        self
    }

    pub fn category(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn entry(&self, name: &str) -> Option<StyleRef<'_>> {
        self.0
            .get_key_value(name)
            .map(|(name, category)| StyleRef { name, category })
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
            .with("comment", "comment")
            .with("Identifier", "type")
            .with("Type", "type")
            .with("Keyword", "keyword")
            .with("Conditional", "keyword")
            .with("StorageClass", "keyword")
            .with("Constant", "constant")
            .with("Define", "preprocessor")
            .with("Special", "special-constant")
            .with("Number", "decimal")
    }
}

/// A resolved style: the table entry a declaration renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRef<'a> {
    /// Style id as declared in the `<styles>` block.
    pub name: &'a str,
    /// GtkSourceView default category, without the `def:` prefix.
    pub category: &'a str,
}

/// Resolves declaration ids to styles by following `hi def link` chains.
#[derive(Debug)]
pub struct StyleResolver<'a> {
    links: HashMap<&'a str, &'a str>,
    styles: &'a StyleTable,
}

impl<'a> StyleResolver<'a> {
    pub fn new(
        links: impl IntoIterator<Item = (&'a str, &'a str)>,
        styles: &'a StyleTable,
    ) -> Self {
        Self {
            links: links.into_iter().collect(),
            styles,
        }
    }

    /// Build from the link declarations of a parsed file.
    pub fn from_file(file: &'a SyntaxFile, styles: &'a StyleTable) -> Self {
        Self::new(file.links(), styles)
    }

    /// Target of the link declared for `id`, if any.
    pub fn link_target(&self, id: &str) -> Option<&'a str> {
        self.links.get(id).copied()
    }

    /// Follow links from `id` until a style table entry is reached.
    ///
    /// Links take precedence over table entries of the same name. A name that
    /// is already a table entry and not a link resolves to itself.
    pub fn resolve(&self, id: &str) -> Result<StyleRef<'a>, EmitError> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut chain: Vec<&str> = Vec::new();
        let mut current = id;

        loop {
            if let Some(target) = self.link_target(current) {
                if !visited.insert(current) {
                    chain.push(current);
                    return Err(EmitError::StyleCycle {
                        id: id.to_string(),
                        chain: chain.into_iter().map(str::to_string).collect(),
                    });
                }
                chain.push(current);
                current = target;
                continue;
            }

            return self.styles.entry(current).ok_or_else(|| EmitError::UnresolvedStyle {
                id: id.to_string(),
                target: current.to_string(),
            });
        }
    }
}
