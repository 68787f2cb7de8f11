//! Converter configuration.
//!
//! Every value has a default matching the uclid syntax file this tool was
//! written for, so a run without a config file needs no flags. A config file
//! (`.json`, `.yaml` or `.yml`) may override any subset of fields.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emit::StyleTable;

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error during read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing error.
    #[error("YAML error in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Unrecognised config file extension.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Ids of the declarations holding the comment delimiters.
///
/// `None` omits the corresponding metadata properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentIds {
    /// Region whose start/end patterns are the block comment delimiters.
    pub block: Option<String>,
    /// Match whose pattern is the line comment start.
    pub line: Option<String>,
}

impl CommentIds {
    pub fn none() -> Self {
        Self {
            block: None,
            line: None,
        }
    }
}

impl Default for CommentIds {
    fn default() -> Self {
        Self {
            block: Some("ucl4MultilineComment".to_string()),
            line: Some("ucl4TrailingComment".to_string()),
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Vim syntax file to read.
    pub input: PathBuf,
    /// Language file to write.
    pub output: PathBuf,
    /// Author credited alongside the syntax file's maintainer.
    pub co_maintainer: String,
    /// Highlight group name to GtkSourceView category, in output order.
    pub styles: StyleTable,
    /// Declaration ids never emitted as contexts.
    pub skip: Vec<String>,
    pub comments: CommentIds,
    pub mimetype: String,
    /// `_section` attribute of the `<language>` element.
    pub section: String,
    /// Tool name recorded in the provenance comment.
    pub tool: String,
    /// Copyright year; the current year when unset.
    pub year: Option<i32>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("uclid.vim"),
            output: PathBuf::from("uclid.lang.gen"),
            co_maintainer: "Kevin Läufer <laeufer@eecs.berkeley.edu>".to_string(),
            styles: StyleTable::default(),
            skip: vec!["ucl4Identifier".to_string()],
            comments: CommentIds::default(),
            mimetype: "text/plain".to_string(),
            section: "Source".to_string(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            year: None,
        }
    }
}

impl ConverterConfig {
    /// Load a config file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn skip_set(&self) -> HashSet<&str> {
        self.skip.iter().map(String::as_str).collect()
    }

    /// Copyright year, falling back to the current local year.
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Authors line: the fixed co-maintainer and the file's maintainer.
    pub fn authors(&self, maintainer: &str) -> String {
        format!("{} and {}", self.co_maintainer, maintainer)
    }
}
