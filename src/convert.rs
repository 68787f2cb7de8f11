//! End-to-end conversion: load lines → parse → emit → write.

use std::path::{Path, PathBuf};

use crate::config::ConverterConfig;
use crate::emit::{Emission, GtkSourceEmitter};
use crate::error::Error;
use crate::syntax::parse_str;

/// Result of a successful file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Where the language file was written.
    pub output: PathBuf,
    pub emission: Emission,
}

/// Convert the text of a vim syntax file into a language file document.
///
/// `source_path` is only used for the provenance comment and error messages.
pub fn convert_str(
    source: &str,
    source_path: &Path,
    config: &ConverterConfig,
) -> Result<(String, Emission), Error> {
    let file = parse_str(source).map_err(|source| Error::Parse {
        path: source_path.to_path_buf(),
        source,
    })?;

    let source_name = source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let rendered = GtkSourceEmitter::new(&file, config)
        .with_source_name(source_name)
        .render()?;
    Ok(rendered)
}

/// Render the document for `config.input` without writing it.
pub fn render_file(config: &ConverterConfig) -> Result<(String, Emission), Error> {
    let input = &config.input;
    let source = std::fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    tracing::debug!("read {} bytes from {}", source.len(), input.display());
    convert_str(&source, input, config)
}

/// Convert `config.input` and write the result to `config.output`.
///
/// The document is rendered in memory first, so a failed conversion never
/// leaves a partially written output file.
pub fn convert_file(config: &ConverterConfig) -> Result<Conversion, Error> {
    let (document, emission) = render_file(config)?;

    let output = &config.output;
    std::fs::write(output, &document).map_err(|e| Error::io(output, e))?;
    tracing::debug!("wrote {} bytes to {}", document.len(), output.display());

    Ok(Conversion {
        output: output.clone(),
        emission,
    })
}
