//! Line-based parser for vim syntax files.
//!
//! Each line is classified independently against three shapes, tried in order:
//! 1. metadata comment: `" Language: uclid`
//! 2. syntax command: `syn keyword|match|region <id> <args>`
//! 3. style link: `hi def link <id> <style>`
//!
//! Anything else is not a declaration and yields `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::declaration::{Declaration, DisplayOption, MetaKey, SyntaxFile};
use super::error::{ParseError, ParseErrorKind};

static METADATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^" (Language|Maintainer|Filenames): (.+)$"#).unwrap());

static SYN_COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^syn (keyword|match|region)\s+(\w+)\s+(.+)$").unwrap());

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^hi def link (\w+)\s+(\w+)$").unwrap());

static OPTIONS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(display)\s+(.+)$").unwrap());

static REGION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^start="([^"]+)"\s+end="([^"]+)"$"#).unwrap());

/// Classify a single line.
///
/// Returns `Ok(None)` for lines that are not declarations.
pub fn parse_line(line: &str) -> Result<Option<Declaration>, ParseErrorKind> {
    if let Some(caps) = METADATA_RE.captures(line) {
        let Some(key) = MetaKey::from_source(&caps[1]) else {
            return Ok(None);
        };
        return Ok(Some(Declaration::Metadata {
            key,
            value: caps[2].trim().to_string(),
        }));
    }

    if let Some(caps) = SYN_COMMAND_RE.captures(line) {
        return parse_syntax_command(&caps[1], &caps[2], &caps[3]).map(Some);
    }

    if let Some(caps) = LINK_RE.captures(line) {
        return Ok(Some(Declaration::Link {
            id: caps[1].to_string(),
            style: caps[2].to_string(),
        }));
    }

    Ok(None)
}

/// Build a declaration from the pieces of a `syn <command> <id> <args>` line.
pub fn parse_syntax_command(
    command: &str,
    id: &str,
    args: &str,
) -> Result<Declaration, ParseErrorKind> {
    let id = id.to_string();

    if command == "keyword" {
        let words = args
            .split(' ')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(Declaration::Keyword { id, words });
    }

    let (options, args) = split_display_option(args);

    match command {
        "match" => {
            if !(args.starts_with('"') && args.ends_with('"')) {
                return Err(ParseErrorKind::MalformedMatch {
                    args: args.to_string(),
                });
            }
            // A lone quote is both the first and last character: empty pattern.
            let pattern = args.get(1..args.len() - 1).unwrap_or("");
            Ok(Declaration::Match {
                id,
                pattern: pattern.to_string(),
                options,
            })
        }
        "region" => {
            let caps = REGION_RE
                .captures(args)
                .ok_or_else(|| ParseErrorKind::MalformedRegion {
                    args: args.to_string(),
                })?;
            Ok(Declaration::Region {
                id,
                start: caps[1].to_string(),
                end: caps[2].to_string(),
                options,
            })
        }
        other => Err(ParseErrorKind::UnsupportedCommand {
            command: other.to_string(),
        }),
    }
}

/// Strip a leading `display` token, returning the recorded options and the rest.
fn split_display_option(args: &str) -> (Vec<DisplayOption>, &str) {
    let Some(caps) = OPTIONS_RE.captures(args) else {
        return (Vec::new(), args);
    };
    let options = DisplayOption::from_token(caps[1].trim()).into_iter().collect();
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());
    (options, rest)
}

/// Parse a sequence of lines into metadata and ordered declarations.
///
/// The first malformed line aborts the parse.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<SyntaxFile, ParseError> {
    let mut declarations = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let declaration = parse_line(line).map_err(|kind| ParseError::new(index + 1, kind))?;
        if let Some(declaration) = declaration {
            tracing::info!("{}: {:?}", declaration.kind(), declaration);
            declarations.push(declaration);
        }
    }

    Ok(SyntaxFile::from_declarations(declarations))
}

/// Parse the full text of a vim syntax file.
pub fn parse_str(source: &str) -> Result<SyntaxFile, ParseError> {
    parse_lines(source.lines())
}
