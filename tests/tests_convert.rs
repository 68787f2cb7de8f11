//! End-to-end conversion tests: vim syntax text in, language file out.

#[path = "helpers/source_fixtures.rs"]
mod source_fixtures;

use std::path::Path;

use source_fixtures::{CYCLIC_VIM, DEMO_VIM, MALFORMED_VIM, UCLID_VIM};
use vim2lang::{
    CommentIds, ConverterConfig, EmitError, Error, ParseErrorKind, convert_file, convert_str,
};

fn demo_config() -> ConverterConfig {
    ConverterConfig {
        comments: CommentIds::none(),
        year: Some(2018),
        ..Default::default()
    }
}

fn uclid_config() -> ConverterConfig {
    ConverterConfig {
        year: Some(2018),
        ..Default::default()
    }
}

#[test]
fn test_demo_document() {
    let (xml, emission) = convert_str(DEMO_VIM, Path::new("demo.vim"), &demo_config()).unwrap();

    assert!(xml.contains(r#"<property name="globs">*.demo</property>"#));
    assert!(xml.contains(r#"<style id="Keyword" name="Keyword" map-to="def:keyword"/>"#));
    assert!(xml.contains(r#"<context id="kw1" style-ref="Keyword">"#));
    assert!(xml.contains("<keyword>if</keyword>"));
    assert!(xml.contains("<keyword>else</keyword>"));
    assert!(xml.contains(r#"<context id="demo">"#));
    assert!(xml.contains(r#"<context ref="kw1"/>"#));
    assert!(xml.contains("generated from demo.vim using vim2lang"));
    assert_eq!(emission.contexts, ["kw1"]);
}

#[test]
fn test_uclid_document() {
    let (xml, emission) =
        convert_str(UCLID_VIM, Path::new("/some/dir/uclid.vim"), &uclid_config()).unwrap();

    assert!(xml.contains(r#"<language id="uclid" _name="Uclid" version="2.0" _section="Source">"#));
    assert!(xml.contains("generated from uclid.vim using"));
    assert!(xml.contains(r#"<property name="globs">*.ucl</property>"#));
    assert!(xml.contains(r#"<property name="line-comment-start">//.*</property>"#));
    assert!(xml.contains(r#"<property name="block-comment-start">/*</property>"#));
    assert!(xml.contains(r#"<property name="block-comment-end">*/</property>"#));

    // Two-hop chains land on the table entry.
    assert!(xml.contains(r#"<context id="ucl4BVType" style-ref="Type">"#));
    assert!(xml.contains(r#"<context id="ucl4TrailingComment" style-ref="comment">"#));
    assert!(xml.contains(r#"<match extended="true">bv\d+</match>"#));
    assert!(xml.contains(r"<start>\/\*</start>"));
    assert!(xml.contains(r"<end>\*\/</end>"));

    assert!(!xml.contains("ucl4Identifier"));
    assert!(!xml.contains("ucl4Generic"));
    assert_eq!(emission.skipped, ["ucl4Generic"]);
    assert_eq!(
        emission.contexts,
        [
            "ucl4Decl",
            "ucl4Conditional",
            "ucl4Type",
            "ucl4Constant",
            "ucl4Number",
            "ucl4BVType",
            "ucl4TrailingComment",
            "ucl4MultilineComment",
            "ucl4String"
        ]
    );
}

#[test]
fn test_include_list_matches_contexts() {
    let (xml, emission) = convert_str(UCLID_VIM, Path::new("uclid.vim"), &uclid_config()).unwrap();
    let refs: Vec<String> = xml
        .lines()
        .filter_map(|line| line.trim().strip_prefix(r#"<context ref=""#))
        .map(|rest| rest.trim_end_matches(r#""/>"#).to_string())
        .collect();
    assert_eq!(refs, emission.contexts);
}

#[test]
fn test_malformed_input_aborts() {
    let err = convert_str(MALFORMED_VIM, Path::new("bad.vim"), &demo_config()).unwrap_err();
    match err {
        Error::Parse { path, source } => {
            assert_eq!(path, Path::new("bad.vim"));
            assert_eq!(source.line, 5);
            assert!(matches!(source.kind, ParseErrorKind::MalformedMatch { .. }));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_cycle_aborts() {
    let err = convert_str(CYCLIC_VIM, Path::new("loop.vim"), &demo_config()).unwrap_err();
    assert!(matches!(err, Error::Emit(EmitError::StyleCycle { .. })));
}

#[test]
fn test_missing_comment_ids_abort_with_defaults() {
    let err = convert_str(DEMO_VIM, Path::new("demo.vim"), &uclid_config()).unwrap_err();
    assert!(matches!(
        err,
        Error::Emit(EmitError::MissingDeclaration { .. })
    ));
}

#[test]
fn test_convert_file_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("uclid.vim");
    let output = dir.path().join("uclid.lang.gen");
    std::fs::write(&input, UCLID_VIM).unwrap();

    let config = ConverterConfig {
        input: input.clone(),
        output: output.clone(),
        ..uclid_config()
    };
    let conversion = convert_file(&config).unwrap();

    assert_eq!(conversion.output, output);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(written.ends_with("</language>\n"));
    assert_eq!(conversion.emission.contexts.len(), 9);
}

#[test]
fn test_convert_file_leaves_no_output_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.vim");
    let output = dir.path().join("bad.lang");
    std::fs::write(&input, MALFORMED_VIM).unwrap();

    let config = ConverterConfig {
        input,
        output: output.clone(),
        ..demo_config()
    };
    assert!(convert_file(&config).is_err());
    assert!(!output.exists());
}

#[test]
fn test_convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConverterConfig {
        input: dir.path().join("absent.vim"),
        output: dir.path().join("absent.lang"),
        ..demo_config()
    };
    assert!(matches!(convert_file(&config), Err(Error::Io { .. })));
}
