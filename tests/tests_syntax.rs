//! Parser behavior against whole lines, through the public API.

use rstest::rstest;
use vim2lang::syntax::{Declaration, DeclarationKind, MetaKey, parse_line, parse_str};
use vim2lang::{ParseErrorKind, StyleResolver, StyleTable};

// ============================================================================
// Keyword word lists
// ============================================================================

#[rstest]
#[case("module")]
#[case("module init next")]
#[case("if else case esac then")]
fn test_keyword_word_count(#[case] remainder: &str) {
    let line = format!("syn keyword ucl4Kw {remainder}");
    let Some(Declaration::Keyword { words, .. }) = parse_line(&line).unwrap() else {
        panic!("expected keyword for {line}");
    };
    let expected: Vec<_> = remainder.split_whitespace().collect();
    assert_eq!(words, expected);
}

// ============================================================================
// Match and region argument shapes
// ============================================================================

#[rstest]
#[case(r#"syn match m "abc""#, true)]
#[case(r#"syn match m display "abc""#, true)]
#[case(r#"syn match m abc""#, false)]
#[case(r#"syn match m "abc"#, false)]
#[case(r#"syn match m display abc"#, false)]
#[case(r#"syn match m ""#, true)]
fn test_match_quoting(#[case] line: &str, #[case] ok: bool) {
    let result = parse_line(line);
    if ok {
        assert!(matches!(result, Ok(Some(Declaration::Match { .. }))), "{line}");
    } else {
        assert!(
            matches!(result, Err(ParseErrorKind::MalformedMatch { .. })),
            "{line}"
        );
    }
}

#[rstest]
#[case(r#"syn region r start="A" end="B""#, Some(("A", "B")))]
#[case(r#"syn region r start="/\*"   end="\*/""#, Some((r"/\*", r"\*/")))]
#[case(r#"syn region r start="A""#, None)]
#[case(r#"syn region r start="A" skip="x" end="B""#, None)]
#[case(r#"syn region r start="" end="B""#, None)]
fn test_region_shape(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
    match (parse_line(line), expected) {
        (Ok(Some(Declaration::Region { start, end, .. })), Some((s, e))) => {
            assert_eq!(start, s);
            assert_eq!(end, e);
        }
        (Err(ParseErrorKind::MalformedRegion { .. }), None) => {}
        (other, _) => panic!("unexpected result for {line}: {other:?}"),
    }
}

// ============================================================================
// Whole files
// ============================================================================

#[test]
fn test_declaration_order_preserved() {
    let file = parse_str(
        "syn match b \"x\"\n\" Language: l\nsyn keyword a y\nhi def link a Keyword\nsyn region c start=\"1\" end=\"2\"\n",
    )
    .unwrap();
    let kinds: Vec<_> = file.declarations.iter().map(Declaration::kind).collect();
    assert_eq!(
        kinds,
        [
            DeclarationKind::Match,
            DeclarationKind::Keyword,
            DeclarationKind::Link,
            DeclarationKind::Region
        ]
    );
    assert_eq!(file.metadata.get(MetaKey::Language), Some("l"));
}

#[test]
fn test_resolution_over_parsed_links() {
    let file = parse_str("hi def link a b\nhi def link b Number\n").unwrap();
    let styles = StyleTable::default();
    let resolver = StyleResolver::from_file(&file, &styles);

    let direct = resolver.resolve("b").unwrap();
    let chained = resolver.resolve("a").unwrap();
    assert_eq!(direct, chained);
    assert_eq!(chained.category, "decimal");
    assert_eq!(resolver.resolve("Number").unwrap(), direct);
}
