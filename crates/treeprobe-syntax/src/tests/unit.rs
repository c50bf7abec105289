//! Unit tests for treeprobe-syntax against real grammars.

use rstest::{fixture, rstest};

use crate::{
    CompiledQuery, MAX_LEAF_CHARS, ParsedTree, Parser, SupportedLanguage, SyntaxEngine,
    matches_to_string, tree_to_string,
};

const GO_PROGRAM: &str = "package main\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n";

#[fixture]
fn go_parser() -> Parser {
    Parser::new(SupportedLanguage::Go).expect("go parser")
}

fn dump(parser: &mut Parser, source: &str) -> String {
    let tree = parser.parse(source.as_bytes()).expect("parse");
    tree_to_string(&tree.root(), tree.source()).expect("render")
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Returns the quoted text of a leaf line with escapes reversed.
fn leaf_text(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let is_leaf = trimmed.starts_with('"') || trimmed.ends_with("\")");
    if !is_leaf {
        return None;
    }
    let open = trimmed.find('"')?;
    let close = trimmed.rfind('"')?;
    let quoted = trimmed.get(open + 1..close)?;
    Some(quoted.replace("\\n", "\n").replace("\\t", "\t"))
}

// =============================================================================
// Tree Dump Properties
// =============================================================================

#[rstest]
fn leaves_in_order_cover_every_token(mut go_parser: Parser) {
    let rendered = dump(&mut go_parser, GO_PROGRAM);

    let leaves: String = rendered.lines().filter_map(leaf_text).collect();
    let strip = |text: &str| -> String { text.chars().filter(|c| !c.is_whitespace()).collect() };
    assert_eq!(strip(&leaves), strip(GO_PROGRAM));
}

#[rstest]
fn rendered_lines_never_contain_raw_control_characters(mut go_parser: Parser) {
    let rendered = dump(&mut go_parser, GO_PROGRAM);
    assert!(!rendered.contains('\t'), "raw tab leaked: {rendered}");
    let named_leaves = rendered
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with('(') && line.ends_with("\")"));
    for line in named_leaves {
        let shown = line
            .find('"')
            .and_then(|open| line.get(open + 1..line.len() - 2))
            .expect("quoted leaf text");
        assert!(shown.chars().count() <= MAX_LEAF_CHARS, "leaf too long: {line}");
    }
}

#[rstest]
fn branches_close_at_their_opening_indent(mut go_parser: Parser) {
    let rendered = dump(&mut go_parser, GO_PROGRAM);

    let mut open: Vec<usize> = Vec::new();
    for line in rendered.lines() {
        let indent = indent_of(line);
        let body = line.trim_start();
        if body == ")" {
            assert_eq!(open.pop(), Some(indent), "unbalanced close in:\n{rendered}");
            continue;
        }
        if let Some(parent) = open.last() {
            assert_eq!(indent, parent + 2, "child not one level deeper: {line}");
        }
        if body.starts_with('(') && !body.ends_with(')') {
            open.push(indent);
        }
    }
    assert!(open.is_empty(), "unclosed branches in:\n{rendered}");
}

#[rstest]
fn long_named_leaf_is_truncated(mut go_parser: Parser) {
    let name = "x".repeat(60);
    let rendered = dump(&mut go_parser, &format!("package {name}"));
    let expected = format!("(package_identifier \"{}...\")", "x".repeat(47));
    assert!(rendered.contains(&expected), "got:\n{rendered}");
}

#[rstest]
fn comments_escape_tabs_in_leaf_text(mut go_parser: Parser) {
    let rendered = dump(&mut go_parser, "package main\n//\tnote\n");
    assert!(rendered.contains("(comment \"//\\tnote\")"), "got:\n{rendered}");
}

// =============================================================================
// Match Report Properties
// =============================================================================

#[rstest]
#[case("(function_declaration name: (identifier) @fn)", 1)]
#[case("(identifier) @id", 5)]
#[case("(type_identifier) @ty", 3)]
#[case("(import_declaration) @import", 0)]
fn report_counts_every_match(mut go_parser: Parser, #[case] pattern: &str, #[case] expected: usize) {
    let tree = go_parser.parse(GO_PROGRAM.as_bytes()).expect("parse");
    let mut query = go_parser.compile_query(pattern).expect("query");

    let mut out = Vec::new();
    let count = crate::write_matches(&mut out, tree.source(), query.execute(&tree)).expect("report");
    assert_eq!(count, expected);
}

#[rstest]
fn report_has_no_trailing_separator_after_last_match(mut go_parser: Parser) {
    let tree = go_parser.parse(GO_PROGRAM.as_bytes()).expect("parse");
    let mut query = go_parser.compile_query("(type_identifier) @ty").expect("query");

    let report = matches_to_string(tree.source(), query.execute(&tree)).expect("report");
    assert!(report.ends_with("content:\nint\n\n"));
    assert!(!report.ends_with("\n\n\n"));
    assert_eq!(report.matches("\n\n\n").count(), 2, "one separator between each pair");
}

#[rstest]
fn multi_line_capture_content_is_printed_line_by_line(mut go_parser: Parser) {
    let tree = go_parser.parse(GO_PROGRAM.as_bytes()).expect("parse");
    let mut query = go_parser.compile_query("(block) @body").expect("query");

    let report = matches_to_string(tree.source(), query.execute(&tree)).expect("report");
    assert_eq!(
        report,
        "@body\nstart: 3:27\nend: 5:1\ncontent:\n{\n\treturn a + b\n}\n\n"
    );
}

#[rstest]
fn crlf_comment_content_has_no_carriage_return(mut go_parser: Parser) {
    let tree = go_parser
        .parse(b"package main\r\n// hi\r\n")
        .expect("parse");
    let mut query = go_parser.compile_query("(comment) @c").expect("query");

    let report = matches_to_string(tree.source(), query.execute(&tree)).expect("report");
    assert!(!report.contains('\r'), "raw carriage return in: {report:?}");
    assert!(report.contains("content:\n// hi\n\n"), "got: {report:?}");
}
