//! Snapshot tests for the `treeprobe-syntax` end-to-end suite.
//!
//! These tests use `insta` to pin the exact user-facing text.

use insta::assert_snapshot;

use treeprobe_syntax::{
    CompiledQuery, ParsedTree, Parser, SupportedLanguage, SyntaxEngine, matches_to_string,
    tree_to_string,
};

fn dump(language: SupportedLanguage, source: &str) -> String {
    let mut parser = Parser::new(language).unwrap_or_else(|err| panic!("parser: {err}"));
    let tree = parser
        .parse(source.as_bytes())
        .unwrap_or_else(|err| panic!("parse: {err}"));
    tree_to_string(&tree.root(), tree.source()).unwrap_or_else(|err| panic!("dump: {err}"))
}

#[test]
fn snapshot_go_package_clause_dump() {
    assert_snapshot!(dump(SupportedLanguage::Go, "package main"), @r#"
    (source_file
      (package_clause
        "package"
        (package_identifier "main")
      )
    )
    "#);
}

#[test]
fn snapshot_go_function_dump() {
    assert_snapshot!(dump(SupportedLanguage::Go, "package main\n\nfunc f() {}\n"), @r#"
    (source_file
      (package_clause
        "package"
        (package_identifier "main")
      )
      "\n"
      (function_declaration
        "func"
        (identifier "f")
        (parameter_list
          "("
          ")"
        )
        (block
          "{"
          "}"
        )
      )
      "\n"
    )
    "#);
}

#[test]
fn snapshot_go_package_match_report() {
    let mut parser =
        Parser::new(SupportedLanguage::Go).unwrap_or_else(|err| panic!("parser: {err}"));
    let tree = parser
        .parse(b"package main")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let mut query = parser
        .compile_query("(package_clause (package_identifier) @package)")
        .unwrap_or_else(|err| panic!("query: {err}"));

    let report = matches_to_string(tree.source(), query.execute(&tree))
        .unwrap_or_else(|err| panic!("report: {err}"));
    assert_snapshot!(report, @r"
    @package
    start: 1:8
    end: 1:12
    content:
    main
    ");
}

#[test]
fn snapshot_language_detection() {
    let extensions = ["go", "rs", "py", "pyi", "ts", "tsx", "jsx", "yml", "h", "json", "md"];
    let results: Vec<_> = extensions
        .iter()
        .map(|ext| {
            let lang = SupportedLanguage::from_extension(ext);
            format!("{ext}: {lang:?}")
        })
        .collect();

    assert_snapshot!(results.join("\n"), @r"
    go: Some(Go)
    rs: Some(Rust)
    py: Some(Python)
    pyi: Some(Python)
    ts: Some(TypeScript)
    tsx: Some(Tsx)
    jsx: Some(JavaScript)
    yml: Some(Yaml)
    h: Some(C)
    json: None
    md: None
    ");
}

#[test]
fn snapshot_language_names() {
    assert_snapshot!(SupportedLanguage::names().join(", "), @"bash, c, cpp, css, go, html, java, javascript, js, php, py, python, rs, ruby, rust, ts, tsx, typescript, yaml, yml");
}
