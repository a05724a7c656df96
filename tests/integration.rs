use std::path::PathBuf;

use expect_test::expect;
use paexpr_lsp::syntax::{scan_call_sites, split_arguments};
use paexpr_lsp::{
    analyze, classify_tokens, completion_at_position, hover_at_position, load_settings, registry,
    semantic_tokens, to_diagnostics, AnalysisConfig, LineIndex,
};
use tower_lsp::lsp_types::{
    CompletionResponse, Diagnostic, DiagnosticSeverity, HoverContents, NumberOrString, Position,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format diagnostics into a deterministic, human-readable string.
///
/// Each diagnostic becomes one line:
///   <start_line>:<start_col>-<end_line>:<end_col> <severity> [<code>]: <message>
///
/// Lines keep the analyser's scan order.
fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "OK (no diagnostics)".to_string();
    }

    diagnostics
        .iter()
        .map(|d| {
            let range = &d.range;
            let severity = match d.severity {
                Some(DiagnosticSeverity::ERROR) => "error",
                Some(DiagnosticSeverity::WARNING) => "warning",
                _ => "unknown",
            };
            let code = match &d.code {
                Some(NumberOrString::String(s)) => format!(" [{}]", s),
                Some(NumberOrString::Number(n)) => format!(" [{}]", n),
                None => String::new(),
            };
            format!(
                "{}:{}-{}:{} {}{}: {}",
                range.start.line,
                range.start.character,
                range.end.line,
                range.end.character,
                severity,
                code,
                d.message,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_with(config: &AnalysisConfig, source: &str) -> String {
    let diagnostics = analyze(source, registry(), config);
    let line_index = LineIndex::new(source.to_string());
    format_diagnostics(&to_diagnostics(&diagnostics, &line_index))
}

/// Analyse with the configuration from a fixture directory's settings.toml.
fn check(fixture_dir: &str, source: &str) -> String {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_dir);
    let settings = load_settings(&fixture_path.join("settings.toml"));
    check_with(&settings.analysis_config(), source)
}

/// Analyse with every check enabled and no extra exemptions.
fn check_default(source: &str) -> String {
    check_with(&AnalysisConfig::default(), source)
}

// ---------------------------------------------------------------------------
// Tests: valid expressions (no diagnostics)
// ---------------------------------------------------------------------------

#[test]
fn valid_concat() {
    let actual = check_default("@{concat('a', 'b')}");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn valid_nested_calls() {
    let actual = check_default("@{if(equals(variables('n'), 1), 'one', string(variables('n')))}");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn non_literal_arguments_are_not_type_checked() {
    let actual = check_default("@{add(variables('n'), 2)}");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn bare_keywords_are_not_functions() {
    let actual = check_default("@{true} @{null} @{not(false)}");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn call_inside_string_literal_is_ignored() {
    let actual = check_default("@{'looks like concat(' }");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn unfinished_input_is_quiet() {
    let actual = check_default("@{concat('a', toLower(");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: diagnostics
// ---------------------------------------------------------------------------

#[test]
fn arity_too_few() {
    let actual = check_default("@{concat('a')}");
    let expected = expect![[
        r#"0:2-0:13 error [arity]: Function 'concat' expects at least 2 arguments, but found 1."#
    ]];
    expected.assert_eq(&actual);
}

#[test]
fn arity_too_many() {
    let actual = check_default("@{toLower('A', 'B')}");
    let expected = expect![[
        r#"0:2-0:19 error [arity]: Function 'toLower' expects at most 1 arguments, but found 2."#
    ]];
    expected.assert_eq(&actual);
}

#[test]
fn literal_type_mismatch() {
    let actual = check_default("@{add('x', 2)}");
    let expected = expect![[
        r#"0:6-0:9 warning [type-mismatch]: Argument type mismatch for 'add'. Expected 'NumberLike' but found literal of type 'String'."#
    ]];
    expected.assert_eq(&actual);
}

#[test]
fn unknown_function() {
    let actual = check_default("@{foo(1)}");
    let expected = expect![[r#"0:2-0:5 warning [unknown-function]: Unknown function: foo"#]];
    expected.assert_eq(&actual);
}

#[test]
fn nested_problems_in_scan_order() {
    let actual = check_default("@{concat(toUpper(1), add('a'))}");
    let expected = expect![[r#"
        0:21-0:29 error [arity]: Function 'add' expects at least 2 arguments, but found 1.
        0:25-0:28 warning [type-mismatch]: Argument type mismatch for 'add'. Expected 'NumberLike' but found literal of type 'String'."#]];
    expected.assert_eq(&actual);
}

#[test]
fn diagnostics_in_json_document() {
    let source = "{\n  \"a\": \"@{concat('x')}\",\n  \"b\": \"@{bar()}\"\n}";
    let actual = check_default(source);
    let expected = expect![[r#"
        1:10-1:21 error [arity]: Function 'concat' expects at least 2 arguments, but found 1.
        2:10-2:13 warning [unknown-function]: Unknown function: bar"#]];
    expected.assert_eq(&actual);
}

#[test]
fn analysis_is_idempotent() {
    let source = "@{concat('a')} @{add('x', 1)} @{foo()}";
    assert_eq!(check_default(source), check_default(source));
}

// ---------------------------------------------------------------------------
// Tests: settings fixtures
// ---------------------------------------------------------------------------

#[test]
fn basic_fixture_exempts_custom_action() {
    let actual = check("basic", "@{customAction('x')} @{other(1)}");
    let expected =
        expect![[r#"0:23-0:28 warning [unknown-function]: Unknown function: other"#]];
    expected.assert_eq(&actual);
}

#[test]
fn relaxed_fixture_skips_arity() {
    let actual = check("relaxed", "@{MyConnector(concat('a'))} @{legacylookup()}");
    let expected = expect![[r#"OK (no diagnostics)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn no_type_checks_fixture_keeps_other_checks() {
    let actual = check("no-type-checks", "@{add('x', 2)} @{foo()}");
    let expected = expect![[r#"0:17-0:20 warning [unknown-function]: Unknown function: foo"#]];
    expected.assert_eq(&actual);
}

#[test]
fn missing_fixture_uses_defaults() {
    let actual = check("does-not-exist", "@{concat('a')}");
    let expected = expect![[
        r#"0:2-0:13 error [arity]: Function 'concat' expects at least 2 arguments, but found 1."#
    ]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: scanner
// ---------------------------------------------------------------------------

#[test]
fn top_level_argument_splitting() {
    let texts = |args: &str| -> Vec<String> {
        split_arguments(args, 0)
            .into_iter()
            .map(|a| a.text)
            .collect()
    };
    assert_eq!(texts("a, 'b,c', d"), vec!["a", "'b,c'", "d"]);
    assert_eq!(texts("f(1,2), 3"), vec!["f(1,2)", "3"]);
}

#[test]
fn call_sites_in_document_order() {
    let names: Vec<String> = scan_call_sites("@{concat(toLower('A'), trim(' b '))}")
        .into_iter()
        .map(|site| site.name)
        .collect();
    assert_eq!(names, vec!["concat", "toLower", "trim"]);
}

// ---------------------------------------------------------------------------
// Tests: hover, completion, semantic tokens
// ---------------------------------------------------------------------------

#[test]
fn hover_renders_signature_and_description() {
    let line_index = LineIndex::new("@{formatDateTime(utcNow(), 'yyyy')}".to_string());
    let hover = hover_at_position(&line_index, registry(), Position::new(0, 5)).unwrap();
    let HoverContents::Markup(markup) = hover.contents else {
        panic!("Expected markup content");
    };

    let expected = expect![[r#"
        ```paexpr
        formatDateTime(TimestampString, [String], [String]) -> String
        ```
        ---
        Return a timestamp in the specified format."#]];
    expected.assert_eq(&markup.value);
}

#[test]
fn completion_offers_snippets_after_marker() {
    let line_index = LineIndex::new("\"value\": \"@{".to_string());
    let Some(CompletionResponse::Array(items)) =
        completion_at_position(&line_index, registry(), Position::new(0, 12))
    else {
        panic!("Expected completion items");
    };

    assert_eq!(items.len(), registry().len());
    let concat = items.iter().find(|item| item.label == "concat").unwrap();
    assert_eq!(
        concat.insert_text.as_deref(),
        Some("concat(${1:param1}, ${2:param2}, $0")
    );
}

#[test]
fn completion_is_silent_after_dot() {
    let line_index = LineIndex::new("@{body('Get_item').".to_string());
    assert!(completion_at_position(&line_index, registry(), Position::new(0, 19)).is_none());
}

#[test]
fn semantic_token_classification() {
    let source = "@{if(equals(1, 2), 'a', null)}";
    let actual = classify_tokens(source)
        .into_iter()
        .map(|t| format!("{:?} {:?} {}", t.span, t.kind, &source[t.span.clone()]))
        .collect::<Vec<_>>()
        .join("\n");

    let expected = expect![[r#"
        0..2 Operator @{
        2..4 Function if
        4..5 Operator (
        5..11 Function equals
        11..12 Operator (
        12..13 Number 1
        13..14 Operator ,
        15..16 Number 2
        16..17 Operator )
        17..18 Operator ,
        19..22 String 'a'
        22..23 Operator ,
        24..28 Keyword null
        28..29 Operator )
        29..30 Operator }"#]];
    expected.assert_eq(&actual);
}

#[test]
fn semantic_tokens_are_ascending() {
    let line_index = LineIndex::new(
        "{\n  \"a\": \"@{concat('x', triggerBody()?['id'])}\",\n  \"b\": 12.5\n}".to_string(),
    );
    let tokens = semantic_tokens(&line_index);

    assert!(!tokens.is_empty());
    assert!(tokens
        .iter()
        .skip(1)
        .all(|t| t.delta_line > 0 || t.delta_start > 0));
}
