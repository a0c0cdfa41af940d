// tests/integration_tests.rs
//
// End-to-end: source text -> lexer -> parser -> evaluator -> caption.

use std::collections::HashMap;

use caption_lang::error::{ErrorKind, ExprError};
use caption_lang::evaluator::Evaluator;
use caption_lang::lexer::Lexer;
use caption_lang::parser::Parser;
use caption_lang::value::Value;

fn render(input: &str, pairs: Vec<(&str, Value)>) -> Result<String, ExprError> {
    let mut parser = Parser::new(Lexer::new(input));
    let expr = parser.parse()?;

    let mut vars: HashMap<String, Value> = HashMap::new();
    for (name, value) in pairs {
        vars.insert(name.to_string(), value);
    }

    let mut evaluator = Evaluator::new();
    evaluator.eval_to_string(&expr, &vars)
}

// ============================================================================
// Caption Scenarios
// ============================================================================

#[test]
fn test_project_and_file_caption() {
    let expr = r#"if $project == "" then $file else $project + " - " + $file"#;

    let caption = render(
        expr,
        vec![
            ("$project", Value::String("caption-lang".into())),
            ("$file", Value::String("lexer.rs".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "caption-lang - lexer.rs");

    // Unresolved $project falls back to the bare file name
    let caption = render(expr, vec![("$file", Value::String("lexer.rs".into()))]).unwrap();
    assert_eq!(caption, "lexer.rs");
}

#[test]
fn test_modified_marker_via_ternary() {
    let expr = r#"($modified ? "*" else "") + $file"#;

    let caption = render(
        expr,
        vec![
            ("$modified", Value::Boolean(true)),
            ("$file", Value::String("notes.txt".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "*notes.txt");

    let caption = render(
        expr,
        vec![
            ("$modified", Value::Boolean(false)),
            ("$file", Value::String("notes.txt".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "notes.txt");
}

#[test]
fn test_regex_driven_branch() {
    let expr = r#"if $file =~ "_test\.rs$" then "[test] " + $file else $file"#;

    let caption = render(expr, vec![("$file", Value::String("lexer_test.rs".into()))]).unwrap();
    assert_eq!(caption, "[test] lexer_test.rs");

    let caption = render(expr, vec![("$file", Value::String("lexer.rs".into()))]).unwrap();
    assert_eq!(caption, "lexer.rs");
}

#[test]
fn test_case_transforms_in_a_pipeline() {
    let expr = r#"upcase $product + " | " + lcap $page"#;

    let caption = render(
        expr,
        vec![
            ("$product", Value::String("acme".into())),
            ("$page", Value::String("DASHBOARD".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "ACME | Dashboard");
}

#[test]
fn test_comments_inside_an_expression() {
    let expr = "$a // pick the host name\n+ /* separator */ \":\" + $b";

    let caption = render(
        expr,
        vec![
            ("$a", Value::String("host".into())),
            ("$b", Value::String("8080".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "host:8080");
}

#[test]
fn test_escaped_quotes_reach_the_caption() {
    let caption = render(r#""editing ""draft"" now""#, vec![]).unwrap();
    assert_eq!(caption, r#"editing "draft" now"#);
}

#[test]
fn test_grouping_with_both_bracket_pairs() {
    let expr = r#"{ $a + "-" } + ( $b + "-" ) + $c"#;

    let caption = render(
        expr,
        vec![
            ("$a", Value::String("x".into())),
            ("$b", Value::String("y".into())),
            ("$c", Value::String("z".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "x-y-z");
}

#[test]
fn test_admin_badge_with_boolean_logic() {
    let expr = r#"if ($role == "admin") or ($role == "owner") then "[#] " + $user else $user"#;

    let caption = render(
        expr,
        vec![
            ("$role", Value::String("owner".into())),
            ("$user", Value::String("sam".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "[#] sam");

    let caption = render(
        expr,
        vec![
            ("$role", Value::String("guest".into())),
            ("$user", Value::String("sam".into())),
        ],
    )
    .unwrap();
    assert_eq!(caption, "sam");
}

// ============================================================================
// Error Propagation Through the Pipeline
// ============================================================================

#[test]
fn test_lexical_error_surfaces() {
    let err = render(r#""unter"#, vec![]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.pos, Some(0));
}

#[test]
fn test_syntax_error_surfaces() {
    let err = render(r#"if $a then "x""#, vec![]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.to_string().contains("'else'"));
}

#[test]
fn test_evaluation_error_surfaces() {
    let err = render(
        r#"$flag and $other"#,
        vec![
            ("$flag", Value::Boolean(true)),
            ("$other", Value::String("oops".into())),
        ],
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Evaluation);
    assert!(err.to_string().contains("'and' expects a boolean operand"));
}

#[test]
fn test_display_formats_include_kind_and_offset() {
    let err = render(r#""a" "b""#, vec![]).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.starts_with("syntax error at offset 4:"), "{}", rendered);

    let err = render(r#"not "x""#, vec![]).unwrap_err();
    assert!(err.to_string().starts_with("evaluation error:"));
}
