//! Completion support for workflow expressions.
//!
//! Completion only fires where a function name may start: right after an
//! interpolation marker, after whitespace, `(`, `,` or `{`, or at the start
//! of a line. Every registered function is offered as a snippet with one
//! placeholder per required parameter.

use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::*;

use crate::document::LineIndex;
use crate::types::{FunctionSignature, Registry};

/// Partial identifier after a separator, or alone on the line.
static IDENT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\s(,{]|^)@?[A-Za-z0-9_]*$").expect("valid completion trigger regex")
});

/// Whether the text before the cursor on its line is a place where a
/// function name may be typed.
fn is_completion_context(line_prefix: &str) -> bool {
    line_prefix.ends_with('@') || IDENT_START.is_match(line_prefix)
}

/// Build the snippet inserted for a function.
///
/// Required parameters become numbered placeholders. Functions that accept
/// more arguments leave the call open at `$0`; fixed-arity ones are closed.
pub fn snippet_for(signature: &FunctionSignature) -> String {
    let min = signature.arity.min;
    let placeholders = (1..=min)
        .map(|i| format!("${{{i}:param{i}}}"))
        .collect::<Vec<_>>()
        .join(", ");

    let tail = if !signature.arity.accepts_more() {
        ")$0"
    } else if min > 0 {
        ", $0"
    } else {
        "$0"
    };

    format!("{}({}{}", signature.name, placeholders, tail)
}

fn completion_item(signature: &FunctionSignature) -> CompletionItem {
    CompletionItem {
        label: signature.name.to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        detail: Some(signature.label()),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: signature.description.to_string(),
        })),
        insert_text: Some(snippet_for(signature)),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    }
}

/// Completion items for the cursor at `offset`, or `None` outside a
/// function-name context.
pub fn completion_at_offset(
    line_index: &LineIndex,
    registry: &Registry,
    offset: usize,
) -> Option<Vec<CompletionItem>> {
    if !is_completion_context(line_index.line_prefix(offset)) {
        return None;
    }
    Some(registry.all().iter().map(completion_item).collect())
}

/// Generate completions at a position in the document.
pub fn completion_at_position(
    line_index: &LineIndex,
    registry: &Registry,
    position: Position,
) -> Option<CompletionResponse> {
    let offset = line_index.position_to_offset(position)?;
    completion_at_offset(line_index, registry, offset).map(CompletionResponse::Array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::registry;

    fn completions(source: &str) -> Option<Vec<CompletionItem>> {
        let line_index = LineIndex::new(source.to_string());
        completion_at_offset(&line_index, registry(), source.len())
    }

    fn snippet(name: &str) -> String {
        snippet_for(registry().lookup(name).unwrap())
    }

    #[test]
    fn triggers_after_interpolation_marker() {
        assert!(completions("@").is_some());
        assert!(completions("value: @").is_some());
        assert!(completions("@{").is_some());
        assert!(completions("@{con").is_some());
    }

    #[test]
    fn triggers_after_separators() {
        assert!(completions("concat(").is_some());
        assert!(completions("concat('a', ").is_some());
        assert!(completions("concat('a',to").is_some());
        assert!(completions("x ").is_some());
    }

    #[test]
    fn triggers_at_line_start() {
        assert!(completions("").is_some());
        assert!(completions("conc").is_some());
        assert!(completions("first\n@con").is_some());
    }

    #[test]
    fn no_completion_elsewhere() {
        assert!(completions("body('x').").is_none());
        assert!(completions("concat('a'").is_none());
        assert!(completions("x.y").is_none());
    }

    #[test]
    fn offers_every_registered_function() {
        let items = completions("@{").unwrap();
        assert_eq!(items.len(), registry().len());
        assert!(items
            .iter()
            .all(|item| item.kind == Some(CompletionItemKind::FUNCTION)));
        assert!(items
            .iter()
            .all(|item| item.insert_text_format == Some(InsertTextFormat::SNIPPET)));
    }

    #[test]
    fn completion_item_contents() {
        let items = completions("@{").unwrap();
        let concat = items.iter().find(|item| item.label == "concat").unwrap();

        assert_eq!(
            concat.detail.as_deref(),
            Some("concat(String, String, ...) -> String")
        );
        assert_eq!(
            concat.insert_text.as_deref(),
            Some("concat(${1:param1}, ${2:param2}, $0")
        );
        match &concat.documentation {
            Some(Documentation::MarkupContent(m)) => {
                assert_eq!(m.kind, MarkupKind::Markdown);
                assert_eq!(m.value, "Combine two or more strings.");
            }
            other => panic!("Expected markup documentation, got {other:?}"),
        }
    }

    #[test]
    fn snippets_follow_arity() {
        assert_eq!(snippet("toLower"), "toLower(${1:param1})$0");
        assert_eq!(snippet("if"), "if(${1:param1}, ${2:param2}, ${3:param3})$0");
        assert_eq!(snippet("formatDateTime"), "formatDateTime(${1:param1}, $0");
        assert_eq!(snippet("utcNow"), "utcNow($0");
        assert_eq!(snippet("action"), "action()$0");
    }

    #[test]
    fn position_outside_document_yields_nothing() {
        let line_index = LineIndex::new("@".to_string());
        assert!(completion_at_position(&line_index, registry(), Position::new(4, 0)).is_none());
    }
}
