//! Semantic tokens for workflow expression highlighting.

use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::{SemanticToken, SemanticTokenType, SemanticTokensLegend};

use crate::document::{utf16_len, LineIndex};
use crate::syntax::Span;

/// Token type indices (must match LEGEND order).
pub mod token_types {
    pub const FUNCTION: u32 = 0;
    pub const STRING: u32 = 1;
    pub const NUMBER: u32 = 2;
    pub const KEYWORD: u32 = 3;
    pub const OPERATOR: u32 = 4;
    pub const PARAMETER: u32 = 5;
    pub const PROPERTY: u32 = 6;
    pub const VARIABLE: u32 = 7;
    pub const TYPE: u32 = 8;
}

/// Get the semantic tokens legend for capability declaration.
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: vec![
            SemanticTokenType::FUNCTION,
            SemanticTokenType::STRING,
            SemanticTokenType::NUMBER,
            SemanticTokenType::KEYWORD,
            SemanticTokenType::OPERATOR,
            SemanticTokenType::PARAMETER,
            SemanticTokenType::PROPERTY,
            SemanticTokenType::VARIABLE,
            SemanticTokenType::TYPE,
        ],
        token_modifiers: vec![],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Function,
    String,
    Number,
    Keyword,
    Operator,
}

impl TokenKind {
    fn legend_index(self) -> u32 {
        match self {
            TokenKind::Function => token_types::FUNCTION,
            TokenKind::String => token_types::STRING,
            TokenKind::Number => token_types::NUMBER,
            TokenKind::Keyword => token_types::KEYWORD,
            TokenKind::Operator => token_types::OPERATOR,
        }
    }
}

/// A classified byte range of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub span: Span,
    pub kind: TokenKind,
}

struct Recognizer {
    kind: TokenKind,
    pattern: Regex,
    /// Capture group holding the token; 0 is the whole match.
    group: usize,
}

impl Recognizer {
    fn new(kind: TokenKind, pattern: &str, group: usize) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("valid token regex"),
            group,
        }
    }
}

/// Recognizers in priority order.
static RECOGNIZERS: LazyLock<Vec<Recognizer>> = LazyLock::new(|| {
    vec![
        Recognizer::new(TokenKind::Function, r"@?([a-zA-Z_][a-zA-Z0-9_]*)\s*\(", 1),
        Recognizer::new(TokenKind::String, r"'(?:[^'\\]|\\.)*'", 0),
        Recognizer::new(TokenKind::Number, r"\b[0-9]+(?:\.[0-9]+)?\b", 0),
        Recognizer::new(
            TokenKind::Keyword,
            r"(?i)\b(?:parameters|variables|trigger|triggerBody|triggerOutputs|action|actions|item|items|workflow|result|if|equals|not|and|or|greater|less|true|false|null)\b",
            0,
        ),
        Recognizer::new(TokenKind::Operator, r"@\{|[}().\[\]?,]", 0),
    ]
});

/// Classify the whole text.
///
/// Tokens come back sorted by start offset and never overlap. When two
/// recognizers claim the same start, the earlier recognizer wins; a token
/// starting inside an already kept one is dropped.
pub fn classify_tokens(source: &str) -> Vec<ClassifiedToken> {
    let mut tokens: Vec<ClassifiedToken> = RECOGNIZERS
        .iter()
        .flat_map(|recognizer| {
            recognizer
                .pattern
                .captures_iter(source)
                .filter_map(|caps| caps.get(recognizer.group))
                .filter(|m| !m.is_empty())
                .map(|m| ClassifiedToken {
                    span: m.range(),
                    kind: recognizer.kind,
                })
        })
        .collect();

    tokens.sort_by_key(|token| token.span.start);

    let mut kept: Vec<ClassifiedToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if kept
            .last()
            .is_some_and(|prev| token.span.start < prev.span.end)
        {
            continue;
        }
        kept.push(token);
    }
    kept
}

/// Delta-encode classified tokens. Lengths are in UTF-16 code units and a
/// token crossing a line break is cut at the end of its first line, before
/// any `\r`.
fn encode_tokens(tokens: &[ClassifiedToken], line_index: &LineIndex) -> Vec<SemanticToken> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        let pos = line_index.offset_to_position(token.span.start);
        let line_end = line_index
            .line_span(pos.line as usize)
            .map_or(token.span.end, |line| {
                let crlf = line_index.source()[line.clone()].ends_with('\r');
                line.end - usize::from(crlf)
            });
        let end = token.span.end.min(line_end);
        let length = line_index
            .source()
            .get(token.span.start..end)
            .map(utf16_len)
            .unwrap_or_default();
        if length == 0 {
            continue;
        }

        let delta_line = pos.line - prev_line;
        let delta_start = if delta_line == 0 {
            pos.character - prev_start
        } else {
            pos.character
        };

        result.push(SemanticToken {
            delta_line,
            delta_start,
            length,
            token_type: token.kind.legend_index(),
            token_modifiers_bitset: 0,
        });

        prev_line = pos.line;
        prev_start = pos.character;
    }

    result
}

/// Generate semantic tokens for a whole document.
pub fn semantic_tokens(line_index: &LineIndex) -> Vec<SemanticToken> {
    encode_tokens(&classify_tokens(line_index.source()), line_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(&str, TokenKind)> {
        classify_tokens(source)
            .into_iter()
            .map(|t| (&source[t.span], t.kind))
            .collect()
    }

    #[test]
    fn legend_has_expected_types() {
        let leg = legend();
        assert_eq!(leg.token_types.len(), 9);
        assert_eq!(
            leg.token_types[token_types::FUNCTION as usize],
            SemanticTokenType::FUNCTION
        );
        assert_eq!(
            leg.token_types[token_types::OPERATOR as usize],
            SemanticTokenType::OPERATOR
        );
        assert_eq!(leg.token_types[token_types::TYPE as usize], SemanticTokenType::TYPE);
        assert!(leg.token_modifiers.is_empty());
    }

    #[test]
    fn classifies_interpolated_call() {
        assert_eq!(
            kinds("@{concat('a', 12)}"),
            vec![
                ("@{", TokenKind::Operator),
                ("concat", TokenKind::Function),
                ("(", TokenKind::Operator),
                ("'a'", TokenKind::String),
                (",", TokenKind::Operator),
                ("12", TokenKind::Number),
                (")", TokenKind::Operator),
                ("}", TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn function_beats_keyword_at_same_start() {
        assert_eq!(
            kinds("if(true)"),
            vec![
                ("if", TokenKind::Function),
                ("(", TokenKind::Operator),
                ("true", TokenKind::Keyword),
                (")", TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(kinds("TriggerBody"), vec![("TriggerBody", TokenKind::Keyword)]);
        assert_eq!(kinds("NULL"), vec![("NULL", TokenKind::Keyword)]);
        assert!(kinds("nullable").is_empty());
    }

    #[test]
    fn member_access_and_indexing() {
        assert_eq!(
            kinds("body?['x'].y"),
            vec![
                ("?", TokenKind::Operator),
                ("[", TokenKind::Operator),
                ("'x'", TokenKind::String),
                ("]", TokenKind::Operator),
                (".", TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn nested_matches_are_dropped() {
        assert_eq!(kinds("3.14"), vec![("3.14", TokenKind::Number)]);
        assert_eq!(
            kinds("'concat(1, 2)'"),
            vec![("'concat(1, 2)'", TokenKind::String)]
        );
    }

    #[test]
    fn starts_are_strictly_ascending() {
        let sources = [
            "@{if(equals(variables('x'), 1.5), 'a.b', null)}",
            "'unterminated concat( 'x' ) @{",
            "((((",
            "@{a}@{b}@{c}",
        ];
        for source in sources {
            let tokens = classify_tokens(source);
            assert!(
                tokens.windows(2).all(|w| w[0].span.start < w[1].span.start),
                "not ascending for {source:?}: {tokens:?}"
            );
        }
    }

    #[test]
    fn encodes_deltas_across_lines() {
        let line_index = LineIndex::new("@{add(1, 2)}\n  @{guid()}".to_string());
        let tokens = semantic_tokens(&line_index);

        let first_on_second_line = tokens
            .iter()
            .position(|t| t.delta_line == 1)
            .expect("token on second line");
        assert_eq!(tokens[first_on_second_line].delta_start, 2);
        assert_eq!(tokens[first_on_second_line].length, 2);
        assert_eq!(tokens[0].delta_line, 0);
        assert_eq!(tokens[0].delta_start, 0);
        assert_eq!(tokens[1].token_type, token_types::FUNCTION);
        assert_eq!(tokens[1].delta_start, 2);
        assert_eq!(tokens[1].length, 3);
    }

    #[test]
    fn multi_line_string_is_clipped() {
        let line_index = LineIndex::new("'ab\ncd'".to_string());
        let tokens = semantic_tokens(&line_index);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].length, 3);
    }

    #[test]
    fn crlf_string_is_clipped_before_carriage_return() {
        let line_index = LineIndex::new("'ab\r\ncd'".to_string());
        let tokens = semantic_tokens(&line_index);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].length, 3);
    }

    #[test]
    fn lengths_are_utf16() {
        let line_index = LineIndex::new("'\u{1F600}'".to_string());
        let tokens = semantic_tokens(&line_index);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].length, 4);
    }
}
