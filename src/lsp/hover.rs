//! Hover documentation for workflow functions.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::LineIndex;
use crate::syntax::{identifier_at, Span};
use crate::types::{FunctionSignature, Registry};

/// Render a signature as a fenced block followed by its description.
fn format_signature_docs(signature: &FunctionSignature) -> String {
    format!(
        "```paexpr\n{}\n```\n---\n{}",
        signature.label(),
        signature.description
    )
}

/// Documentation for the function name under `offset`, with the span of
/// that name.
pub fn hover_at_offset(source: &str, registry: &Registry, offset: usize) -> Option<(Span, String)> {
    let (span, name) = identifier_at(source, offset)?;
    let signature = registry.lookup(name)?;
    Some((span, format_signature_docs(signature)))
}

/// Get hover information for a position in the document.
pub fn hover_at_position(
    line_index: &LineIndex,
    registry: &Registry,
    position: Position,
) -> Option<Hover> {
    let offset = line_index.position_to_offset(position)?;
    let (span, value) = hover_at_offset(line_index.source(), registry, offset)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: Some(line_index.span_to_range(&span)),
    })
}
