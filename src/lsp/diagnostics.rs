//! Diagnostics conversion from expression diagnostics to LSP diagnostics.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString};

use crate::document::LineIndex;
use crate::validate::{DiagnosticCategory, ExprDiagnostic, Severity};

const LINT_SOURCE: &str = "paexpr-lint";
const TYPE_LINT_SOURCE: &str = "paexpr-lint-type";

fn source_for(category: DiagnosticCategory) -> &'static str {
    match category {
        DiagnosticCategory::UnknownFunction | DiagnosticCategory::Arity => LINT_SOURCE,
        DiagnosticCategory::TypeMismatch => TYPE_LINT_SOURCE,
    }
}

/// Convert analysis results to LSP diagnostics, preserving their order.
pub fn to_diagnostics(diagnostics: &[ExprDiagnostic], line_index: &LineIndex) -> Vec<Diagnostic> {
    diagnostics
        .iter()
        .map(|diagnostic| Diagnostic {
            range: line_index.span_to_range(&diagnostic.span),
            severity: Some(match diagnostic.severity {
                Severity::Error => DiagnosticSeverity::ERROR,
                Severity::Warning => DiagnosticSeverity::WARNING,
            }),
            code: Some(NumberOrString::String(
                diagnostic.category.as_str().to_string(),
            )),
            code_description: None,
            source: Some(source_for(diagnostic.category).to_string()),
            message: diagnostic.message.clone(),
            related_information: None,
            tags: None,
            data: None,
        })
        .collect()
}
