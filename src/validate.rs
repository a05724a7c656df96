//! Diagnostic validation of workflow expression call sites.
//!
//! Combines the scanner, the registry and the literal classifier. Every run
//! starts from scratch on the full text and returns the complete diagnostic
//! set for it.

use std::collections::HashSet;
use std::fmt;

use crate::syntax::{classify, is_compatible, scan_call_sites, CallSite, Span};
use crate::types::{FunctionSignature, Registry};

/// Words that look like calls but are valid without a registered signature.
const EXEMPT_KEYWORDS: &[&str] = &[
    "if", "equals", "not", "and", "or", "greater", "less", "true", "false", "null",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    UnknownFunction,
    Arity,
    TypeMismatch,
}

impl DiagnosticCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCategory::UnknownFunction => "unknown-function",
            DiagnosticCategory::Arity => "arity",
            DiagnosticCategory::TypeMismatch => "type-mismatch",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in expression text, located by byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprDiagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub category: DiagnosticCategory,
}

/// Which checks run, and which extra names are never reported as unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub unknown_functions: bool,
    pub arity: bool,
    pub type_mismatches: bool,
    /// Lowercased names exempt from unknown-function warnings, in addition
    /// to the builtin keyword set.
    exempt: HashSet<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unknown_functions: true,
            arity: true,
            type_mismatches: true,
            exempt: HashSet::new(),
        }
    }
}

impl AnalysisConfig {
    /// Add names that should never be reported as unknown functions.
    pub fn with_exempt<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exempt
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        EXEMPT_KEYWORDS.contains(&lower.as_str()) || self.exempt.contains(&lower)
    }
}

/// Analyse the full document text.
pub fn analyze(source: &str, registry: &Registry, config: &AnalysisConfig) -> Vec<ExprDiagnostic> {
    validate_call_sites(&scan_call_sites(source), registry, config)
}

/// Produce diagnostics for already-scanned call sites, in scan order.
pub fn validate_call_sites(
    sites: &[CallSite],
    registry: &Registry,
    config: &AnalysisConfig,
) -> Vec<ExprDiagnostic> {
    let mut diagnostics = Vec::new();

    for site in sites {
        match registry.lookup(&site.name) {
            None => {
                if config.unknown_functions && !config.is_exempt(&site.name) {
                    diagnostics.push(ExprDiagnostic {
                        severity: Severity::Warning,
                        span: site.name_span.clone(),
                        message: format!("Unknown function: {}", site.name),
                        category: DiagnosticCategory::UnknownFunction,
                    });
                }
            }
            Some(signature) => {
                if config.arity {
                    diagnostics.extend(check_arity(site, signature));
                }
                if config.type_mismatches {
                    check_literal_types(site, signature, &mut diagnostics);
                }
            }
        }
    }

    diagnostics
}

fn check_arity(site: &CallSite, signature: &FunctionSignature) -> Option<ExprDiagnostic> {
    let found = site.arguments.len();
    let message = if found < signature.arity.min {
        format!(
            "Function '{}' expects at least {} arguments, but found {}.",
            signature.name, signature.arity.min, found
        )
    } else {
        match signature.arity.max {
            Some(max) if found > max => format!(
                "Function '{}' expects at most {} arguments, but found {}.",
                signature.name, max, found
            ),
            _ => return None,
        }
    };

    Some(ExprDiagnostic {
        severity: Severity::Error,
        span: site.call_span(),
        message,
        category: DiagnosticCategory::Arity,
    })
}

fn check_literal_types(
    site: &CallSite,
    signature: &FunctionSignature,
    diagnostics: &mut Vec<ExprDiagnostic>,
) {
    for (index, argument) in site.arguments.iter().enumerate() {
        let Some(literal) = classify(&argument.text) else {
            continue;
        };
        let expected = signature.expected_type(index);
        if is_compatible(literal, &expected) {
            continue;
        }
        diagnostics.push(ExprDiagnostic {
            severity: Severity::Warning,
            span: argument.span.clone(),
            message: format!(
                "Argument type mismatch for '{}'. Expected '{}' but found literal of type '{}'.",
                signature.name, expected, literal
            ),
            category: DiagnosticCategory::TypeMismatch,
        });
    }
}
