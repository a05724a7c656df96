//! Document state management for the expression language server.

use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use crate::syntax::{scan_call_sites, CallSite};
use crate::types::Registry;
use crate::validate::{validate_call_sites, AnalysisConfig, ExprDiagnostic};

use super::text::LineIndex;

/// One analysed snapshot of a document.
///
/// Rebuilt from scratch on every content change; nothing carries over from
/// the previous snapshot.
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub line_index: LineIndex,
    /// Document version from the client.
    pub version: i32,
    pub call_sites: Vec<CallSite>,
    pub diagnostics: Vec<ExprDiagnostic>,
}

impl DocumentState {
    pub fn new(source: String, version: i32, registry: &Registry, config: &AnalysisConfig) -> Self {
        let call_sites = scan_call_sites(&source);
        let diagnostics = validate_call_sites(&call_sites, registry, config);

        Self {
            line_index: LineIndex::new(source),
            version,
            call_sites,
            diagnostics,
        }
    }

    pub fn source(&self) -> &str {
        self.line_index.source()
    }
}

/// Thread-safe storage for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<DocumentState>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Analyse `source` and store it as the current snapshot for `uri`,
    /// replacing any previous one.
    pub fn open(
        &self,
        uri: Url,
        source: String,
        version: i32,
        registry: &Registry,
        config: &AnalysisConfig,
    ) -> Arc<DocumentState> {
        let state = Arc::new(DocumentState::new(source, version, registry, config));
        self.documents.insert(uri, Arc::clone(&state));
        state
    }

    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    pub fn get(&self, uri: &Url) -> Option<Arc<DocumentState>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
