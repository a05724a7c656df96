//! Workflow expression language server.
//!
//! The analysis core (`types`, `syntax`, `validate`) works on plain text and
//! byte offsets. `Backend` adapts it to the Language Server Protocol.

use std::sync::OnceLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};
use tracing::{debug, info, warn};

mod document;
mod lsp;
mod settings;
pub mod syntax;
pub mod types;
pub mod validate;

pub use document::{utf16_len, DocumentState, DocumentStore, LineIndex};
pub use lsp::{
    classify_tokens, completion_at_offset, completion_at_position, hover_at_offset,
    hover_at_position, legend, semantic_tokens, snippet_for, to_diagnostics, token_types,
    ClassifiedToken, TokenKind,
};
pub use settings::{
    discover_settings, load_settings, try_load_settings, DiagnosticSettings, Settings,
    SettingsError,
};
pub use types::registry;
pub use validate::{analyze, AnalysisConfig, DiagnosticCategory, ExprDiagnostic, Severity};

/// Client capabilities recorded once during `initialize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientFlags {
    pub configuration: bool,
    pub workspace_folders: bool,
    pub diagnostic_related_information: bool,
}

impl ClientFlags {
    pub fn from_capabilities(capabilities: &ClientCapabilities) -> Self {
        let workspace = capabilities.workspace.as_ref();
        Self {
            configuration: workspace.and_then(|w| w.configuration).unwrap_or(false),
            workspace_folders: workspace.and_then(|w| w.workspace_folders).unwrap_or(false),
            diagnostic_related_information: capabilities
                .text_document
                .as_ref()
                .and_then(|t| t.publish_diagnostics.as_ref())
                .and_then(|p| p.related_information)
                .unwrap_or(false),
        }
    }
}

/// The language server: open documents plus the analysis configuration
/// fixed at `initialize`.
pub struct Backend {
    client: Client,
    documents: DocumentStore,
    config: OnceLock<AnalysisConfig>,
    client_flags: OnceLock<ClientFlags>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            config: OnceLock::new(),
            client_flags: OnceLock::new(),
        }
    }

    fn client_flags(&self) -> ClientFlags {
        self.client_flags.get().copied().unwrap_or_default()
    }

    fn config(&self) -> &AnalysisConfig {
        self.config.get_or_init(AnalysisConfig::default)
    }

    /// Analyse document and publish diagnostics.
    async fn on_document_change(&self, uri: Url, text: String, version: i32) {
        let state = self
            .documents
            .open(uri.clone(), text, version, registry(), self.config());
        debug!(
            %uri,
            version,
            call_sites = state.call_sites.len(),
            diagnostics = state.diagnostics.len(),
            "analysed document"
        );
        self.publish_diagnostics_for(&uri, &state).await;
    }

    /// Publish diagnostics for a document, replacing the previous set.
    async fn publish_diagnostics_for(&self, uri: &Url, state: &DocumentState) {
        let diagnostics = lsp::to_diagnostics(&state.diagnostics, &state.line_index);
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(state.version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let flags = ClientFlags::from_capabilities(&params.capabilities);
        let _ = self.client_flags.set(flags);

        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        let config = match &workspace_root {
            Some(root) => {
                let (settings, settings_dir) = settings::discover_settings(root);
                debug!(dir = %settings_dir.display(), "resolved settings");
                settings.analysis_config()
            }
            None => AnalysisConfig::default(),
        };
        let _ = self.config.set(config);

        info!(
            root = ?workspace_root,
            ?flags,
            functions = registry().len(),
            "initializing"
        );

        let workspace = flags.workspace_folders.then(|| WorkspaceServerCapabilities {
            workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                supported: Some(true),
                change_notifications: None,
            }),
            file_operations: None,
        });

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["@".to_string(), ".".to_string()]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                semantic_tokens_provider: Some(
                    SemanticTokensServerCapabilities::SemanticTokensOptions(
                        SemanticTokensOptions {
                            legend: lsp::legend(),
                            full: Some(SemanticTokensFullOptions::Bool(true)),
                            range: None,
                            work_done_progress_options: WorkDoneProgressOptions::default(),
                        },
                    ),
                ),
                workspace,
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("initialized");
        if self.client_flags().configuration {
            let registration = Registration {
                id: "paexpr-lsp-configuration".to_string(),
                method: "workspace/didChangeConfiguration".to_string(),
                register_options: None,
            };
            if let Err(e) = self.client.register_capability(vec![registration]).await {
                warn!("failed to register for configuration changes: {e}");
            }
        }
        self.client
            .log_message(
                MessageType::INFO,
                "Workflow expression language server initialized",
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!(open_documents = self.documents.len(), "shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_document_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        )
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the last change carries the whole text.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.on_document_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            )
            .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
        self.client
            .publish_diagnostics(params.text_document.uri, vec![], None)
            .await;
    }

    async fn did_change_configuration(&self, _: DidChangeConfigurationParams) {
        // Settings come from settings.toml and are fixed for the session.
        debug!("configuration change ignored");
    }

    async fn did_change_workspace_folders(&self, params: DidChangeWorkspaceFoldersParams) {
        info!(
            added = params.event.added.len(),
            removed = params.event.removed.len(),
            "workspace folders changed"
        );
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };
        Ok(lsp::hover_at_position(&doc.line_index, registry(), position))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri) else {
            debug!(%uri, "completion requested for unknown document");
            return Ok(None);
        };
        Ok(lsp::completion_at_position(&doc.line_index, registry(), position))
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let Some(doc) = self.documents.get(&params.text_document.uri) else {
            return Ok(None);
        };

        Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
            result_id: None,
            data: lsp::semantic_tokens(&doc.line_index),
        })))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
