//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Diagnostics conversion from expression analysis results
//! - Hover documentation for workflow functions
//! - Function completion with snippets
//! - Semantic tokens for syntax highlighting

mod completion;
mod diagnostics;
mod hover;
mod semantic_tokens;

pub use completion::{completion_at_offset, completion_at_position, snippet_for};
pub use diagnostics::to_diagnostics;
pub use hover::{hover_at_offset, hover_at_position};
pub use semantic_tokens::{
    classify_tokens, legend, semantic_tokens, token_types, ClassifiedToken, TokenKind,
};
