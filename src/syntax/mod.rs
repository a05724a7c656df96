//! Text-level analysis of workflow expressions.
//!
//! This module provides:
//! - The call-site scanner and top-level argument splitter
//! - Literal classification and type compatibility

mod literal;
mod scanner;

pub use literal::{classify, is_compatible, LiteralType};
pub use scanner::{
    identifier_at, is_ident_byte, scan_call_sites, split_arguments, Argument, CallSite, Span,
};
