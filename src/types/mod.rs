//! Workflow function signatures and the builtin registry.
//!
//! This module provides:
//! - `FunctionDef`, one row of the static builtin table
//! - `FunctionSignature`, `Arity` and `ParamType` for the parsed form
//! - `Registry`, the case-insensitive lookup table shared by every analysis

mod builtins;
mod function;
mod registry;

pub use function::{Arity, FunctionDef, FunctionSignature, ParamType, TypeName};
pub use registry::{registry, Registry};
