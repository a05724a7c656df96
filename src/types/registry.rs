//! Case-insensitive function signature registry.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::builtins::BUILTIN_DEFS;
use super::function::{FunctionDef, FunctionSignature};

/// Immutable table of function signatures keyed by case-folded name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Signatures in ascending case-folded name order.
    signatures: Vec<FunctionSignature>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from a set of definitions.
    ///
    /// If two definitions fold to the same name, the later one wins.
    pub fn from_defs(defs: &[FunctionDef]) -> Self {
        let mut folded: Vec<(String, FunctionSignature)> = defs
            .iter()
            .map(|def| (def.name.to_lowercase(), FunctionSignature::from_def(def)))
            .collect();
        folded.sort_by(|a, b| a.0.cmp(&b.0));

        let mut signatures: Vec<FunctionSignature> = Vec::with_capacity(folded.len());
        let mut by_name = HashMap::with_capacity(folded.len());
        for (key, signature) in folded {
            match by_name.get(&key) {
                Some(&index) => signatures[index] = signature,
                None => {
                    by_name.insert(key, signatures.len());
                    signatures.push(signature);
                }
            }
        }

        Self {
            signatures,
            by_name,
        }
    }

    /// Look up a function by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        let index = match self.by_name.get(name) {
            Some(index) => *index,
            None => *self.by_name.get(&name.to_lowercase())?,
        };
        self.signatures.get(index)
    }

    /// All signatures, in ascending case-folded name order.
    pub fn all(&self) -> &[FunctionSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

static BUILTINS: LazyLock<Registry> = LazyLock::new(|| Registry::from_defs(BUILTIN_DEFS));

/// The process-wide builtin registry.
pub fn registry() -> &'static Registry {
    &BUILTINS
}
