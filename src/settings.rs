//! Settings infrastructure for paexpr-lsp.
//!
//! This module provides support for loading and parsing settings.toml files
//! that switch diagnostic checks on and off and extend the set of names that
//! are never reported as unknown functions.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::validate::AnalysisConfig;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Diagnostic configuration.
    pub diagnostics: Option<DiagnosticSettings>,
}

/// Which diagnostics are reported.
///
/// Every key is optional; a missing key keeps the check enabled.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticSettings {
    pub unknown_functions: Option<bool>,
    pub arity: Option<bool>,
    pub type_mismatches: Option<bool>,
    /// Extra function names that are never reported as unknown, matched
    /// case-insensitively.
    pub exempt: Option<Vec<String>>,
}

impl Settings {
    /// Fold the settings into the configuration used by every analysis.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let Some(diagnostics) = &self.diagnostics else {
            return AnalysisConfig::default();
        };

        let mut config = AnalysisConfig::default();
        config.unknown_functions = diagnostics.unknown_functions.unwrap_or(true);
        config.arity = diagnostics.arity.unwrap_or(true);
        config.type_mismatches = diagnostics.type_mismatches.unwrap_or(true);
        config.with_exempt(diagnostics.exempt.iter().flatten())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load and parse a settings file.
pub fn try_load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings, falling back to defaults when the file cannot be used.
pub fn load_settings(path: &Path) -> Settings {
    match try_load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

/// Discover settings.toml by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found settings.toml.
/// If not found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("settings.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}
