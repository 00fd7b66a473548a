//! Settings handling for blueprint.
//! Settings live next to the template sets, in the first of
//! `blueprint.json`, `blueprint.yml` or `blueprint.yaml` that exists.
//! Every field is optional; a missing file means the built-in defaults.

use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILES, DEFAULT_PYTHON_VERSION, DEV_DEPENDENCIES, TEMPLATES_ENV};
use crate::error::{Error, Result};
use crate::variant::PythonOptions;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PythonSettings {
    pub version: Option<String>,
    pub constraint: Option<String>,
    pub dev_dependencies: Vec<String>,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            version: Some(DEFAULT_PYTHON_VERSION.to_string()),
            constraint: None,
            dev_dependencies: DEV_DEPENDENCIES.iter().map(|dep| dep.to_string()).collect(),
        }
    }
}

impl PythonSettings {
    /// Python options with the explicit CLI values taking precedence.
    pub fn options(&self, version: Option<String>, constraint: Option<String>) -> PythonOptions {
        PythonOptions {
            version: version.or_else(|| self.version.clone()),
            constraint: constraint.or_else(|| self.constraint.clone()),
            dev_dependencies: self.dev_dependencies.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// License used when none is given on the command line.
    pub license: Option<String>,
    pub python: PythonSettings,
}

/// Finds the first existing settings file in `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses settings content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML settings
pub fn parse_settings(content: &str) -> Result<Settings> {
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid settings format: {e}"))),
    }
}

/// Loads settings from the templates root, falling back to defaults.
pub fn load_settings<P: AsRef<Path>>(templates_root: P) -> Result<Settings> {
    match find_config(&templates_root, &CONFIG_FILES) {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
            parse_settings(&content)
        }
        None => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Templates bundled with blueprint.
pub fn bundled_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// The templates root: the explicit choice when given, else the bundled set.
///
/// The CLI fills `explicit` from `--templates` or the environment variable
/// named by [`TEMPLATES_ENV`].
pub fn templates_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = explicit.unwrap_or_else(bundled_templates);
    if !root.is_dir() {
        return Err(Error::ConfigError(format!(
            "templates directory '{}' does not exist (set --templates or {TEMPLATES_ENV})",
            root.display()
        )));
    }
    Ok(root)
}
