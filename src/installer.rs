//! Template installation.
//! Materializes resolved assets inside the new project, substituting
//! `${TOKEN}` placeholders in both destination paths and file contents.

use indexmap::IndexMap;
use log::debug;
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::PROJECT_VERSION;
use crate::descriptor::ProjectDescriptor;
use crate::error::{Error, Result};
use crate::names::ProjectNames;
use crate::resolver::TemplateAsset;

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Token values recognized by the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    tokens: IndexMap<&'static str, String>,
}

impl Substitutions {
    pub fn new(names: &ProjectNames, summary: Option<&str>) -> Self {
        let mut tokens = IndexMap::new();
        tokens.insert("DASH_NAME", names.dash.clone());
        tokens.insert("SNAKE_NAME", names.snake.clone());
        tokens.insert("PASCAL_NAME", names.pascal.clone());
        tokens.insert("TITLE_NAME", names.title.clone());
        tokens.insert("VERSION", PROJECT_VERSION.to_string());
        tokens.insert("SUMMARY", summary.unwrap_or_default().to_string());
        Self { tokens }
    }

    pub fn for_project(descriptor: &ProjectDescriptor) -> Self {
        Self::new(descriptor.names(), descriptor.summary())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    /// Replaces every recognized `${TOKEN}` in `text`.
    ///
    /// Unknown placeholders are kept verbatim, so shell snippets such as
    /// `${HOME}` survive installation.
    pub fn substitute(&self, text: &str) -> String {
        placeholder()
            .replace_all(text, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Installs one asset under `dest_root`.
///
/// Directories are created empty. Files are read, substituted in memory and
/// only then written, creating parent directories as needed.
///
/// # Returns
/// * `Result<PathBuf>` - Where the asset was installed
pub fn install(
    asset: &TemplateAsset,
    dest_root: &Path,
    substitutions: &Substitutions,
) -> Result<PathBuf> {
    let target = dest_root.join(substitutions.substitute(&asset.relative));

    if asset.is_dir() {
        debug!("Creating directory: {}", target.display());
        fs::create_dir_all(&target).map_err(Error::IoError)?;
        return Ok(target);
    }

    let content = fs::read_to_string(asset.source()).map_err(Error::IoError)?;
    let rendered = substitutions.substitute(&content);

    debug!("Writing file: {}", target.display());
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(&target, rendered).map_err(Error::IoError)?;
    Ok(target)
}
