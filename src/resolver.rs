//! Template source resolution.
//! A variant searches an ordered chain of template-set roots, most specific
//! first, so a specialized set overrides single assets of a shared one.

use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Whether a resolved asset is a file to render or a directory to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    File,
    Directory,
}

/// One file or directory found in a template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    /// Path relative to the template-set root, tokens still unresolved.
    pub relative: String,
    /// The root of the template set the asset was found in.
    pub root: PathBuf,
    pub kind: AssetKind,
}

impl TemplateAsset {
    /// Absolute location of the asset on disk.
    pub fn source(&self) -> PathBuf {
        self.root.join(&self.relative)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == AssetKind::Directory
    }
}

/// The ordered list of template-set roots of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChain {
    variant: String,
    roots: Vec<PathBuf>,
}

impl TemplateChain {
    /// `roots` are searched in the given order.
    pub fn new<S: Into<String>>(variant: S, roots: Vec<PathBuf>) -> Self {
        Self { variant: variant.into(), roots }
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Finds `relative` in the first root that contains it.
    ///
    /// # Errors
    /// * `Error::NotFoundError` if no root contains the asset
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> Result<TemplateAsset> {
        let relative = relative.as_ref();
        for root in &self.roots {
            let candidate = root.join(relative);
            let kind = if candidate.is_dir() {
                AssetKind::Directory
            } else if candidate.is_file() {
                AssetKind::File
            } else {
                continue;
            };

            debug!("Resolved '{}' to {}", relative.display(), candidate.display());
            return Ok(TemplateAsset {
                relative: relative.to_string_lossy().into_owned(),
                root: root.clone(),
                kind,
            });
        }

        Err(Error::NotFoundError {
            path: relative.display().to_string(),
            variant: self.variant.clone(),
        })
    }
}
