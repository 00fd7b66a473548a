//! The validated description of the project to create.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::names::ProjectNames;
use crate::variant::{PythonOptions, VariantKind, VariantOptions};

/// Everything the setup pipeline needs to know about a new project.
///
/// The destination is validated once in [`ProjectDescriptor::new`]; the
/// descriptor is immutable once built.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    name: String,
    names: ProjectNames,
    dest: PathBuf,
    summary: Option<String>,
    license: Option<String>,
    options: VariantOptions,
}

impl ProjectDescriptor {
    /// Creates a descriptor for the default variant.
    ///
    /// # Errors
    /// * `Error::UserError` if `name` is blank or holds nothing but separators
    /// * `Error::AccessError` if `dest` is not an existing, writable directory
    ///
    /// A relative `dest` is made absolute against the current directory.
    pub fn new<S: Into<String>, P: AsRef<Path>>(name: S, dest: P) -> Result<Self> {
        let name = name.into();
        let names = ProjectNames::derive(&name);
        if names.is_empty() {
            return Err(Error::UserError(format!(
                "Project name must contain more than separators: '{name}'"
            )));
        }

        let dest = dest.as_ref();
        if !dest.is_dir() {
            return Err(Error::AccessError(format!(
                "Cannot create project in: '{}'",
                dest.display()
            )));
        }
        // external tools run in other working directories
        let dest = std::path::absolute(dest).map_err(Error::IoError)?;
        ensure_writable(&dest)?;

        Ok(Self {
            names,
            name,
            dest,
            summary: None,
            license: None,
            options: VariantOptions::Basic,
        })
    }

    pub fn with_summary<S: Into<String>>(mut self, summary: Option<S>) -> Self {
        self.summary = summary.map(Into::into).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_license<S: Into<String>>(mut self, license: Option<S>) -> Self {
        self.license = license.map(Into::into).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_options(mut self, options: VariantOptions) -> Self {
        self.options = options;
        self
    }

    /// The name exactly as the user typed it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn names(&self) -> &ProjectNames {
        &self.names
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// `<dest>/<dash-name>`, the directory the pipeline populates.
    pub fn path(&self) -> PathBuf {
        self.dest.join(&self.names.dash)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn options(&self) -> &VariantOptions {
        &self.options
    }

    pub fn kind(&self) -> VariantKind {
        self.options.kind()
    }

    /// Python options of a python descriptor.
    ///
    /// # Errors
    /// * `Error::ProgramError` when a python-only step runs for another variant
    pub fn python(&self) -> Result<&PythonOptions> {
        match &self.options {
            VariantOptions::Python(options) => Ok(options),
            other => Err(Error::ProgramError(format!(
                "python options requested for the {} variant",
                other.kind()
            ))),
        }
    }
}

/// Creates and removes a scratch file, the only reliable writability test.
fn ensure_writable(dest: &Path) -> Result<()> {
    static SCRATCH_ID: AtomicUsize = AtomicUsize::new(0);
    let id = SCRATCH_ID.fetch_add(1, Ordering::Relaxed);
    let scratch = dest.join(format!(".blueprint-{}-{id}", std::process::id()));
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&scratch)
        .map_err(|e| {
            Error::AccessError(format!("Destination is not writable: '{}' ({e})", dest.display()))
        })?;
    fs::remove_file(&scratch).map_err(Error::IoError)
}
