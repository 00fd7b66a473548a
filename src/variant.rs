//! Variant registry.
//! Maps the closed set of project kinds to their template chains and
//! setup steps.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{BASE_SET, PYTHON_SET};
use crate::pipeline::{Operation, Pipeline, Step};
use crate::python;
use crate::resolver::TemplateChain;

/// The kinds of project blueprint knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariantKind {
    /// A README, a `.todo` directory and a git repository
    #[default]
    Basic,
    /// A poetry managed python package
    Python,
}

impl VariantKind {
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Basic => "basic",
            VariantKind::Python => "python",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options of the python variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PythonOptions {
    /// Interpreter version pinned in `.python-version`.
    pub version: Option<String>,
    /// Requirement written to `pyproject.toml`, e.g. `>=3.10`.
    pub constraint: Option<String>,
    pub dev_dependencies: Vec<String>,
}

impl PythonOptions {
    /// The python requirement, `>=<version>` unless a constraint was given.
    pub fn constraint(&self) -> Option<String> {
        self.constraint
            .clone()
            .or_else(|| self.version.as_ref().map(|version| format!(">={version}")))
    }
}

/// Variant specific options, one set per kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VariantOptions {
    #[default]
    Basic,
    Python(PythonOptions),
}

impl VariantOptions {
    pub fn kind(&self) -> VariantKind {
        match self {
            VariantOptions::Basic => VariantKind::Basic,
            VariantOptions::Python(_) => VariantKind::Python,
        }
    }
}

/// A variant's template chain and its fixed list of setup steps.
#[derive(Debug, Clone)]
pub struct VariantDefinition {
    pub kind: VariantKind,
    pub chain: TemplateChain,
    pub steps: Vec<Step>,
}

impl VariantDefinition {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.steps.clone())
    }
}

/// Returns the definition of `kind` with template sets under `templates_root`.
pub fn select<P: AsRef<Path>>(kind: VariantKind, templates_root: P) -> VariantDefinition {
    let root = templates_root.as_ref();
    match kind {
        VariantKind::Basic => VariantDefinition {
            kind,
            chain: chain(kind, root, &[BASE_SET]),
            steps: basic_steps(),
        },
        VariantKind::Python => VariantDefinition {
            kind,
            chain: chain(kind, root, &[PYTHON_SET, BASE_SET]),
            steps: python::steps(),
        },
    }
}

fn chain(kind: VariantKind, root: &Path, sets: &[&str]) -> TemplateChain {
    let roots: Vec<PathBuf> = sets.iter().map(|set| root.join(set)).collect();
    TemplateChain::new(kind.name(), roots)
}

fn basic_steps() -> Vec<Step> {
    vec![
        Step::new("create-skeleton", Operation::CreateDirectory),
        Step::install("install-templates", &["README.md", ".todo"]),
        Step::new("init-repository", Operation::InitRepository),
    ]
}
