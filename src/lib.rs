//! Blueprint creates new projects from layered template sets.
//! It derives naming conventions from a single project name, installs
//! template assets with those names substituted, and drives the external
//! tools (git, poetry, asdf) that finish setting the project up.

/// Command-line interface module for the `bp` binary
pub mod cli;

/// External command execution
pub mod command;

/// Settings file and templates root handling
/// Supports JSON and YAML formats (blueprint.json, blueprint.yml, blueprint.yaml)
pub mod config;

pub mod constants;

/// The validated description of a project to create
pub mod descriptor;

/// Error types and handling for the blueprint application
pub mod error;

/// Template installation with `${TOKEN}` substitution
pub mod installer;

pub mod logger;

/// Project name derivation (dash, snake, pascal and title case)
pub mod names;

/// Ordered setup steps with stop-at-first-failure semantics
pub mod pipeline;

/// Project creation entry point
pub mod project;

/// User confirmation handling
pub mod prompt;

/// Steps of the python variant
pub mod python;

/// Template asset lookup across a chain of template sets
pub mod resolver;

/// The registry of project variants
pub mod variant;
