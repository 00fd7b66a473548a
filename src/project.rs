//! Project creation: selects the variant of a descriptor and runs its pipeline.

use log::info;
use std::path::{Path, PathBuf};

use crate::command::CommandRunner;
use crate::descriptor::ProjectDescriptor;
use crate::error::Result;
use crate::pipeline::{Pipeline, SetupContext};
use crate::variant::{select, VariantDefinition};

/// Creates the project described by `descriptor`.
///
/// # Returns
/// * `Result<PathBuf>` - The populated project directory
///
/// # Errors
/// The error of the first failing setup step, unchanged. The project
/// directory is left as that step found it.
pub fn create_project<P: AsRef<Path>>(
    descriptor: &ProjectDescriptor,
    templates_root: P,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    let definition = select(descriptor.kind(), templates_root);
    let mut pipeline = definition.pipeline();
    run_pipeline(&mut pipeline, &definition, descriptor, runner)
}

/// Runs `pipeline` for `descriptor` against the template chain of `definition`.
///
/// The pipeline keeps the state of every step, so callers can inspect
/// which step failed afterwards.
pub fn run_pipeline(
    pipeline: &mut Pipeline,
    definition: &VariantDefinition,
    descriptor: &ProjectDescriptor,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    info!(
        "Creating {} project '{}' in {}",
        definition.kind,
        descriptor.name(),
        descriptor.dest().display()
    );
    let context = SetupContext::new(descriptor, &definition.chain, runner);
    pipeline.run(&context)?;
    Ok(context.path())
}
