//! The `bp` binary: parses arguments, confirms with the user and hands a
//! validated project descriptor to the blueprint library.

use blueprint::{
    cli::{get_args, Args, Commands},
    command::SystemRunner,
    config::{load_settings, templates_root},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    project::create_project,
    prompt::{DialoguerPrompter, Prompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the templates root and loads its settings
/// 2. Builds and validates the project descriptor
/// 3. Asks for confirmation unless `--yes` was given
/// 4. Runs the setup pipeline of the selected variant
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let Commands::New(new_project) = args.command;
    let common = new_project.common();

    let templates_root = templates_root(common.templates.clone())?;
    let settings = load_settings(&templates_root)?;
    let descriptor = new_project.descriptor(&settings)?;

    let confirmed = prompt.confirm(
        common.yes,
        format!(
            "Create {} project '{}' in {}?",
            descriptor.kind(),
            descriptor.names().dash,
            descriptor.dest().display()
        ),
    )?;
    if !confirmed {
        return Err(Error::Cancelled);
    }

    let path = create_project(&descriptor, &templates_root, &SystemRunner::new())?;
    println!("Project created successfully in {}.", path.display());
    Ok(())
}
