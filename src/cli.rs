//! Command-line interface implementation for blueprint.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;
use crate::constants::TEMPLATES_ENV;
use crate::descriptor::ProjectDescriptor;
use crate::error::Result;
use crate::variant::{VariantKind, VariantOptions};

/// Command-line arguments structure for blueprint.
#[derive(Parser, Debug)]
#[command(name = "bp", author, version, about = "Blueprint: create new projects from templates", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    #[command(subcommand)]
    New(NewProject),
}

/// The kind of project to create.
#[derive(Subcommand, Debug)]
pub enum NewProject {
    /// A README, a .todo directory and a git repository
    Basic(CommonArgs),

    /// A poetry managed python package
    Python {
        #[command(flatten)]
        common: CommonArgs,

        /// Python version to pin in .python-version and to create the virtualenv with
        #[arg(long, value_name = "VERSION")]
        pyv: Option<String>,

        /// Python requirement for pyproject.toml (defaults to >=VERSION)
        #[arg(long, value_name = "CONSTRAINT")]
        pyv_constraint: Option<String>,
    },
}

/// Arguments shared by every kind of project.
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Name of the new project
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory the project directory is created in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// One line description of the project
    #[arg(short, long)]
    pub summary: Option<String>,

    /// License identifier, e.g. MIT
    #[arg(short, long)]
    pub license: Option<String>,

    /// Directory holding the template sets
    #[arg(long, value_name = "DIR", env = TEMPLATES_ENV)]
    pub templates: Option<PathBuf>,

    /// Create the project without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl NewProject {
    pub fn kind(&self) -> VariantKind {
        match self {
            NewProject::Basic(_) => VariantKind::Basic,
            NewProject::Python { .. } => VariantKind::Python,
        }
    }

    pub fn common(&self) -> &CommonArgs {
        match self {
            NewProject::Basic(common) | NewProject::Python { common, .. } => common,
        }
    }

    /// Builds the project descriptor, filling gaps from `settings`.
    pub fn descriptor(&self, settings: &Settings) -> Result<ProjectDescriptor> {
        let common = self.common();
        let options = match self {
            NewProject::Basic(_) => VariantOptions::Basic,
            NewProject::Python { pyv, pyv_constraint, .. } => VariantOptions::Python(
                settings.python.options(pyv.clone(), pyv_constraint.clone()),
            ),
        };

        Ok(ProjectDescriptor::new(common.name.as_str(), &common.dest)?
            .with_summary(common.summary.clone())
            .with_license(common.license.clone().or_else(|| settings.license.clone()))
            .with_options(options))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With the usage status (64) and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(crate::error::SysExit::Usage.code());
            } else {
                e.exit();
            }
        }
    }
}
