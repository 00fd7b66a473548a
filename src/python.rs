//! Setup steps of the python variant, driven by poetry and asdf.

use log::debug;
use std::fs;

use crate::constants::{POETRY_PROJECT_VERSION, PROJECT_VERSION};
use crate::error::{Error, Result};
use crate::pipeline::{ensure_absent, Operation, SetupContext, Step, WorkDir};

/// Template assets installed over the skeleton `poetry new` creates.
pub const ASSETS: [&str; 9] = [
    ".env",
    "setup.cfg",
    "${SNAKE_NAME}/__init__.py",
    "${SNAKE_NAME}/object.py",
    "${SNAKE_NAME}/attr.py",
    "tests/__init__.py",
    "tests/test_${SNAKE_NAME}.py",
    "README.md",
    ".todo",
];

/// Extra `pyproject.toml` tables spliced in before `[build-system]`.
pub const PYPROJECT_ADDONS: &str = "_pyproject.toml";

const PYPROJECT: &str = "pyproject.toml";
const PYTHON_VERSION_FILE: &str = ".python-version";

pub fn steps() -> Vec<Step> {
    vec![
        Step::call("create-skeleton", poetry_new),
        Step::new("init-repository", Operation::InitRepository),
        Step::install("install-templates", &ASSETS),
        Step::call("write-version-pin", write_version_pin),
        Step::call("poetry-init", poetry_init),
        Step::call("configure-pyproject", configure_pyproject),
        Step::call("add-dev-dependencies", add_dev_dependencies),
        Step::call("use-runtime", use_runtime),
        Step::run("install-dependencies", WorkDir::Project, poetry_install),
    ]
}

fn args<const N: usize>(argv: [&str; N]) -> Vec<String> {
    argv.iter().map(|arg| arg.to_string()).collect()
}

fn poetry_new(context: &SetupContext) -> Result<()> {
    let path = context.path();
    ensure_absent(&path)?;

    let mut argv = args(["poetry", "new"]);
    argv.push(format!("--name={}", context.descriptor().names().dash));
    argv.push(path.display().to_string());
    context.run(&argv, WorkDir::Destination)?;
    Ok(())
}

fn write_version_pin(context: &SetupContext) -> Result<()> {
    let Some(version) = &context.descriptor().python()?.version else {
        return Ok(());
    };
    let dotfile = context.path().join(PYTHON_VERSION_FILE);
    fs::write(dotfile, format!("{version}\n")).map_err(Error::IoError)
}

/// Builds the `poetry init` command line for the project.
pub fn poetry_init_args(context: &SetupContext) -> Result<Vec<String>> {
    let descriptor = context.descriptor();
    let options = descriptor.python()?;

    let mut argv = args(["poetry", "init"]);
    argv.push(format!("--name={}", descriptor.names().dash));
    if let Some(constraint) = options.constraint() {
        argv.push(format!("--python={constraint}"));
    }
    if let Some(summary) = descriptor.summary() {
        argv.push(format!("--description={summary}"));
    }
    if let Some(license) = descriptor.license() {
        argv.push(format!("--license={license}"));
    }
    argv.push("--no-interaction".to_string());
    Ok(argv)
}

fn poetry_init(context: &SetupContext) -> Result<()> {
    let argv = poetry_init_args(context)?;

    // poetry init refuses to run over an existing pyproject.toml
    let pyproject = context.path().join(PYPROJECT);
    if pyproject.is_file() {
        fs::remove_file(&pyproject).map_err(Error::IoError)?;
    }

    context.run(&argv, WorkDir::Project)?;
    Ok(())
}

/// Sets the scaffold version and splices the addon tables into `contents`.
pub fn merge_pyproject(contents: &str, addons: &str) -> String {
    contents
        .replace(
            &format!("version = \"{POETRY_PROJECT_VERSION}\""),
            &format!("version = \"{PROJECT_VERSION}\""),
        )
        .replacen("\n[build-system]\n", addons, 1)
}

fn configure_pyproject(context: &SetupContext) -> Result<()> {
    let pyproject = context.path().join(PYPROJECT);
    let contents = fs::read_to_string(&pyproject).map_err(Error::IoError)?;

    let asset = context.chain().resolve(PYPROJECT_ADDONS)?;
    let addons = fs::read_to_string(asset.source()).map_err(Error::IoError)?;
    let addons = context.substitutions().substitute(&addons);

    fs::write(&pyproject, merge_pyproject(&contents, &addons)).map_err(Error::IoError)
}

fn add_dev_dependencies(context: &SetupContext) -> Result<()> {
    let options = context.descriptor().python()?;
    if options.dev_dependencies.is_empty() {
        return Ok(());
    }

    let mut argv = args(["poetry", "add", "--group", "dev"]);
    argv.extend(options.dev_dependencies.iter().cloned());
    context.run(&argv, WorkDir::Project)?;
    Ok(())
}

fn use_runtime(context: &SetupContext) -> Result<()> {
    let Some(version) = &context.descriptor().python()?.version else {
        return Ok(());
    };

    let mut argv = args(["asdf", "where", "python"]);
    argv.push(version.clone());
    let output = context.run(&argv, WorkDir::Project)?;
    let python = format!("{}/bin/python", output.stdout.trim());
    debug!("Using python interpreter {}", python);

    let mut argv = args(["poetry", "env", "use"]);
    argv.push(python);
    context.run(&argv, WorkDir::Project)?;
    Ok(())
}

fn poetry_install(_context: &SetupContext) -> Result<Vec<String>> {
    Ok(args(["poetry", "install"]))
}
