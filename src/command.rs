//! External command execution for setup steps.

use log::{debug, warn};
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// What an external command left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs on behalf of setup steps.
pub trait CommandRunner {
    /// Runs `argv` inside `cwd`, waiting for it to finish.
    ///
    /// # Errors
    /// * `Error::CommandError` if the program exits with a non-zero status
    /// * `Error::SpawnError` if the program cannot be started
    /// * `Error::ProgramError` if `argv` is empty or `cwd` does not exist
    fn run(&self, argv: &[String], cwd: &Path) -> Result<CommandOutput>;
}

/// Joins `argv` for diagnostics.
pub fn command_line(argv: &[String]) -> String {
    argv.join(" ")
}

/// Whether `program` can be found on `PATH`.
pub fn find_program(program: &str) -> Option<std::path::PathBuf> {
    which::which(program).ok()
}

/// A bare program name is looked up on `PATH`; anything with a separator
/// is a path relative to the working directory.
pub fn searches_path(program: &str) -> bool {
    !program.contains('/') && !program.contains(std::path::MAIN_SEPARATOR)
}

/// Runs commands as child processes of blueprint, capturing their output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| Error::ProgramError("empty command line".to_string()))?;
        if !cwd.is_dir() {
            return Err(Error::ProgramError(format!(
                "working directory '{}' does not exist for '{}'",
                cwd.display(),
                command_line(argv)
            )));
        }

        let command = command_line(argv);
        if searches_path(program) && find_program(program).is_none() {
            warn!("'{}' was not found on PATH", program);
        }
        debug!("Running '{}' in {}", command, cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| Error::SpawnError { command: command.clone(), source })?;

        let result = CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !output.status.success() {
            debug!("'{}' exited with {}", command, output.status);
            return Err(Error::CommandError {
                command,
                status: output.status.code(),
                stderr: result.stderr,
            });
        }

        Ok(result)
    }
}
