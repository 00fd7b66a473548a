//! Error handling for the blueprint application.
//! Defines the error taxonomy, the BSD sysexits status each error maps to,
//! and the result alias used throughout the crate.

use std::fmt;
use std::io;
use thiserror::Error;

/// BSD preferred exit codes (see `sysexits(3)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysExit {
    Generic,
    Usage,
    DataErr,
    NoInput,
    Software,
    OsErr,
    CantCreat,
    IoErr,
    NoPerm,
    Config,
}

impl SysExit {
    /// Numeric status passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        match self {
            SysExit::Generic => 1,
            SysExit::Usage => 64,
            SysExit::DataErr => 65,
            SysExit::NoInput => 66,
            SysExit::Software => 70,
            SysExit::OsErr => 71,
            SysExit::CantCreat => 73,
            SysExit::IoErr => 74,
            SysExit::NoPerm => 77,
            SysExit::Config => 78,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SysExit::Generic => "Error",
            SysExit::Usage => "Command line usage error",
            SysExit::DataErr => "User data format error",
            SysExit::NoInput => "Cannot open user input file",
            SysExit::Software => "Internal software error",
            SysExit::OsErr => "OS error",
            SysExit::CantCreat => "Can't create output file",
            SysExit::IoErr => "Input/output error",
            SysExit::NoPerm => "Permission denied",
            SysExit::Config => "Configuration error",
        }
    }
}

impl fmt::Display for SysExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// Custom error types for blueprint operations.
///
/// Every component returns the most specific variant it can; nothing between
/// a failing step and the CLI boundary rewraps an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Bad input reachable only through caller misuse.
    #[error("{0}")]
    UserError(String),

    /// A filesystem access, permission or existence problem caused by the user.
    #[error("{0}")]
    AccessError(String),

    /// A template asset is missing from every root of the resolution chain.
    #[error("Could not find template asset '{path}' for the {variant} variant.")]
    NotFoundError { path: String, variant: String },

    /// An external tool exited with a non-zero status.
    #[error("Command '{command}' failed with {}: {}", exit_status(.status), trimmed(.stderr))]
    CommandError { command: String, status: Option<i32>, stderr: String },

    /// An external tool could not be started at all.
    #[error("Unable to run '{command}': {source}.")]
    SpawnError {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An internal invariant was violated.
    #[error("Program error: {0}.")]
    ProgramError(String),

    /// Represents errors that occur during settings parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur while initializing the repository
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents errors raised by the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("Cancelled by user.")]
    Cancelled,
}

fn trimmed(stderr: &str) -> &str {
    stderr.trim()
}

fn exit_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Sysexits status used as the process exit code.
    pub fn status(&self) -> SysExit {
        match self {
            Error::UserError(_) => SysExit::Usage,
            Error::AccessError(_) | Error::SpawnError { .. } => SysExit::OsErr,
            Error::NotFoundError { .. }
            | Error::CommandError { .. }
            | Error::ProgramError(_)
            | Error::Git2Error(_) => SysExit::Software,
            Error::IoError(_) => SysExit::IoErr,
            Error::ConfigError(_) => SysExit::Config,
            Error::PromptError(_) | Error::Cancelled => SysExit::Generic,
        }
    }

    /// Whether the error was caused by the operator rather than by blueprint.
    /// An access error is a kind of user error.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::UserError(_) | Error::AccessError(_))
    }
}

/// Convenience type alias for Results with blueprint's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with the sysexits code of the error.
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(err.status().code());
}
