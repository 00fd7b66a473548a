//! The setup pipeline: an ordered list of named steps that turns an empty
//! destination into an initialized project.
//!
//! Steps run strictly in order. The first failing step halts the pipeline and
//! its error is returned as is; later steps stay pending and nothing already
//! done is rolled back.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::{CommandOutput, CommandRunner};
use crate::descriptor::ProjectDescriptor;
use crate::error::{Error, Result};
use crate::installer::{install, Substitutions};
use crate::resolver::TemplateChain;

/// Builds the argument vector of a command step.
pub type ArgvFn = fn(&SetupContext) -> Result<Vec<String>>;

/// A step implemented as a plain function.
pub type StepFn = fn(&SetupContext) -> Result<()>;

/// Where a command step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkDir {
    /// The directory the project is created in.
    Destination,
    /// The project directory itself.
    Project,
}

/// What a step does.
#[derive(Clone)]
pub enum Operation {
    /// Creates the empty project directory.
    CreateDirectory,
    /// Resolves and installs each listed asset, in order.
    Install(Vec<String>),
    /// Initializes a git repository in the project directory.
    InitRepository,
    /// Runs an external command.
    Run { workdir: WorkDir, argv: ArgvFn },
    Call(StepFn),
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateDirectory => write!(f, "CreateDirectory"),
            Operation::Install(assets) => f.debug_tuple("Install").field(assets).finish(),
            Operation::InitRepository => write!(f, "InitRepository"),
            Operation::Run { workdir, .. } => {
                f.debug_struct("Run").field("workdir", workdir).finish_non_exhaustive()
            }
            Operation::Call(_) => write!(f, "Call"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Step {
    pub name: &'static str,
    pub operation: Operation,
}

impl Step {
    pub fn new(name: &'static str, operation: Operation) -> Self {
        Self { name, operation }
    }

    pub fn install<S: AsRef<str>>(name: &'static str, assets: &[S]) -> Self {
        let assets = assets.iter().map(|asset| asset.as_ref().to_string()).collect();
        Self::new(name, Operation::Install(assets))
    }

    pub fn run(name: &'static str, workdir: WorkDir, argv: ArgvFn) -> Self {
        Self::new(name, Operation::Run { workdir, argv })
    }

    pub fn call(name: &'static str, step: StepFn) -> Self {
        Self::new(name, Operation::Call(step))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// Everything a step can reach while it runs.
pub struct SetupContext<'a> {
    descriptor: &'a ProjectDescriptor,
    chain: &'a TemplateChain,
    runner: &'a dyn CommandRunner,
    substitutions: Substitutions,
}

impl<'a> SetupContext<'a> {
    pub fn new(
        descriptor: &'a ProjectDescriptor,
        chain: &'a TemplateChain,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self { descriptor, chain, runner, substitutions: Substitutions::for_project(descriptor) }
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        self.descriptor
    }

    pub fn chain(&self) -> &TemplateChain {
        self.chain
    }

    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }

    /// The project directory being populated.
    pub fn path(&self) -> PathBuf {
        self.descriptor.path()
    }

    pub fn workdir(&self, workdir: WorkDir) -> PathBuf {
        match workdir {
            WorkDir::Destination => self.descriptor.dest().to_path_buf(),
            WorkDir::Project => self.path(),
        }
    }

    /// Resolves `relative` through the chain and installs it in the project.
    pub fn install(&self, relative: &str) -> Result<PathBuf> {
        let asset = self.chain.resolve(relative)?;
        install(&asset, &self.path(), &self.substitutions)
    }

    pub fn run(&self, argv: &[String], workdir: WorkDir) -> Result<CommandOutput> {
        self.runner.run(argv, &self.workdir(workdir))
    }

    /// Creates the project directory, refusing to reuse an existing one.
    pub fn create_directory(&self) -> Result<()> {
        let path = self.path();
        ensure_absent(&path)?;
        fs::create_dir(&path).map_err(Error::IoError)
    }

    pub fn init_repository(&self) -> Result<()> {
        let path = self.path();
        debug!("Initializing git repository in {}", path.display());
        git2::Repository::init(&path)?;
        Ok(())
    }
}

/// Fails with an access error when `path` already exists.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::AccessError(format!(
            "Directory already exists: {}",
            path.display()
        )));
    }
    Ok(())
}

/// A fixed sequence of steps together with the state of each one.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
    states: Vec<StepState>,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        let states = vec![StepState::Pending; steps.len()];
        Self { steps, states }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn states(&self) -> &[StepState] {
        &self.states
    }

    /// Name of the step that failed, if any.
    pub fn failed_step(&self) -> Option<&'static str> {
        self.states
            .iter()
            .position(|state| *state == StepState::Failed)
            .map(|index| self.steps[index].name)
    }

    pub fn succeeded(&self) -> bool {
        self.states.iter().all(|state| *state == StepState::Succeeded)
    }

    /// Runs every step in order, stopping at the first failure.
    pub fn run(&mut self, context: &SetupContext) -> Result<()> {
        let total = self.steps.len();
        for (index, step) in self.steps.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, total, step.name);
            self.states[index] = StepState::Running;

            match execute(&step.operation, context) {
                Ok(()) => self.states[index] = StepState::Succeeded,
                Err(err) => {
                    debug!("Step '{}' failed: {}", step.name, err);
                    self.states[index] = StepState::Failed;
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

fn execute(operation: &Operation, context: &SetupContext) -> Result<()> {
    match operation {
        Operation::CreateDirectory => context.create_directory(),
        Operation::Install(assets) => {
            for asset in assets {
                context.install(asset)?;
            }
            Ok(())
        }
        Operation::InitRepository => context.init_repository(),
        Operation::Run { workdir, argv } => {
            let argv = argv(context)?;
            context.run(&argv, *workdir).map(|_| ())
        }
        Operation::Call(step) => step(context),
    }
}
