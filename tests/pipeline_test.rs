use std::fs;

use blueprint::command::SystemRunner;
use blueprint::descriptor::ProjectDescriptor;
use blueprint::error::Error;
use blueprint::pipeline::{Operation, Pipeline, SetupContext, Step, StepState, WorkDir};
use blueprint::project::run_pipeline;
use blueprint::resolver::TemplateChain;
use blueprint::variant::{VariantDefinition, VariantKind};
use tempfile::TempDir;

struct Fixture {
    temp_dir: TempDir,
    chain: TemplateChain,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let templates = temp_dir.path().join("templates");
        fs::create_dir_all(temp_dir.path().join("dest")).unwrap();
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("README.md"), "# ${TITLE_NAME}\n").unwrap();
        fs::write(templates.join("NOTES.md"), "notes\n").unwrap();
        let chain = TemplateChain::new("basic", vec![templates]);
        Self { temp_dir, chain }
    }

    fn descriptor(&self) -> ProjectDescriptor {
        ProjectDescriptor::new("my-project", self.temp_dir.path().join("dest")).unwrap()
    }

    fn project(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("dest").join("my-project")
    }
}

fn four_steps(third: Step) -> Vec<Step> {
    vec![
        Step::new("create-skeleton", Operation::CreateDirectory),
        Step::install("install-readme", &["README.md"]),
        third,
        Step::install("install-notes", &["NOTES.md"]),
    ]
}

#[test]
fn test_all_steps_succeed() {
    let f = Fixture::new();
    let runner = SystemRunner::new();
    let descriptor = f.descriptor();
    let context = SetupContext::new(&descriptor, &f.chain, &runner);
    let mut pipeline = Pipeline::new(four_steps(Step::run("true", WorkDir::Project, |_| {
        Ok(vec!["true".to_string()])
    })));

    pipeline.run(&context).unwrap();

    assert!(pipeline.succeeded());
    assert_eq!(pipeline.failed_step(), None);
    assert!(f.project().join("README.md").is_file());
    assert!(f.project().join("NOTES.md").is_file());
}

#[test]
fn test_halts_at_first_failing_command() {
    let f = Fixture::new();
    let runner = SystemRunner::new();
    let descriptor = f.descriptor();
    let context = SetupContext::new(&descriptor, &f.chain, &runner);
    let mut pipeline = Pipeline::new(four_steps(Step::run("fail", WorkDir::Project, |_| {
        Ok(vec!["sh".to_string(), "-c".to_string(), "exit 1".to_string()])
    })));

    let err = pipeline.run(&context).unwrap_err();

    match err {
        Error::CommandError { command, status, .. } => {
            assert_eq!(command, "sh -c exit 1");
            assert_eq!(status, Some(1));
        }
        other => panic!("Expected CommandError, got {other:?}"),
    }
    assert_eq!(
        pipeline.states(),
        &[StepState::Succeeded, StepState::Succeeded, StepState::Failed, StepState::Pending]
    );
    assert_eq!(pipeline.failed_step(), Some("fail"));
    assert!(!pipeline.succeeded());

    // steps 1 and 2 left their mark, step 4 never ran
    assert!(f.project().is_dir());
    assert!(f.project().join("README.md").is_file());
    assert!(!f.project().join("NOTES.md").exists());
}

#[test]
fn test_error_is_propagated_unchanged() {
    let f = Fixture::new();
    let runner = SystemRunner::new();
    let descriptor = f.descriptor();
    let context = SetupContext::new(&descriptor, &f.chain, &runner);
    let mut pipeline =
        Pipeline::new(four_steps(Step::install("install-missing", &["MISSING.md"])));

    let err = pipeline.run(&context).unwrap_err();

    assert!(matches!(err, Error::NotFoundError { ref path, .. } if path == "MISSING.md"));
    assert_eq!(pipeline.failed_step(), Some("install-missing"));
}

#[test]
fn test_existing_project_directory_is_access_error() {
    let f = Fixture::new();
    fs::create_dir(f.project()).unwrap();
    let runner = SystemRunner::new();
    let descriptor = f.descriptor();
    let context = SetupContext::new(&descriptor, &f.chain, &runner);
    let mut pipeline = Pipeline::new(four_steps(Step::call("noop", |_| Ok(()))));

    let err = pipeline.run(&context).unwrap_err();

    assert!(matches!(err, Error::AccessError(_)));
    assert!(err.is_user_error());
    assert_eq!(pipeline.states()[0], StepState::Failed);
    assert!(pipeline.states()[1..].iter().all(|state| *state == StepState::Pending));
}

#[test]
fn test_new_pipeline_is_pending() {
    let pipeline = Pipeline::new(four_steps(Step::call("noop", |_| Ok(()))));

    assert_eq!(pipeline.steps().len(), 4);
    assert!(pipeline.states().iter().all(|state| *state == StepState::Pending));
    assert!(!pipeline.succeeded());
}

#[test]
fn test_init_repository_step() {
    let f = Fixture::new();
    let definition = VariantDefinition {
        kind: VariantKind::Basic,
        chain: f.chain.clone(),
        steps: vec![
            Step::new("create-skeleton", Operation::CreateDirectory),
            Step::new("init-repository", Operation::InitRepository),
        ],
    };
    let mut pipeline = definition.pipeline();

    let path =
        run_pipeline(&mut pipeline, &definition, &f.descriptor(), &SystemRunner::new()).unwrap();

    assert_eq!(path, f.project());
    assert!(path.join(".git").is_dir());
}
