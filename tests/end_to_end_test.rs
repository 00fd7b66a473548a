use std::fs;

use blueprint::command::SystemRunner;
use blueprint::config::bundled_templates;
use blueprint::descriptor::ProjectDescriptor;
use blueprint::error::{Error, SysExit};
use blueprint::project::create_project;
use tempfile::TempDir;

#[test_log::test]
fn test_basic_project() {
    let temp_dir = TempDir::new().unwrap();
    let descriptor = ProjectDescriptor::new("my-project", temp_dir.path()).unwrap();

    let path = create_project(&descriptor, bundled_templates(), &SystemRunner::new()).unwrap();

    assert_eq!(path, temp_dir.path().join("my-project"));
    let readme = fs::read_to_string(path.join("README.md")).unwrap();
    assert_eq!(readme.lines().next(), Some("# My Project"));
    assert!(path.join(".todo").is_dir());
    assert!(!path.join(".todo/.keep").exists());
    assert!(path.join(".git").is_dir());
}

#[test_log::test]
fn test_basic_project_with_summary() {
    let temp_dir = TempDir::new().unwrap();
    let descriptor = ProjectDescriptor::new("my project", temp_dir.path())
        .unwrap()
        .with_summary(Some("My new project."));

    let path = create_project(&descriptor, bundled_templates(), &SystemRunner::new()).unwrap();

    let readme = fs::read_to_string(path.join("README.md")).unwrap();
    let lines: Vec<_> = readme.lines().collect();
    assert_eq!(lines[0], "# My Project");
    assert_eq!(lines[2], "> My new project.");
}

#[test]
fn test_basic_project_twice() {
    let temp_dir = TempDir::new().unwrap();
    let descriptor = ProjectDescriptor::new("my-project", temp_dir.path()).unwrap();
    create_project(&descriptor, bundled_templates(), &SystemRunner::new()).unwrap();

    let err = create_project(&descriptor, bundled_templates(), &SystemRunner::new()).unwrap_err();

    assert!(matches!(err, Error::AccessError(_)));
    assert_eq!(err.status(), SysExit::OsErr);
}

#[test]
fn test_missing_template_set() {
    let temp_dir = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let descriptor = ProjectDescriptor::new("my-project", temp_dir.path()).unwrap();

    let err = create_project(&descriptor, templates.path(), &SystemRunner::new()).unwrap_err();

    assert!(matches!(err, Error::NotFoundError { ref path, .. } if path == "README.md"));
    assert_eq!(err.status(), SysExit::Software);
    // the skeleton step already ran
    assert!(temp_dir.path().join("my-project").is_dir());
}

#[test]
fn test_destination_must_exist() {
    let temp_dir = TempDir::new().unwrap();

    let err = ProjectDescriptor::new("my-project", temp_dir.path().join("missing")).unwrap_err();

    assert!(matches!(err, Error::AccessError(_)));
    assert!(err.to_string().contains("Cannot create project in"));
}

#[test]
fn test_destination_must_be_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file");
    fs::write(&file, "").unwrap();

    let err = ProjectDescriptor::new("my-project", &file).unwrap_err();

    assert!(matches!(err, Error::AccessError(_)));
}

#[test]
fn test_blank_name_is_user_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = ProjectDescriptor::new("  ", temp_dir.path()).unwrap_err();

    assert!(matches!(err, Error::UserError(_)));
    assert_eq!(err.status(), SysExit::Usage);
}
