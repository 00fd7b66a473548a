use blueprint::names::ProjectNames;

#[test]
fn test_derive_from_dash_name() {
    let names = ProjectNames::derive("my-project");

    assert_eq!(names.dash, "my-project");
    assert_eq!(names.snake, "my_project");
    assert_eq!(names.pascal, "MyProject");
    assert_eq!(names.title, "My Project");
}

#[test]
fn test_derive_from_spaced_name() {
    let names = ProjectNames::derive("my project");

    assert_eq!(names.dash, "my-project");
    assert_eq!(names.snake, "my_project");
    assert_eq!(names.pascal, "MyProject");
    assert_eq!(names.title, "My Project");
}

#[test]
fn test_derive_from_title_name() {
    let names = ProjectNames::derive("My Pytest Project");

    assert_eq!(names.dash, "my-pytest-project");
    assert_eq!(names.snake, "my_pytest_project");
    assert_eq!(names.pascal, "MyPytestProject");
    assert_eq!(names.title, "My Pytest Project");
}

#[test]
fn test_single_word() {
    let names = ProjectNames::derive("myproject");

    assert_eq!(names.dash, "myproject");
    assert_eq!(names.snake, "myproject");
    assert_eq!(names.pascal, "Myproject");
    assert_eq!(names.title, "Myproject");
}

#[test]
fn test_rederiving_a_canonical_form_is_a_fixed_point() {
    for name in [
        "my project",
        "my-project",
        "my_project",
        "My Project",
        "some long project name",
        "mixed_separators-in here",
    ] {
        let names = ProjectNames::derive(name);
        assert_eq!(ProjectNames::derive(&names.dash), names, "dash form of {name:?}");
        assert_eq!(ProjectNames::derive(&names.title), names, "title form of {name:?}");
        assert_eq!(ProjectNames::derive(&names.snake), names, "snake form of {name:?}");
    }
}

#[test]
fn test_derivation_is_deterministic() {
    assert_eq!(ProjectNames::derive("my project"), ProjectNames::derive("my project"));
}

#[test]
fn test_digits_stay_in_their_word() {
    let names = ProjectNames::derive("project2");
    assert_eq!(names.dash, "project2");
    assert_eq!(names.snake, "project2");
    assert_eq!(names.title, "Project2");

    let names = ProjectNames::derive("v8 engine");
    assert_eq!(names.dash, "v8-engine");
    assert_eq!(names.pascal, "V8Engine");
}

#[test]
fn test_non_ascii_letters() {
    let names = ProjectNames::derive("café app");

    assert_eq!(names.dash, "café-app");
    assert_eq!(names.snake, "café_app");
    assert_eq!(names.pascal, "CaféApp");
    assert_eq!(names.title, "Café App");
}

#[test]
fn test_mixed_case_is_not_split() {
    let names = ProjectNames::derive("iOS app");

    assert_eq!(names.dash, "ios-app");
    assert_eq!(names.title, "Ios App");
}

#[test]
fn test_only_separators() {
    let names = ProjectNames::derive("-- _");

    assert!(names.is_empty());
    assert_eq!(names.snake, "");
}
