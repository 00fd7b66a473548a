//! Common constants used throughout the blueprint application.

/// Version written into every scaffolded project (`${VERSION}`).
pub const PROJECT_VERSION: &str = "0.0.1";

/// Supported settings file names, looked up in the templates root.
pub const CONFIG_FILES: [&str; 3] = ["blueprint.json", "blueprint.yml", "blueprint.yaml"];

/// Environment variable naming the templates root.
pub const TEMPLATES_ENV: &str = "BLUEPRINT_TEMPLATES";

/// Template set shared by every variant.
pub const BASE_SET: &str = "base";

/// Template set layered over the base set by the python variant.
pub const PYTHON_SET: &str = "python";

/// Python runtime pinned when neither the settings file nor the CLI name one.
pub const DEFAULT_PYTHON_VERSION: &str = "3.10.2";

/// Version poetry writes into a fresh `pyproject.toml`.
pub const POETRY_PROJECT_VERSION: &str = "0.1.0";

pub const DEV_DEPENDENCIES: [&str; 13] = [
    "black",
    "flake8",
    "flake8-black",
    "flake8-docstrings",
    "flake8-isort",
    "ipython",
    "isort",
    "pdbpp",
    "pycodestyle",
    "pylama",
    "pynvim",
    "pylint",
    "pytest",
];
