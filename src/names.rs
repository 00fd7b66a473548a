//! Naming conventions derived from the single project name the user supplies.

use regex::Regex;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[-_\s]+").expect("separator pattern is valid"))
}

/// The canonical spellings of a project name.
///
/// `-`, `_` and whitespace are the only separators and are interchangeable,
/// so `"my project"`, `"my_project"` and `"My-Project"` all derive the same
/// forms. Segments are never split further: `project2` stays one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    /// `my-project`
    pub dash: String,
    /// `my_project`
    pub snake: String,
    /// `MyProject`
    pub pascal: String,
    /// `My Project`
    pub title: String,
}

impl ProjectNames {
    /// Derives every form from `name`. Pure and deterministic.
    pub fn derive(name: &str) -> Self {
        let words: Vec<String> = separators()
            .split(name)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        let capitalized: Vec<String> = words.iter().map(|word| capitalize(word)).collect();

        Self {
            dash: words.join("-"),
            snake: words.join("_"),
            pascal: capitalized.concat(),
            title: capitalized.join(" "),
        }
    }

    /// True when the name held nothing but separators.
    pub fn is_empty(&self) -> bool {
        self.dash.is_empty()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
