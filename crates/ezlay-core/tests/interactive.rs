//! Interactive resolution driven by a scripted prompter

use ezlay_core::config::{Choice, Prompter, Validator};
use ezlay_core::{resolve_interactive, Feature, License, ProjectType, ResolveContext, Result};
use std::collections::VecDeque;
use std::path::Path;

enum Answer {
    Pick(&'static str),
    Text(&'static str),
    Yes,
    No,
    Picks(&'static [&'static str]),
    Cancel,
}

/// Replays answers in order and records every prompt with its options
struct Scripted {
    answers: VecDeque<Answer>,
    asked: Vec<(String, Vec<String>)>,
}

impl Scripted {
    fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, prompt: &str, options: Vec<String>) -> Answer {
        self.asked.push((prompt.to_string(), options));
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {}", prompt))
    }

    fn prompts(&self) -> Vec<&str> {
        self.asked.iter().map(|(p, _)| p.as_str()).collect()
    }

    fn options(&self, prompt: &str) -> &[String] {
        self.asked
            .iter()
            .find(|(p, _)| p == prompt)
            .map(|(_, o)| o.as_slice())
            .unwrap_or_else(|| panic!("never asked: {}", prompt))
    }
}

fn labels<T>(choices: &[Choice<T>]) -> Vec<String> {
    choices.iter().map(|c| c.label.clone()).collect()
}

fn pick<T: Clone>(choices: &[Choice<T>], label: &str) -> T {
    choices
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| panic!("no option labelled {}", label))
        .value
        .clone()
}

impl Prompter for Scripted {
    fn select<T: Clone + Eq>(&mut self, prompt: &str, choices: Vec<Choice<T>>) -> Result<Option<T>> {
        match self.next(prompt, labels(&choices)) {
            Answer::Pick(label) => Ok(Some(pick(&choices, label))),
            Answer::Cancel => Ok(None),
            _ => panic!("expected a selection for {}", prompt),
        }
    }

    fn input(&mut self, prompt: &str, validator: Validator) -> Result<Option<String>> {
        match self.next(prompt, Vec::new()) {
            Answer::Text(text) => {
                if let Err(msg) = validator(text) {
                    panic!("rejected {:?}: {}", text, msg);
                }
                Ok(Some(text.to_string()))
            }
            Answer::Cancel => Ok(None),
            _ => panic!("expected text for {}", prompt),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt, Vec::new()) {
            Answer::Yes => Ok(Some(true)),
            Answer::No => Ok(Some(false)),
            Answer::Cancel => Ok(None),
            _ => panic!("expected a confirmation for {}", prompt),
        }
    }

    fn multiselect<T: Clone + Eq>(
        &mut self,
        prompt: &str,
        choices: Vec<Choice<T>>,
    ) -> Result<Option<Vec<T>>> {
        match self.next(prompt, labels(&choices)) {
            Answer::Picks(picked) => Ok(Some(picked.iter().map(|l| pick(&choices, l)).collect())),
            Answer::Cancel => Ok(None),
            _ => panic!("expected selections for {}", prompt),
        }
    }
}

fn ctx(dir: &Path) -> ResolveContext {
    ResolveContext::new(dir, "default-dev")
}

#[test]
fn test_full_interactive_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut prompter = Scripted::new(vec![
        Answer::Pick("FastAPI Project"),
        Answer::Pick("custom name..."),
        Answer::Text("orders"),
        Answer::Pick("MIT License"),
        Answer::Pick("Enter custom name..."),
        Answer::Text("A. Engineer"),
        Answer::Yes,
        Answer::Picks(&["Docker Support"]),
    ]);

    let config = resolve_interactive(&mut prompter, &ctx(dir.path()))
        .unwrap()
        .unwrap();

    assert_eq!(config.project_type(), ProjectType::FastApi);
    assert_eq!(config.project_name(), "orders");
    assert_eq!(config.license_grant(), Some((License::Mit, "A. Engineer")));
    assert!(config.has(Feature::Docker));
    assert!(!config.has(Feature::Venv));

    assert_eq!(
        prompter.prompts(),
        vec![
            "What would you like to create?",
            "Choose a project name:",
            "Enter your custom project name:",
            "Choose a license:",
            "Choose author name for license:",
            "Enter author name:",
            "Would you like to select additional features?",
            "Select additional features:",
        ]
    );
    // Nothing is written while resolving
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_same_answers_same_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let script = || {
        Scripted::new(vec![
            Answer::Pick("Go Project"),
            Answer::Pick("my-app"),
            Answer::Pick("Apache License 2.0"),
            Answer::Pick("default-dev"),
            Answer::No,
        ])
    };

    let first = resolve_interactive(&mut script(), &ctx(dir.path())).unwrap();
    let second = resolve_interactive(&mut script(), &ctx(dir.path())).unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);

    let config = first.unwrap();
    assert_eq!(config.project_name(), "my-app");
    assert_eq!(config.author(), Some("default-dev"));
    assert_eq!(config.features().count(), 0);
}

#[test]
fn test_no_license_skips_author() {
    let dir = tempfile::tempdir().unwrap();
    let mut prompter = Scripted::new(vec![
        Answer::Pick("Bash Project"),
        Answer::Pick("my-project"),
        Answer::Pick("No License"),
        Answer::No,
    ]);

    let config = resolve_interactive(&mut prompter, &ctx(dir.path()))
        .unwrap()
        .unwrap();
    assert!(config.license().is_none());
    assert!(config.author().is_none());
    assert!(!prompter
        .prompts()
        .contains(&"Choose author name for license:"));
}

#[test]
fn test_cancel_at_each_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let full = || {
        vec![
            Answer::Pick("Python Project"),
            Answer::Pick("custom name..."),
            Answer::Text("tool"),
            Answer::Pick("MIT License"),
            Answer::Pick("Enter custom name..."),
            Answer::Text("Ada"),
            Answer::Yes,
            Answer::Picks(&["Virtual Environment"]),
        ]
    };

    for cancel_at in 0..full().len() {
        let mut answers = full();
        answers.truncate(cancel_at);
        answers.push(Answer::Cancel);

        let mut prompter = Scripted::new(answers);
        let resolved = resolve_interactive(&mut prompter, &ctx(dir.path())).unwrap();
        assert!(resolved.is_none(), "cancel at prompt {} was ignored", cancel_at);
    }

    // Choosing the explicit Cancel entry behaves the same
    let mut prompter = Scripted::new(vec![Answer::Pick("Cancel")]);
    assert!(resolve_interactive(&mut prompter, &ctx(dir.path()))
        .unwrap()
        .is_none());

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_preset_names_are_not_offered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("my-app")).unwrap();

    let mut prompter = Scripted::new(vec![Answer::Pick("Node.js Project"), Answer::Cancel]);
    resolve_interactive(&mut prompter, &ctx(dir.path())).unwrap();

    assert_eq!(
        prompter.options("Choose a project name:"),
        ["my-project".to_string(), "custom name...".to_string()]
    );
}

#[test]
fn test_features_offered_per_type() {
    let expected: [(ProjectType, &[&str]); 6] = [
        (ProjectType::Python, &["Docker Support", "Virtual Environment"]),
        (ProjectType::Node, &["Docker Support", "Run npm install"]),
        (ProjectType::FastApi, &["Docker Support", "Virtual Environment"]),
        (ProjectType::NextJs, &["Docker Support", "Run npm install"]),
        (ProjectType::Go, &["Docker Support"]),
        (ProjectType::Bash, &["Docker Support"]),
    ];

    for (project_type, features) in expected {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new(vec![
            Answer::Pick(project_type.display_name()),
            Answer::Pick("my-app"),
            Answer::Pick("No License"),
            Answer::Yes,
            Answer::Picks(&[]),
        ]);
        resolve_interactive(&mut prompter, &ctx(dir.path()))
            .unwrap()
            .unwrap();

        let offered = prompter.options("Select additional features:");
        assert_eq!(offered, features, "features offered for {}", project_type);
    }
}
