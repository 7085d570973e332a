//! Turns command-line arguments or prompt answers into a [`ProjectConfiguration`]
//!
//! Nothing in this module touches the filesystem beyond existence checks, so
//! a cancelled or rejected resolution never leaves anything behind.

use crate::error::{Error, Result};
use crate::project::{Feature, License, ProjectConfiguration, ProjectType};
use std::path::{Path, PathBuf};

/// Environment variables consulted for the default author, in order
pub const AUTHOR_ENV_VARS: &[&str] = &["EZLAY_AUTHOR", "USER", "USERNAME"];

/// Project names offered before the free-text option
pub const PRESET_NAMES: &[&str] = &["my-app", "my-project"];

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project type identifier (python, node, bash, fastapi, nextjs, go)
    pub project_type: Option<String>,

    /// Project name, also the directory to create
    pub project_name: Option<String>,

    /// License identifier (mit, apache, none)
    pub license: Option<String>,

    /// Author written into the license and package manifests
    pub author: Option<String>,

    /// Create a virtual environment (Python projects)
    pub venv: bool,

    /// Run npm install (Node.js projects)
    pub npm_install: bool,

    /// Add a Dockerfile and docker-compose.yml
    pub docker: bool,

    /// Print the plan instead of writing files
    pub dry_run: bool,
}

impl CreateArgs {
    fn features(&self) -> Vec<Feature> {
        [
            (self.docker, Feature::Docker),
            (self.venv, Feature::Venv),
            (self.npm_install, Feature::NpmInstall),
        ]
        .into_iter()
        .filter_map(|(on, feature)| on.then_some(feature))
        .collect()
    }
}

/// Inputs to resolution that come from the environment
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Directory the project is created in
    pub base_dir: PathBuf,
    /// Suggested author when the user picks the default
    pub default_author: String,
}

impl ResolveContext {
    pub fn new(base_dir: impl Into<PathBuf>, default_author: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            default_author: default_author.into(),
        }
    }

    /// Current directory and [`default_author`]
    pub fn from_env() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(base_dir, default_author())
    }
}

/// Default author from the environment, `user` when nothing is set
pub fn default_author() -> String {
    author_from(|var| std::env::var(var).ok())
}

/// First non-blank value among [`AUTHOR_ENV_VARS`] as reported by `lookup`
fn author_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    AUTHOR_ENV_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "user".to_string())
}

/// Check a project name: non-empty, alphanumeric with `-`/`_`, starting with
/// a letter or digit, and not an existing path under `base_dir`
pub fn validate_project_name(name: &str, base_dir: &Path) -> Result<()> {
    let invalid = |reason| Error::InvalidProjectName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "name must be alphanumeric (hyphens and underscores allowed)",
        ));
    }
    if !name.starts_with(char::is_alphanumeric) {
        return Err(invalid("name must start with a letter or digit"));
    }

    let path = base_dir.join(name);
    if path.exists() {
        return Err(Error::ProjectExists { path });
    }
    Ok(())
}

/// Outcome of the non-interactive path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsResolution {
    Complete(ProjectConfiguration),
    /// Type or name missing; fall back to prompting
    Incomplete,
}

/// Build a configuration from explicit arguments
pub fn resolve_args(args: &CreateArgs, ctx: &ResolveContext) -> Result<ArgsResolution> {
    let (Some(project_type), Some(project_name)) = (&args.project_type, &args.project_name)
    else {
        return Ok(ArgsResolution::Incomplete);
    };

    let project_type: ProjectType = project_type.parse()?;
    validate_project_name(project_name, &ctx.base_dir)?;
    let license = match &args.license {
        Some(license) => License::parse_optional(license)?,
        None => None,
    };

    tracing::debug!("Resolved {} project '{}' from arguments", project_type, project_name);

    Ok(ArgsResolution::Complete(
        ProjectConfiguration::new(project_type, project_name.as_str())
            .with_license(license)
            .with_author(license.and(args.author.clone()))
            .with_features(args.features()),
    ))
}

/// One option in a selection prompt
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
    pub hint: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Free-text validator; `Err` carries the message shown to the user
pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String>>;

/// Terminal interaction used by the interactive path
///
/// Every method returns `Ok(None)` when the user cancels the prompt.
pub trait Prompter {
    fn select<T: Clone + Eq>(&mut self, prompt: &str, choices: Vec<Choice<T>>)
        -> Result<Option<T>>;

    fn input(&mut self, prompt: &str, validator: Validator) -> Result<Option<String>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>>;

    fn multiselect<T: Clone + Eq>(
        &mut self,
        prompt: &str,
        choices: Vec<Choice<T>>,
    ) -> Result<Option<Vec<T>>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameChoice {
    Preset(&'static str),
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthorChoice {
    Custom,
    Default,
}

/// Non-empty text answer, `None` otherwise
fn non_empty(answer: Option<String>) -> Option<String> {
    answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Ask the fixed question sequence. `Ok(None)` means the user cancelled.
pub fn resolve_interactive<P: Prompter>(
    prompter: &mut P,
    ctx: &ResolveContext,
) -> Result<Option<ProjectConfiguration>> {
    // 1. Project type
    let mut type_choices: Vec<Choice<Option<ProjectType>>> = ProjectType::ALL
        .into_iter()
        .map(|t| Choice::new(Some(t), t.display_name()).hint(t.description()))
        .collect();
    type_choices.push(Choice::new(None, "Cancel"));

    let Some(Some(project_type)) = prompter.select("What would you like to create?", type_choices)?
    else {
        return Ok(None);
    };

    // 2. Project name
    let mut name_choices: Vec<Choice<NameChoice>> = PRESET_NAMES
        .iter()
        .copied()
        .filter(|name| !ctx.base_dir.join(name).exists())
        .map(|name| Choice::new(NameChoice::Preset(name), name))
        .collect();
    name_choices.push(Choice::new(NameChoice::Custom, "custom name..."));

    let project_name = match prompter.select("Choose a project name:", name_choices)? {
        Some(NameChoice::Preset(name)) => name.to_string(),
        Some(NameChoice::Custom) => {
            let base_dir = ctx.base_dir.clone();
            let validator: Validator = Box::new(move |text: &str| {
                validate_project_name(text.trim(), &base_dir).map_err(|e| e.to_string())
            });
            match non_empty(prompter.input("Enter your custom project name:", validator)?) {
                Some(name) => name,
                None => return Ok(None),
            }
        }
        None => return Ok(None),
    };
    validate_project_name(&project_name, &ctx.base_dir)?;

    // 3. License
    let mut license_choices: Vec<Choice<Option<License>>> = License::ALL
        .into_iter()
        .map(|l| Choice::new(Some(l), l.display_name()))
        .collect();
    license_choices.push(Choice::new(None, "No License"));

    let Some(license) = prompter.select("Choose a license:", license_choices)? else {
        return Ok(None);
    };

    // 4. Author, only for licensed projects
    let author = match license {
        Some(_) => {
            let author_choices = vec![
                Choice::new(AuthorChoice::Custom, "Enter custom name..."),
                Choice::new(AuthorChoice::Default, ctx.default_author.as_str()),
            ];
            match prompter.select("Choose author name for license:", author_choices)? {
                Some(AuthorChoice::Default) => Some(ctx.default_author.clone()),
                Some(AuthorChoice::Custom) => {
                    let validator: Validator = Box::new(|text: &str| {
                        if text.trim().is_empty() {
                            Err("Author name must not be empty".to_string())
                        } else {
                            Ok(())
                        }
                    });
                    match non_empty(prompter.input("Enter author name:", validator)?) {
                        Some(author) => Some(author),
                        None => return Ok(None),
                    }
                }
                None => return Ok(None),
            }
        }
        None => None,
    };

    // 5. Features offered for this type
    let features = match prompter.confirm("Would you like to select additional features?", true)? {
        Some(true) => {
            let feature_choices = project_type
                .features()
                .into_iter()
                .map(|f| Choice::new(f, f.display_name()))
                .collect();
            match prompter.multiselect("Select additional features:", feature_choices)? {
                Some(features) => features,
                None => return Ok(None),
            }
        }
        Some(false) => Vec::new(),
        None => return Ok(None),
    };

    tracing::debug!(
        "Resolved {} project '{}' interactively",
        project_type,
        project_name
    );

    Ok(Some(
        ProjectConfiguration::new(project_type, project_name)
            .with_license(license)
            .with_author(author)
            .with_features(features),
    ))
}
