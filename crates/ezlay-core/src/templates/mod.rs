//! Per-type blueprints and the file plan derived from them
//!
//! This module provides:
//! - [`Blueprint`]: the directories, files, container pair, heavy action and
//!   next steps for one project type
//! - [`blueprint`]: the exhaustive dispatch from a configuration to its blueprint
//! - [`plan`]: the complete, ordered list of paths a configuration produces
//! - License rendering

mod bash;
mod fastapi;
mod go;
pub mod license;
mod nextjs;
mod node;
mod python;

use crate::error::Result;
use crate::project::{Feature, ProjectConfiguration, ProjectType};
use crate::runtime::tool::ToolInvocation;
use serde::Serialize;

pub use license::render_license;

/// Name of the container build descriptor
pub const DOCKERFILE: &str = "Dockerfile";
/// Name of the multi-service orchestration descriptor
pub const COMPOSE_FILE: &str = "docker-compose.yml";
/// Name of the license file
pub const LICENSE_FILE: &str = "LICENSE";

/// A file to write, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub contents: String,
    pub executable: bool,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            executable: false,
        }
    }

    /// A file written with mode 0o755
    pub fn executable(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            executable: true,
            ..Self::new(path, contents)
        }
    }
}

/// Container build descriptor and orchestration descriptor for one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerTemplates {
    pub dockerfile: String,
    pub compose: String,
}

impl ContainerTemplates {
    pub fn files(&self) -> [TemplateFile; 2] {
        [
            TemplateFile::new(DOCKERFILE, self.dockerfile.clone()),
            TemplateFile::new(COMPOSE_FILE, self.compose.clone()),
        ]
    }
}

/// Optional slow step a generator runs after writing its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeavyAction {
    /// Short label for progress output, e.g. "Creating virtual environment"
    pub label: &'static str,
    pub invocation: ToolInvocation,
    /// Written instead when the tool is not installed
    pub fallback: Option<TemplateFile>,
    /// Shown when the tool is missing or fails
    pub note: String,
}

/// One entry of the "next steps" guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub title: &'static str,
    pub commands: Vec<String>,
}

impl NextStep {
    pub fn new(title: &'static str, commands: &[&str]) -> Self {
        Self {
            title,
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Everything a generator needs to build one project type
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Subdirectories, parents before children
    pub dirs: Vec<String>,
    pub files: Vec<TemplateFile>,
    pub container: ContainerTemplates,
    pub heavy_action: Option<HeavyAction>,
    pub next_steps: Vec<NextStep>,
}

/// Select the blueprint for the configured project type
pub fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    match config.project_type() {
        ProjectType::Python => python::blueprint(config),
        ProjectType::Node => node::blueprint(config),
        ProjectType::Bash => bash::blueprint(config),
        ProjectType::FastApi => fastapi::blueprint(config),
        ProjectType::NextJs => nextjs::blueprint(config),
        ProjectType::Go => go::blueprint(config),
    }
}

/// Next steps for a configuration, including Docker commands when requested
pub fn next_steps(config: &ProjectConfiguration) -> Vec<NextStep> {
    let mut steps = blueprint(config).next_steps;
    if config.has(Feature::Docker) {
        steps.push(NextStep::new(
            "Build and run with Docker Compose",
            &["docker-compose up --build"],
        ));
    }
    steps
}

/// A planned file as shown by `--dry-run`
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub path: String,
    pub executable: bool,
    pub bytes: usize,
}

/// Everything a configuration will create, in creation order
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub project: ProjectConfiguration,
    pub directories: Vec<String>,
    pub files: Vec<PlannedFile>,
    /// Command run after the files are written, if any
    pub command: Option<String>,
}

impl Plan {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Every relative path in the plan, directories first
    pub fn paths(&self) -> Vec<String> {
        self.directories
            .iter()
            .cloned()
            .chain(self.files.iter().map(|f| f.path.clone()))
            .collect()
    }
}

/// Files written by the shared post-steps (license, container pair)
pub fn post_step_files(config: &ProjectConfiguration, blueprint: &Blueprint) -> Vec<TemplateFile> {
    let mut files = Vec::new();
    if let Some((license, author)) = config.license_grant() {
        files.push(TemplateFile::new(
            LICENSE_FILE,
            render_license(license, author, license::current_year()),
        ));
    }
    if config.has(Feature::Docker) {
        files.extend(blueprint.container.files());
    }
    files
}

/// Build the deterministic file plan for a configuration
///
/// Fallback files of the heavy action are listed, since the plan cannot know
/// whether the tool is installed.
pub fn plan(config: &ProjectConfiguration) -> Plan {
    let blueprint = blueprint(config);
    let planned = |file: &TemplateFile| PlannedFile {
        path: file.path.clone(),
        executable: file.executable,
        bytes: file.contents.len(),
    };

    let mut files: Vec<PlannedFile> = blueprint.files.iter().map(planned).collect();
    let command = blueprint.heavy_action.as_ref().map(|action| {
        if let Some(fallback) = &action.fallback {
            files.push(planned(fallback));
        }
        action.invocation.to_string()
    });
    files.extend(post_step_files(config, &blueprint).iter().map(planned));

    Plan {
        project: config.clone(),
        directories: blueprint.dirs,
        files,
        command,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::License;

    #[test]
    fn test_every_type_has_readme() {
        for project_type in ProjectType::ALL {
            let config = ProjectConfiguration::new(project_type, "sample");
            let bp = blueprint(&config);
            assert!(
                bp.files.iter().any(|f| f.path == "README.md"),
                "{} is missing README.md",
                project_type
            );
        }
    }

    #[test]
    fn test_dirs_listed_parent_first() {
        for project_type in ProjectType::ALL {
            let config = ProjectConfiguration::new(project_type, "sample");
            let dirs = blueprint(&config).dirs;
            for (i, dir) in dirs.iter().enumerate() {
                if let Some((parent, _)) = dir.rsplit_once('/') {
                    let pos = dirs.iter().position(|d| d == parent);
                    assert!(
                        pos.map_or(true, |p| p < i),
                        "{} listed before its parent in {}",
                        dir,
                        project_type
                    );
                }
            }
        }
    }

    #[test]
    fn test_files_live_in_declared_dirs() {
        for project_type in ProjectType::ALL {
            let config = ProjectConfiguration::new(project_type, "sample");
            let bp = blueprint(&config);
            for file in &bp.files {
                if let Some((parent, _)) = file.path.rsplit_once('/') {
                    assert!(
                        bp.dirs.iter().any(|d| d == parent),
                        "{} has no declared parent in {}",
                        file.path,
                        project_type
                    );
                }
            }
        }
    }

    #[test]
    fn test_plan_includes_post_step_files() {
        let config = ProjectConfiguration::new(ProjectType::Node, "web")
            .with_license(Some(License::Mit))
            .with_author(Some("Ada".to_string()))
            .with_feature(Feature::Docker);
        let paths = plan(&config).paths();
        assert!(paths.contains(&LICENSE_FILE.to_string()));
        assert!(paths.contains(&DOCKERFILE.to_string()));
        assert!(paths.contains(&COMPOSE_FILE.to_string()));
    }

    #[test]
    fn test_plan_skips_license_without_author() {
        let config =
            ProjectConfiguration::new(ProjectType::Node, "web").with_license(Some(License::Mit));
        assert!(!plan(&config).paths().contains(&LICENSE_FILE.to_string()));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let config = ProjectConfiguration::new(ProjectType::FastApi, "api")
            .with_features([Feature::Docker, Feature::Venv]);
        assert_eq!(plan(&config).paths(), plan(&config.clone()).paths());
        assert_eq!(
            plan(&config).command.as_deref(),
            Some("python3 -m venv venv")
        );
    }

    #[test]
    fn test_plan_yaml_names_project() {
        let config = ProjectConfiguration::new(ProjectType::Go, "svc");
        let yaml = plan(&config).to_yaml().unwrap();
        assert!(yaml.contains("project_name: svc"));
        assert!(yaml.contains("go mod init svc"));
        assert!(yaml.contains("go.mod"));
    }

    #[test]
    fn test_next_steps_per_type() {
        let expected: [(ProjectType, &str, &[&str]); 6] = [
            (
                ProjectType::Python,
                "Create and activate virtual environment",
                &["cd demo", "python -m venv venv"],
            ),
            (
                ProjectType::FastApi,
                "Create and activate virtual environment",
                &["cd demo", "python -m venv venv"],
            ),
            (ProjectType::Node, "Install dependencies", &["cd demo", "npm install"]),
            (ProjectType::NextJs, "Install dependencies", &["cd demo", "npm install"]),
            (ProjectType::Go, "Download dependencies", &["cd demo", "go mod tidy"]),
            (
                ProjectType::Bash,
                "Make scripts executable",
                &["cd demo", "chmod +x scripts/*.sh tests/*.sh"],
            ),
        ];

        for (project_type, title, commands) in expected {
            let steps = next_steps(&ProjectConfiguration::new(project_type, "demo"));
            assert_eq!(steps.len(), 2, "{}", project_type);
            assert_eq!(steps[0].title, title, "{}", project_type);
            assert_eq!(&steps[0].commands[..commands.len()], commands, "{}", project_type);
            assert!(steps
                .iter()
                .all(|step| !step.commands.iter().any(|c| c.contains("docker"))));
        }
    }

    #[test]
    fn test_docker_next_steps_appended() {
        let config =
            ProjectConfiguration::new(ProjectType::Bash, "tools").with_feature(Feature::Docker);
        let steps = next_steps(&config);
        assert_eq!(
            steps.last().unwrap().commands,
            vec!["docker-compose up --build".to_string()]
        );
    }
}
