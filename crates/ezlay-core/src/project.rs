//! Project configuration model
//!
//! A [`ProjectConfiguration`] is built once by the resolver and handed to the
//! materializer by value. The closed enums here are the only vocabulary the
//! rest of the crate dispatches on.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Supported project layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Python,
    Node,
    Bash,
    FastApi,
    NextJs,
    Go,
}

impl ProjectType {
    /// All types in prompt order
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Python,
        ProjectType::Node,
        ProjectType::FastApi,
        ProjectType::NextJs,
        ProjectType::Go,
        ProjectType::Bash,
    ];

    /// Identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ProjectType::Python => "python",
            ProjectType::Node => "node",
            ProjectType::Bash => "bash",
            ProjectType::FastApi => "fastapi",
            ProjectType::NextJs => "nextjs",
            ProjectType::Go => "go",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Python => "Python Project",
            ProjectType::Node => "Node.js Project",
            ProjectType::Bash => "Bash Project",
            ProjectType::FastApi => "FastAPI Project",
            ProjectType::NextJs => "Next.js Project",
            ProjectType::Go => "Go Project",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProjectType::Python => "Standard Python project with src layout and tests",
            ProjectType::Node => "Modern Node.js project with ESLint and Jest",
            ProjectType::Bash => "Organized Bash project with logging and tests",
            ProjectType::FastApi => "FastAPI project with SQLAlchemy and Alembic",
            ProjectType::NextJs => "Next.js project with TypeScript and Tailwind",
            ProjectType::Go => "Standard Go project layout",
        }
    }

    /// Whether `feature` can be requested for this type
    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::Docker => true,
            Feature::Venv => matches!(self, ProjectType::Python | ProjectType::FastApi),
            Feature::NpmInstall => matches!(self, ProjectType::Node | ProjectType::NextJs),
        }
    }

    /// Features offered for this type, in prompt order
    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.supports(*f))
            .collect()
    }

    fn available() -> String {
        ProjectType::ALL
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownProjectType {
                project_type: s.to_string(),
                available: ProjectType::available(),
            })
    }
}

/// Bundled license templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
}

impl License {
    pub const ALL: [License; 2] = [License::Mit, License::Apache2];

    /// SPDX identifier, also used in package manifests
    pub fn spdx(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Apache2 => "Apache License 2.0",
        }
    }

    /// Parse a license flag. `none` means no license.
    pub fn parse_optional(s: &str) -> Result<Option<License>> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(None),
            "mit" => Ok(Some(License::Mit)),
            "apache" | "apache2" | "apache-2.0" => Ok(Some(License::Apache2)),
            _ => Err(Error::UnknownLicense {
                license: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spdx())
    }
}

/// Optional add-ons whose availability depends on the project type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Docker,
    Venv,
    NpmInstall,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Docker, Feature::Venv, Feature::NpmInstall];

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Docker => "Docker Support",
            Feature::Venv => "Virtual Environment",
            Feature::NpmInstall => "Run npm install",
        }
    }
}

/// Fully resolved description of the project to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfiguration {
    project_type: ProjectType,
    project_name: String,
    license: Option<License>,
    author: Option<String>,
    features: BTreeSet<Feature>,
}

impl ProjectConfiguration {
    pub fn new(project_type: ProjectType, project_name: impl Into<String>) -> Self {
        Self {
            project_type,
            project_name: project_name.into(),
            license: None,
            author: None,
            features: BTreeSet::new(),
        }
    }

    pub fn with_license(mut self, license: Option<License>) -> Self {
        self.license = license;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author.filter(|a| !a.trim().is_empty());
        self
    }

    /// Add a feature. Features the project type does not support are dropped.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        if self.project_type.supports(feature) {
            self.features.insert(feature);
        } else {
            tracing::warn!(
                "{} does not apply to {} projects; ignoring",
                feature.display_name(),
                self.project_type
            );
        }
        self
    }

    pub fn with_features(self, features: impl IntoIterator<Item = Feature>) -> Self {
        features
            .into_iter()
            .fold(self, |config, feature| config.with_feature(feature))
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn license(&self) -> Option<License> {
        self.license
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    /// License and author, when both are present
    pub fn license_grant(&self) -> Option<(License, &str)> {
        Some((self.license?, self.author()?))
    }

    /// Python import name derived from the project name
    pub fn module_name(&self) -> String {
        self.project_name.replace('-', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_type() {
        assert_eq!("python".parse::<ProjectType>().unwrap(), ProjectType::Python);
        assert_eq!("FastAPI".parse::<ProjectType>().unwrap(), ProjectType::FastApi);
        assert_eq!(" nextjs ".parse::<ProjectType>().unwrap(), ProjectType::NextJs);
    }

    #[test]
    fn test_unknown_project_type_lists_available() {
        let err = "rails".parse::<ProjectType>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rails"));
        assert!(message.contains("python, node, fastapi, nextjs, go, bash"));
    }

    #[test]
    fn test_parse_license() {
        assert_eq!(License::parse_optional("MIT").unwrap(), Some(License::Mit));
        assert_eq!(
            License::parse_optional("apache").unwrap(),
            Some(License::Apache2)
        );
        assert_eq!(License::parse_optional("none").unwrap(), None);
        assert!(License::parse_optional("gpl").is_err());
    }

    #[test]
    fn test_feature_applicability() {
        assert!(ProjectType::Python.supports(Feature::Venv));
        assert!(ProjectType::FastApi.supports(Feature::Venv));
        assert!(!ProjectType::Node.supports(Feature::Venv));
        assert!(ProjectType::NextJs.supports(Feature::NpmInstall));
        assert!(!ProjectType::Go.supports(Feature::NpmInstall));
        for project_type in ProjectType::ALL {
            assert!(project_type.supports(Feature::Docker));
        }
        assert_eq!(ProjectType::Bash.features(), vec![Feature::Docker]);
    }

    #[test]
    fn test_inapplicable_feature_dropped() {
        let config = ProjectConfiguration::new(ProjectType::Node, "web")
            .with_features([Feature::Venv, Feature::NpmInstall]);
        assert!(config.has(Feature::NpmInstall));
        assert!(!config.has(Feature::Venv));
    }

    #[test]
    fn test_license_grant_requires_author() {
        let config = ProjectConfiguration::new(ProjectType::Bash, "tools")
            .with_license(Some(License::Mit));
        assert!(config.license_grant().is_none());

        let config = config.with_author(Some("Ada".to_string()));
        assert_eq!(config.license_grant(), Some((License::Mit, "Ada")));
    }

    #[test]
    fn test_blank_author_treated_as_missing() {
        let config = ProjectConfiguration::new(ProjectType::Go, "svc")
            .with_license(Some(License::Apache2))
            .with_author(Some("   ".to_string()));
        assert!(config.author().is_none());
    }

    #[test]
    fn test_module_name() {
        let config = ProjectConfiguration::new(ProjectType::Python, "my-cool-app");
        assert_eq!(config.module_name(), "my_cool_app");
    }
}
