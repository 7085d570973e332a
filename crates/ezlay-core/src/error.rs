//! Error types for ezlay-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ezlay-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a configuration or materializing a project
#[derive(Error, Debug)]
pub enum Error {
    /// Requested project type is not one of the supported set
    #[error("Invalid project type '{project_type}'. Available types: {available}")]
    UnknownProjectType {
        project_type: String,
        available: String,
    },

    /// Requested license is not one of the bundled templates
    #[error("Invalid license '{license}'. Available licenses: mit, apache, none")]
    UnknownLicense { license: String },

    /// Project name failed validation
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// Target directory already exists
    #[error("Directory '{}' already exists", path.display())]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed during generation
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal prompt failed for a reason other than cancellation
    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Plan could not be rendered
    #[error("Failed to render plan: {0}")]
    Render(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
