//! Writes a project to disk from its blueprint
//!
//! Order is fixed: project root, subdirectories, boilerplate files, the
//! type's heavy action, then the shared post-steps (git, license, container
//! pair). Nothing is rolled back on failure.

use crate::error::{Error, Result};
use crate::project::{License, ProjectConfiguration};
use crate::runtime::tool::{ToolInvocation, ToolOutcome, ToolRunner};
use crate::templates::{self, TemplateFile, LICENSE_FILE};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What happened to a generator's heavy action
#[derive(Debug, Clone)]
pub struct ActionReport {
    pub label: &'static str,
    pub command: String,
    pub outcome: ToolOutcome,
    /// Placeholder written because the tool was missing
    pub fallback: Option<String>,
    /// Message for the user when the action did not succeed
    pub note: Option<String>,
}

/// Summary of a finished generation
#[derive(Debug, Clone)]
pub struct MaterializeReport {
    pub path: PathBuf,
    pub config: ProjectConfiguration,
    /// Relative paths written by ezlay, in order
    pub files: Vec<String>,
    pub heavy_action: Option<ActionReport>,
    pub git: ToolOutcome,
    pub license: Option<License>,
    pub container: bool,
}

impl MaterializeReport {
    pub fn git_initialized(&self) -> bool {
        self.git.is_success()
    }
}

/// Create the project described by `config` inside `base_dir`
pub async fn materialize<R: ToolRunner>(
    config: ProjectConfiguration,
    base_dir: &Path,
    runner: &R,
) -> Result<MaterializeReport> {
    let root = base_dir.join(config.project_name());
    let blueprint = templates::blueprint(&config);

    tracing::debug!(
        "Generating {} project at {}",
        config.project_type(),
        root.display()
    );

    create_root(&root).await?;

    for dir in &blueprint.dirs {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
    }

    let mut files = Vec::new();
    for file in &blueprint.files {
        write_file(&root, file).await?;
        files.push(file.path.clone());
    }

    let heavy_action = match &blueprint.heavy_action {
        Some(action) => {
            let outcome = runner.run(&action.invocation, &root).await;
            let mut fallback = None;
            if let (ToolOutcome::NotFound, Some(file)) = (&outcome, &action.fallback) {
                write_file(&root, file).await?;
                files.push(file.path.clone());
                fallback = Some(file.path.clone());
            }
            Some(ActionReport {
                label: action.label,
                command: action.invocation.to_string(),
                note: (!outcome.is_success()).then(|| action.note.clone()),
                outcome,
                fallback,
            })
        }
        None => None,
    };

    // Post-step 1: version control, best effort
    let git = runner.run(&ToolInvocation::git_init(), &root).await;
    if !git.is_success() {
        tracing::debug!("git init did not succeed: {:?}", git);
    }

    // Post-steps 2 and 3: license, then container pair
    let mut license = None;
    let mut container = false;
    for file in templates::post_step_files(&config, &blueprint) {
        write_file(&root, &file).await?;
        if file.path == LICENSE_FILE {
            license = config.license();
        } else {
            container = true;
        }
        files.push(file.path);
    }
    if config.license().is_some() && license.is_none() {
        tracing::warn!("License requested without an author; skipping {}", LICENSE_FILE);
    }

    Ok(MaterializeReport {
        path: root,
        config,
        files,
        heavy_action,
        git,
        license,
        container,
    })
}

/// Create the project root, failing if anything already exists there
async fn create_root(root: &Path) -> Result<()> {
    match fs::create_dir(root).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::ProjectExists {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(Error::io(root, e)),
    }
}

async fn write_file(root: &Path, file: &TemplateFile) -> Result<()> {
    let path = root.join(&file.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&path, &file.contents)
        .await
        .map_err(|e| Error::io(&path, e))?;

    if file.executable {
        set_executable(&path).await?;
    }
    tracing::debug!("Wrote {}", file.path);
    Ok(())
}

#[cfg(unix)]
async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
