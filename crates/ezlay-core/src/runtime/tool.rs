//! Best-effort execution of external tools
//!
//! git, npm, python and go are invoked as opaque commands inside the project
//! directory. Their failures never abort generation: the outcome is reported
//! as a [`ToolOutcome`] and the caller decides what to print.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A command line to run inside the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `git init`
    pub fn git_init() -> Self {
        Self::new("git", &["init"])
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Success,
    /// The program is not installed or not in PATH
    NotFound,
    Failed { code: Option<i32>, stderr: String },
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success)
    }
}

/// Runs external tools on behalf of the materializer
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
    async fn run(&self, invocation: &ToolInvocation, cwd: &Path) -> ToolOutcome;
}

/// Runs tools as real subprocesses, waiting for each to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    async fn run(&self, invocation: &ToolInvocation, cwd: &Path) -> ToolOutcome {
        tracing::debug!("Running `{}` in {}", invocation, cwd.display());

        let output = TokioCommand::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(out) if out.status.success() => ToolOutcome::Success,
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
                tracing::warn!(
                    "`{}` exited with {:?}: {}",
                    invocation,
                    out.status.code(),
                    stderr
                );
                ToolOutcome::Failed {
                    code: out.status.code(),
                    stderr,
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("`{}` not found in PATH", invocation.program);
                ToolOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!("Failed to start `{}`: {}", invocation, e);
                ToolOutcome::Failed {
                    code: None,
                    stderr: e.to_string(),
                }
            }
        }
    }
}
