//! Runtime detection for the toolchains each project type relies on

use crate::project::ProjectType;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe `program <flag>` and keep the first line it prints
fn probe(name: &'static str, program: &str, flag: &str) -> RuntimeInfo {
    let output = Command::new(program).arg(flag).output();

    match output {
        Ok(out) if out.status.success() => {
            let raw = if out.stdout.is_empty() {
                &out.stderr
            } else {
                &out.stdout
            };
            let version = String::from_utf8_lossy(raw)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Python 3 is available
pub fn check_python() -> RuntimeInfo {
    probe("Python 3", "python3", "--version")
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node", "--version")
}

/// Check if Bash is available
pub fn check_bash() -> RuntimeInfo {
    probe("Bash", "bash", "--version")
}

/// Check if Go is available (`go` has no `--version` flag)
pub fn check_go() -> RuntimeInfo {
    probe("Go", "go", "version")
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    probe("git", "git", "--version")
}

/// Runtimes a project type needs to run, plus git. Advisory only.
pub fn check_runtimes(project_type: ProjectType) -> Vec<RuntimeInfo> {
    let runtime = match project_type {
        ProjectType::Python | ProjectType::FastApi => check_python(),
        ProjectType::Node | ProjectType::NextJs => check_node(),
        ProjectType::Bash => check_bash(),
        ProjectType::Go => check_go(),
    };
    vec![runtime, check_git()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_runtime_reported_unavailable() {
        let info = probe("Nothing", "ezlay-definitely-not-a-real-tool", "--version");
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[test]
    fn test_check_runtimes_always_includes_git() {
        for project_type in ProjectType::ALL {
            let infos = check_runtimes(project_type);
            assert_eq!(infos.len(), 2);
            assert_eq!(infos[1].name, "git");
        }
    }
}
