//! Standard Python project with src layout

use super::{Blueprint, ContainerTemplates, HeavyAction, NextStep, TemplateFile};
use crate::project::{Feature, ProjectConfiguration};
use crate::runtime::tool::ToolInvocation;

pub(super) fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    let name = config.project_name();
    let module = config.module_name();

    Blueprint {
        dirs: vec![
            "src".to_string(),
            format!("src/{}", module),
            "tests".to_string(),
            "docs".to_string(),
        ],
        files: vec![
            TemplateFile::new("README.md", readme(name, &module)),
            TemplateFile::new(".gitignore", GITIGNORE),
            TemplateFile::new("requirements.txt", ""),
            TemplateFile::new("requirements-dev.txt", REQUIREMENTS_DEV),
            TemplateFile::new("setup.py", setup_py(name)),
            TemplateFile::new(
                format!("src/{}/__init__.py", module),
                "\"\"\"Main module.\"\"\"\n\n__version__ = \"0.1.0\"\n",
            ),
            TemplateFile::new(format!("src/{}/main.py", module), MAIN_PY),
            TemplateFile::new("tests/test_main.py", TEST_MAIN_PY),
        ],
        container: ContainerTemplates {
            dockerfile: dockerfile(&module),
            compose: COMPOSE.to_string(),
        },
        heavy_action: venv_action(config),
        next_steps: venv_next_steps(name),
    }
}

/// `python3 -m venv venv`, shared with FastAPI projects
pub(super) fn venv_action(config: &ProjectConfiguration) -> Option<HeavyAction> {
    config.has(Feature::Venv).then(|| HeavyAction {
        label: "Creating virtual environment",
        invocation: ToolInvocation::new("python3", &["-m", "venv", "venv"]),
        fallback: None,
        note: "Could not create the virtual environment. Run: python3 -m venv venv".to_string(),
    })
}

pub(super) fn venv_next_steps(name: &str) -> Vec<NextStep> {
    vec![
        NextStep {
            title: "Create and activate virtual environment",
            commands: vec![
                format!("cd {}", name),
                "python -m venv venv".to_string(),
                "source venv/bin/activate  # On Windows: venv\\Scripts\\activate".to_string(),
            ],
        },
        NextStep::new(
            "Install dependencies",
            &["pip install -r requirements-dev.txt"],
        ),
    ]
}

fn readme(name: &str, module: &str) -> String {
    format!(
        r#"# {name}

Description of your project goes here.

## Installation

```bash
pip install -r requirements.txt
```

## Usage

```python
from {module} import main
```

## Development

1. Create and activate virtual environment:
```bash
python -m venv venv
source venv/bin/activate  # On Windows: venv\Scripts\activate
```

2. Install dependencies:
```bash
pip install -r requirements-dev.txt
```

3. Run tests:
```bash
pytest
```
"#
    )
}

fn setup_py(name: &str) -> String {
    format!(
        r#"from setuptools import setup, find_packages

setup(
    name="{name}",
    version="0.1.0",
    packages=find_packages(where="src"),
    package_dir={{"": "src"}},
    install_requires=[
        # Add your dependencies here
    ],
    extras_require={{
        "dev": [
            "pytest>=7.0.0",
            "black>=22.0.0",
            "flake8>=4.0.0",
            "mypy>=0.900",
        ],
    }},
    python_requires=">=3.7",
)
"#
    )
}

fn dockerfile(module: &str) -> String {
    format!(
        r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

CMD ["python", "src/{module}/main.py"]
"#
    )
}

const GITIGNORE: &str = "venv/
__pycache__/
*.egg-info/
.pytest_cache/
.mypy_cache/
";

const REQUIREMENTS_DEV: &str = "pytest>=7.0.0
black>=22.0.0
flake8>=4.0.0
mypy>=0.900
";

const MAIN_PY: &str = r#""""Main module implementation."""

def main():
    """Main function."""
    print("Hello, World!")

if __name__ == "__main__":
    main()
"#;

const TEST_MAIN_PY: &str = r#""""Test main module."""

def test_placeholder():
    """Placeholder test."""
    assert True
"#;

const COMPOSE: &str = r#"version: '3.8'
services:
  app:
    build: .
    volumes:
      - .:/app
    ports:
      - "8000:8000"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectType;

    #[test]
    fn test_module_dir_uses_underscores() {
        let config = ProjectConfiguration::new(ProjectType::Python, "data-tool");
        let bp = blueprint(&config);
        assert!(bp.dirs.contains(&"src/data_tool".to_string()));
        assert!(bp
            .files
            .iter()
            .any(|f| f.path == "src/data_tool/__init__.py"));
    }

    #[test]
    fn test_setup_py_names_project() {
        let text = setup_py("data-tool");
        assert!(text.contains("name=\"data-tool\""));
        assert!(text.contains("package_dir={\"\": \"src\"}"));
    }

    #[test]
    fn test_venv_only_when_requested() {
        let plain = ProjectConfiguration::new(ProjectType::Python, "app");
        assert!(blueprint(&plain).heavy_action.is_none());

        let with_venv = plain.with_feature(Feature::Venv);
        let action = blueprint(&with_venv).heavy_action.unwrap();
        assert_eq!(action.invocation.to_string(), "python3 -m venv venv");
        assert!(action.fallback.is_none());
    }
}
