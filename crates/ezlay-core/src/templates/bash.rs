//! Bash project with shared helpers and a shUnit2 test

use super::{Blueprint, ContainerTemplates, NextStep, TemplateFile};
use crate::project::ProjectConfiguration;

pub(super) fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    let name = config.project_name();

    Blueprint {
        dirs: vec!["scripts".to_string(), "tests".to_string(), "docs".to_string()],
        files: vec![
            TemplateFile::executable("scripts/main.sh", MAIN_SH),
            TemplateFile::executable("scripts/common.sh", COMMON_SH),
            TemplateFile::executable("tests/test_main.sh", TEST_MAIN_SH),
            TemplateFile::new("README.md", readme(name)),
        ],
        container: ContainerTemplates {
            dockerfile: DOCKERFILE.to_string(),
            compose: COMPOSE.to_string(),
        },
        heavy_action: None,
        next_steps: vec![
            NextStep {
                title: "Make scripts executable",
                commands: vec![
                    format!("cd {}", name),
                    "chmod +x scripts/*.sh tests/*.sh".to_string(),
                ],
            },
            NextStep::new("Run the main script", &["./scripts/main.sh"]),
        ],
    }
}

fn readme(name: &str) -> String {
    format!(
        r#"# {name}

Description of your bash project goes here.

## Requirements

- Bash 4.0 or later
- shUnit2 (for running tests)

## Usage

```bash
./scripts/main.sh
```

## Testing

```bash
./tests/test_main.sh
```
"#
    )
}

const MAIN_SH: &str = r#"#!/usr/bin/env bash

set -euo pipefail

# Script configuration
SCRIPT_DIR="$(cd "$(dirname "${BASH_SOURCE[0]}")" && pwd)"
PROJECT_ROOT="$(dirname "$SCRIPT_DIR")"

# Source common functions
source "$SCRIPT_DIR/common.sh"

# Main function
main() {
    echo "Hello, World!"
}

# Run main if script is executed directly
if [[ "${BASH_SOURCE[0]}" == "${0}" ]]; then
    main "$@"
fi
"#;

const COMMON_SH: &str = r#"#!/usr/bin/env bash

# Common functions used across scripts

# Log an error message
log_error() {
    echo "ERROR: $1" >&2
}

# Log an info message
log_info() {
    echo "INFO: $1"
}

# Check if a command exists
command_exists() {
    command -v "$1" >/dev/null 2>&1
}
"#;

const TEST_MAIN_SH: &str = r#"#!/usr/bin/env bash

set -euo pipefail

# Add your tests here
test_example() {
    assertTrue true
}

# Source shUnit2 if available
if [ -e "/usr/share/shunit2/shunit2" ]; then
    . /usr/share/shunit2/shunit2
else
    echo "shUnit2 not found. Please install it to run tests."
    exit 1
fi
"#;

const DOCKERFILE: &str = r#"FROM bash:5.2

WORKDIR /app

COPY . .

RUN chmod +x scripts/*.sh tests/*.sh

CMD ["bash", "scripts/main.sh"]
"#;

const COMPOSE: &str = r#"version: '3.8'
services:
  app:
    build: .
    volumes:
      - .:/app
"#;
