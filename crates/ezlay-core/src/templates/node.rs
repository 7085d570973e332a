//! Node.js project with ESLint and Jest

use super::{Blueprint, ContainerTemplates, HeavyAction, NextStep, TemplateFile};
use crate::project::{Feature, ProjectConfiguration};
use crate::runtime::tool::ToolInvocation;
use serde_json::json;

pub(super) fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    let name = config.project_name();

    Blueprint {
        dirs: vec!["src".to_string(), "tests".to_string(), "public".to_string()],
        files: vec![
            TemplateFile::new("package.json", package_json(config)),
            TemplateFile::new("README.md", readme(name)),
            TemplateFile::new(".gitignore", GITIGNORE),
            TemplateFile::new("src/index.js", "console.log(\"Hello, World!\");\n"),
            TemplateFile::new("tests/index.test.js", TEST_JS),
        ],
        container: ContainerTemplates {
            dockerfile: DOCKERFILE.to_string(),
            compose: COMPOSE.to_string(),
        },
        heavy_action: npm_install_action(config),
        next_steps: npm_next_steps(name),
    }
}

/// `npm install`, shared with Next.js projects
pub(super) fn npm_install_action(config: &ProjectConfiguration) -> Option<HeavyAction> {
    config.has(Feature::NpmInstall).then(|| HeavyAction {
        label: "Installing npm dependencies",
        invocation: ToolInvocation::new("npm", &["install"]),
        fallback: None,
        note: "npm install did not complete. Run it manually inside the project.".to_string(),
    })
}

pub(super) fn npm_next_steps(name: &str) -> Vec<NextStep> {
    vec![
        NextStep {
            title: "Install dependencies",
            commands: vec![format!("cd {}", name), "npm install".to_string()],
        },
        NextStep::new("Start development server", &["npm run dev"]),
    ]
}

/// Manifest license field: the chosen SPDX id, npm's ISC default otherwise
pub(super) fn manifest_license(config: &ProjectConfiguration) -> &'static str {
    config.license().map_or("ISC", |l| l.spdx())
}

fn package_json(config: &ProjectConfiguration) -> String {
    let manifest = json!({
        "name": config.project_name(),
        "version": "1.0.0",
        "description": "",
        "main": "src/index.js",
        "scripts": {
            "start": "node src/index.js",
            "dev": "nodemon src/index.js",
            "test": "jest",
            "lint": "eslint src/**/*.js"
        },
        "keywords": [],
        "author": config.author().unwrap_or(""),
        "license": manifest_license(config),
        "devDependencies": {
            "jest": "^29.0.0",
            "nodemon": "^3.0.0",
            "eslint": "^8.0.0"
        }
    });
    pretty(&manifest)
}

/// Two-space indented JSON with a trailing newline
pub(super) fn pretty(value: &serde_json::Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}

fn readme(name: &str) -> String {
    format!(
        r#"# {name}

Description of your project goes here.

## Installation

```bash
npm install
```

## Development

```bash
npm run dev
```

## Testing

```bash
npm test
```
"#
    )
}

const GITIGNORE: &str = "node_modules/
.env
coverage/
.DS_Store
";

const TEST_JS: &str = r#"test('placeholder test', () => {
    expect(true).toBe(true);
});
"#;

const DOCKERFILE: &str = r#"FROM node:18-slim

WORKDIR /app

COPY package*.json ./
RUN npm install

COPY . .

CMD ["npm", "start"]
"#;

const COMPOSE: &str = r#"version: '3.8'
services:
  app:
    build: .
    volumes:
      - .:/app
      - /app/node_modules
    ports:
      - "3000:3000"
"#;
