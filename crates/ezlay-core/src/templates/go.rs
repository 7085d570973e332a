//! Standard Go project layout

use super::{Blueprint, ContainerTemplates, HeavyAction, NextStep, TemplateFile};
use crate::project::ProjectConfiguration;
use crate::runtime::tool::ToolInvocation;

pub(super) fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    let name = config.project_name();

    Blueprint {
        dirs: vec![
            "cmd".to_string(),
            format!("cmd/{}", name),
            "internal".to_string(),
            "pkg".to_string(),
        ],
        files: vec![
            TemplateFile::new(format!("cmd/{}/main.go", name), main_go(name)),
            TemplateFile::new(format!("cmd/{}/main_test.go", name), MAIN_TEST_GO),
            TemplateFile::new("Makefile", makefile(name)),
            TemplateFile::new("README.md", readme(name)),
        ],
        container: ContainerTemplates {
            dockerfile: dockerfile(name),
            compose: COMPOSE.to_string(),
        },
        // go.mod always comes from the toolchain, or a placeholder without it
        heavy_action: Some(HeavyAction {
            label: "Initializing Go module",
            invocation: ToolInvocation::new("go", &["mod", "init", name]),
            fallback: Some(TemplateFile::new(
                "go.mod",
                format!("module {}\n\ngo 1.16\n", name),
            )),
            note: format!(
                "Go is not installed; wrote a placeholder go.mod. \
                 Install Go and run: go mod init {}",
                name
            ),
        }),
        next_steps: vec![
            NextStep {
                title: "Download dependencies",
                commands: vec![format!("cd {}", name), "go mod tidy".to_string()],
            },
            NextStep::new("Run the application", &["make run"]),
        ],
    }
}

fn main_go(name: &str) -> String {
    format!(
        r#"package main

import (
	"fmt"
	"log"
)

func main() {{
	if err := run(); err != nil {{
		log.Fatal(err)
	}}
}}

func run() error {{
	fmt.Println("Hello from {name}")
	return nil
}}
"#
    )
}

fn makefile(name: &str) -> String {
    format!(
        r#"# Go parameters
GOCMD=go
GOBUILD=$(GOCMD) build
GOCLEAN=$(GOCMD) clean
GOTEST=$(GOCMD) test
GOGET=$(GOCMD) get
BINARY_NAME={name}
BINARY_UNIX=$(BINARY_NAME)_unix

all: test build

build:
	$(GOBUILD) -o $(BINARY_NAME) -v ./cmd/{name}

test:
	$(GOTEST) -v ./...

clean:
	$(GOCLEAN)
	rm -f $(BINARY_NAME)
	rm -f $(BINARY_UNIX)

run: build
	./$(BINARY_NAME)
"#
    )
}

fn dockerfile(name: &str) -> String {
    format!(
        r#"FROM golang:1.20-alpine

WORKDIR /app

COPY go.* ./
RUN go mod download

COPY . .

RUN go build -o main ./cmd/{name}

CMD ["./main"]
"#
    )
}

const MAIN_TEST_GO: &str = r#"package main

import "testing"

func TestRun(t *testing.T) {
	if err := run(); err != nil {
		t.Fatalf("run() returned error: %v", err)
	}
}
"#;

fn readme(name: &str) -> String {
    format!(
        r#"# {name}

A Go project created with ezlay.

## Getting Started

### Prerequisites

- Go 1.16 or higher

### Building

```bash
make build
```

### Running

```bash
make run
```

### Testing

```bash
make test
```

### Cleaning

```bash
make clean
```
"#
    )
}

const COMPOSE: &str = r#"version: '3.8'
services:
  app:
    build: .
    volumes:
      - .:/app
    ports:
      - "8080:8080"
"#;
