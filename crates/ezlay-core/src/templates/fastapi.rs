//! FastAPI service with SQLAlchemy and Alembic

use super::python::{venv_action, venv_next_steps};
use super::{Blueprint, ContainerTemplates, TemplateFile};
use crate::project::ProjectConfiguration;

pub(super) fn blueprint(config: &ProjectConfiguration) -> Blueprint {
    let name = config.project_name();

    Blueprint {
        dirs: [
            "app",
            "app/api",
            "app/core",
            "app/db",
            "app/models",
            "app/schemas",
            "tests",
            "alembic",
        ]
        .iter()
        .map(|d| d.to_string())
        .collect(),
        files: vec![
            TemplateFile::new("app/main.py", main_py(name)),
            TemplateFile::new("app/core/config.py", config_py(name)),
            TemplateFile::new("app/db/session.py", SESSION_PY),
            TemplateFile::new("requirements.txt", REQUIREMENTS),
            TemplateFile::new("requirements-dev.txt", REQUIREMENTS_DEV),
            TemplateFile::new("README.md", readme(name)),
            TemplateFile::new(".gitignore", GITIGNORE),
            TemplateFile::new("tests/test_main.py", TEST_MAIN_PY),
        ],
        container: ContainerTemplates {
            dockerfile: DOCKERFILE.to_string(),
            compose: COMPOSE.to_string(),
        },
        heavy_action: venv_action(config),
        next_steps: venv_next_steps(name),
    }
}

fn main_py(name: &str) -> String {
    format!(
        r#"from fastapi import FastAPI
from fastapi.middleware.cors import CORSMiddleware

app = FastAPI(
    title="{name}",
    description="FastAPI project generated with ezlay",
    version="0.1.0"
)

# CORS configuration
app.add_middleware(
    CORSMiddleware,
    allow_origins=["*"],
    allow_credentials=True,
    allow_methods=["*"],
    allow_headers=["*"],
)

@app.get("/")
async def root():
    return {{"message": "Hello World"}}
"#
    )
}

fn config_py(name: &str) -> String {
    format!(
        r#"from pydantic_settings import BaseSettings

class Settings(BaseSettings):
    PROJECT_NAME: str = "{name}"
    VERSION: str = "0.1.0"
    API_V1_STR: str = "/api/v1"
    SQLALCHEMY_DATABASE_URL: str = "sqlite:///./sql_app.db"

    class Config:
        case_sensitive = True
        env_file = ".env"

settings = Settings()
"#
    )
}

fn readme(name: &str) -> String {
    format!(
        r#"# {name}

FastAPI project with SQLAlchemy and Alembic.

## Installation

```bash
# Create virtual environment
python -m venv venv
source venv/bin/activate  # On Windows: venv\Scripts\activate

# Install dependencies
pip install -r requirements.txt
pip install -r requirements-dev.txt
```

## Development

```bash
# Run development server
uvicorn app.main:app --reload

# Run tests
pytest

# Format code
black app tests
```

## API Documentation

After starting the server, visit:
- Swagger UI: http://localhost:8000/docs
- ReDoc: http://localhost:8000/redoc
"#
    )
}

const SESSION_PY: &str = r#"from sqlalchemy import create_engine
from sqlalchemy.orm import sessionmaker
from app.core.config import settings

engine = create_engine(
    settings.SQLALCHEMY_DATABASE_URL, connect_args={"check_same_thread": False}
)
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)

# Dependency
def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const REQUIREMENTS: &str = "fastapi>=0.100.0
uvicorn>=0.23.0
sqlalchemy>=2.0.0
alembic>=1.11.0
pydantic>=2.0.0
pydantic-settings>=2.0.0
python-dotenv>=1.0.0
";

const REQUIREMENTS_DEV: &str = "pytest>=7.0.0
pytest-asyncio>=0.21.0
httpx>=0.24.0
black>=23.0.0
flake8>=6.0.0
mypy>=1.0.0
";

const GITIGNORE: &str = "venv/
__pycache__/
.env
*.db
.pytest_cache/
";

const TEST_MAIN_PY: &str = r#"from fastapi.testclient import TestClient

from app.main import app

client = TestClient(app)


def test_root():
    response = client.get("/")
    assert response.status_code == 200
    assert response.json() == {"message": "Hello World"}
"#;

const DOCKERFILE: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

CMD ["uvicorn", "app.main:app", "--host", "0.0.0.0", "--port", "8000"]
"#;

const COMPOSE: &str = r#"version: '3.8'
services:
  app:
    build: .
    volumes:
      - .:/app
    ports:
      - "8000:8000"
    environment:
      - DATABASE_URL=postgresql://postgres:postgres@db:5432/app
    depends_on:
      - db

  db:
    image: postgres:13
    volumes:
      - postgres_data:/var/lib/postgresql/data
    environment:
      - POSTGRES_USER=postgres
      - POSTGRES_PASSWORD=postgres
      - POSTGRES_DB=app

volumes:
  postgres_data:
"#;
