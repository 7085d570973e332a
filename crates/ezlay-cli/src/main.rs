//! ezlay CLI - Opinionated project layout generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ezlay_core::{CreateArgs, ProjectType};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ezlay")]
#[command(about = "Generate standardized project layouts for various languages and frameworks")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (interactive when type or name is missing)
    Create(CliCreateArgs),
    /// List the supported project types
    List,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Type of project to create (python, node, bash, fastapi, nextjs, go)
    #[arg(short = 't', long = "project-type", alias = "project_type")]
    pub project_type: Option<String>,

    /// Name of the project, also used as the directory name
    #[arg(short = 'n', long = "project-name", alias = "project_name")]
    pub project_name: Option<String>,

    /// License to include (mit, apache, none)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Author name for the license
    #[arg(short, long)]
    pub author: Option<String>,

    /// Create a virtual environment (Python projects only)
    #[arg(long)]
    pub venv: bool,

    /// Run npm install (Node.js projects only)
    #[arg(long = "npm-install", alias = "npm_install")]
    pub npm_install: bool,

    /// Add Docker support with Dockerfile and docker-compose.yml
    #[arg(long)]
    pub docker: bool,

    /// Show what would be created without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            project_type: args.project_type,
            project_name: args.project_name,
            license: args.license,
            author: args.author,
            venv: args.venv,
            npm_install: args.npm_install,
            docker: args.docker,
            dry_run: args.dry_run,
        }
    }
}

/// Initialize tracing on stderr; `RUST_LOG` wins over the flags
fn init_tracing(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn list_project_types() {
    println!("{}", "Project Types:".bright_blue().bold());
    for project_type in ProjectType::ALL {
        let features: Vec<&str> = project_type
            .features()
            .iter()
            .map(|f| f.display_name())
            .collect();
        println!(
            "  {:<8} - {} {}",
            project_type.id().green(),
            project_type.description(),
            format!("[{}]", features.join(", ")).dimmed()
        );
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    let create_args = match args.command {
        Some(Command::List) => {
            list_project_types();
            return Ok(());
        }
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to create behavior (interactive mode)
        None => CreateArgs::default(),
    };

    // Everything runs sequentially on one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let result = runtime.block_on(ezlay_core::run(create_args));

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}
