//! ezlay Core - Project layout generation
//!
//! This library turns a requested project type and name into a ready-to-use
//! directory tree: boilerplate files, an optional license, an optional
//! container setup, and a git repository.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model and templates** - [`ProjectConfiguration`], the closed
//!   [`ProjectType`] set and one blueprint per type
//! - **Layer 2: Pipeline** - the resolver (arguments or prompts to a
//!   configuration) and the materializer (configuration to files on disk)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ezlay_core::{materialize, Feature, ProjectConfiguration, ProjectType, SystemToolRunner};
//!
//! let config = ProjectConfiguration::new(ProjectType::FastApi, "orders")
//!     .with_feature(Feature::Docker);
//! let report = materialize(config, std::path::Path::new("."), &SystemToolRunner).await?;
//! println!("created {}", report.path.display());
//! ```

pub mod config;
pub mod error;
pub mod materializer;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{resolve_args, resolve_interactive, ArgsResolution, CreateArgs, ResolveContext};
pub use error::{Error, Result};
pub use materializer::{materialize, MaterializeReport};
pub use project::{Feature, License, ProjectConfiguration, ProjectType};
pub use runtime::{SystemToolRunner, ToolInvocation, ToolOutcome, ToolRunner};
pub use templates::{blueprint, plan, Plan};

#[cfg(feature = "tui")]
pub use tui::run;
