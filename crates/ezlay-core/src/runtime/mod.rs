//! Runtime detection and external tool execution
//!
//! This module provides:
//! - Toolchain detection (Python, Node.js, Bash, Go, git)
//! - Best-effort execution of external tools with a typed outcome

pub mod check;
pub mod tool;

pub use check::{check_runtimes, RuntimeInfo};
pub use tool::{SystemToolRunner, ToolInvocation, ToolOutcome, ToolRunner};
