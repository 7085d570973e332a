//! Configuration resolution from arguments or prompts

pub mod resolver;

pub use resolver::{
    default_author, resolve_args, resolve_interactive, validate_project_name, ArgsResolution,
    Choice, CreateArgs, Prompter, ResolveContext, Validator,
};
