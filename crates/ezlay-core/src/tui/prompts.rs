//! Charm-style CLI prompts using cliclack

use crate::config::resolver::{
    resolve_args, resolve_interactive, ArgsResolution, Choice, CreateArgs, Prompter,
    ResolveContext, Validator,
};
use crate::error::Error;
use crate::materializer::{materialize, MaterializeReport};
use crate::project::ProjectConfiguration;
use crate::runtime::{check, SystemToolRunner, ToolOutcome};
use crate::templates;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, ErrorKind};

/// [`Prompter`] backed by cliclack; Esc and Ctrl+C count as cancellation
#[derive(Debug, Default)]
pub struct CliclackPrompter;

fn cancellable<T>(result: io::Result<T>) -> crate::error::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(Error::Prompt(e)),
    }
}

impl Prompter for CliclackPrompter {
    fn select<T: Clone + Eq>(
        &mut self,
        prompt: &str,
        choices: Vec<Choice<T>>,
    ) -> crate::error::Result<Option<T>> {
        let mut select = cliclack::select(prompt);
        for choice in choices {
            select = select.item(choice.value, choice.label, choice.hint);
        }
        cancellable(select.interact())
    }

    fn input(&mut self, prompt: &str, validator: Validator) -> crate::error::Result<Option<String>> {
        cancellable(
            cliclack::input(prompt)
                .validate(move |text: &String| validator(text.as_str()))
                .interact::<String>(),
        )
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> crate::error::Result<Option<bool>> {
        cancellable(cliclack::confirm(prompt).initial_value(default).interact())
    }

    fn multiselect<T: Clone + Eq>(
        &mut self,
        prompt: &str,
        choices: Vec<Choice<T>>,
    ) -> crate::error::Result<Option<Vec<T>>> {
        if choices.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let mut multi = cliclack::multiselect(prompt);
        for choice in choices {
            multi = multi.item(choice.value, choice.label, choice.hint);
        }
        cancellable(multi.required(false).interact())
    }
}

/// Run the create command, prompting for anything the arguments leave out
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("ezlay - Project Layout Generator")?;

    let ctx = ResolveContext::from_env();

    // Step 1: Resolve configuration
    let config = match resolve_config(&args, &ctx)? {
        Some(config) => config,
        None => {
            cliclack::outro_cancel("Project creation cancelled.")?;
            return Ok(());
        }
    };

    // Step 2: Dry run stops before touching disk
    if args.dry_run {
        let plan = templates::plan(&config);
        cliclack::log::info("Dry run: nothing will be written")?;
        println!("{}", plan.to_yaml()?);
        cliclack::outro(format!(
            "{} paths planned for {}",
            plan.paths().len(),
            config.project_name()
        ))?;
        return Ok(());
    }

    // Step 3: Advisory runtime check
    check_runtimes(&config)?;

    // Step 4: Generate
    let report = create_project(config, &ctx).await?;

    // Step 5: Report and show next steps
    print_report(&report)?;
    print_next_steps(&report.config)?;

    Ok(())
}

fn resolve_config(args: &CreateArgs, ctx: &ResolveContext) -> Result<Option<ProjectConfiguration>> {
    let resolved = match resolve_args(args, ctx) {
        Ok(ArgsResolution::Complete(config)) => {
            cliclack::log::info(format!(
                "Creating {} project: {}",
                config.project_type(),
                config.project_name()
            ))?;
            Ok(Some(config))
        }
        Ok(ArgsResolution::Incomplete) => {
            cliclack::log::remark("Use arrow keys to navigate and Enter to select")?;
            resolve_interactive(&mut CliclackPrompter, ctx)
        }
        Err(e) => Err(e),
    };

    match resolved {
        Ok(config) => Ok(config),
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Project creation aborted.");
        }
    }
}

fn check_runtimes(config: &ProjectConfiguration) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let runtimes = check::check_runtimes(config.project_type());
    let runtime_info: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));
    Ok(())
}

async fn create_project(
    config: ProjectConfiguration,
    ctx: &ResolveContext,
) -> Result<MaterializeReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating your project...");

    match materialize(config, &ctx.base_dir, &SystemToolRunner).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files.len(),
                report.path.display()
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.stop("Project generation failed");
            if !matches!(e, Error::ProjectExists { .. }) {
                cliclack::log::warning(
                    "The project directory may be incomplete; remove it before retrying",
                )?;
            }
            Err(e.into())
        }
    }
}

fn print_report(report: &MaterializeReport) -> Result<()> {
    if let Some(action) = &report.heavy_action {
        match (&action.outcome, &action.note) {
            (ToolOutcome::Success, _) => {
                cliclack::log::success(format!("{} ({})", action.label, action.command))?;
            }
            (_, Some(note)) => cliclack::log::warning(note)?,
            _ => {}
        }
    }

    if report.git_initialized() {
        cliclack::log::success("Initialized git repository")?;
    }

    if let Some(license) = report.license {
        cliclack::log::success(format!("Created {} license", license))?;
    } else if report.config.license().is_some() {
        cliclack::log::info("No author given; skipped the license file")?;
    }

    if report.container {
        cliclack::log::success("Added Dockerfile and docker-compose.yml")?;
    }

    Ok(())
}

fn print_next_steps(config: &ProjectConfiguration) -> Result<()> {
    let steps = templates::next_steps(config);

    println!();
    println!("  {}", "Next steps".bright_blue().bold());

    for (i, step) in steps.iter().enumerate() {
        println!();
        println!("  {}.  {}", i + 1, step.title.yellow());
        for command in &step.commands {
            println!("      {}", command);
        }
    }
    println!();

    cliclack::outro(format!(
        "Created {} project: {}",
        config.project_type(),
        config.project_name()
    ))?;

    Ok(())
}
