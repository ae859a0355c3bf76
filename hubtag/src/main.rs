use clap::{CommandFactory, Parser, Subcommand};
use libhubtag::config::ColorChoice;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod context;
mod format;

/// hubtag - Latest Tag Finder
///
/// Prints the latest version-like tag of a Docker Hub repository.
#[derive(Parser, Debug)]
#[command(name = "hubtag")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Repository such as alpine, busybox, or jupyter/base-notebook
    #[arg(short, long)]
    repo: Option<String>,

    /// Only consider tags matching this regular expression
    #[arg(long)]
    filter: Option<String>,

    /// Ignore tags matching this regular expression
    #[arg(long)]
    exclude: Option<String>,

    /// Write every tag returned by the registry to ./tags.txt
    #[arg(long)]
    all: bool,

    /// Registry base URL
    #[arg(long, global = true)]
    registry: Option<String>,

    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, value_parser = ["auto", "always", "never"])]
    color: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbosity: context::VerbosityLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Options of the default command
fn latest_args(cli: &Cli) -> commands::latest::LatestArgs {
    commands::latest::LatestArgs {
        repo: cli.repo.clone(),
        filter: cli.filter.clone(),
        exclude: cli.exclude.clone(),
        all: cli.all,
    }
}

/// True when the default command was run without a usable repository
fn needs_usage(cli: &Cli) -> bool {
    cli.command.is_none() && latest_args(cli).repository().is_none()
}

fn main() {
    let cli = Cli::parse_from(args::normalize_legacy_flags(std::env::args_os()));

    // Answered before any config file is read
    if needs_usage(&cli) {
        format::usage(commands::latest::USAGE_HINT);
        return;
    }

    let overrides = context::CliOverrides {
        config_path: cli.config.clone(),
        registry: cli.registry.clone(),
        color: cli.color.as_deref().map(ColorChoice::from),
        verbose: cli.verbose,
    };

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = match context::AppContext::build(&overrides) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!(
                "{}",
                format::render_error(
                    &e,
                    format::should_color(overrides.color.unwrap_or_default())
                )
            );
            std::process::exit(1);
        }
    };
    init_tracing(ctx.verbosity);

    match &cli.command {
        Some(Commands::Version) => {
            commands::version::print_version();
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
        None => {
            commands::latest::handle_latest(&ctx, &latest_args(&cli));
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
