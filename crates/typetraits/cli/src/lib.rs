//! typetraits CLI - command-line front end for the type-trait visualizer
//!
//! Builds an attribute set from flags or a JSON file and prints:
//! - the aggregate / default-constructible / trivially-default-constructible
//!   verdicts, with the reasons a class fails to be an aggregate
//! - an example C++ declaration exhibiting the chosen attributes
//! - the attribute vocabulary

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typetraits_render::Renderer;

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{print_error, OutputFormat};

use input::InputArgs;

/// typetraits CLI application
#[derive(Parser)]
#[command(name = "typetraits")]
#[command(about = "Explore C++ type traits for a set of type attributes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TYPETRAITS_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Evaluate the trait predicates
    #[command(alias = "eval")]
    Evaluate(InputArgs),

    /// Render an example declaration
    Render(InputArgs),

    /// Evaluate and render
    Show(InputArgs),

    /// List the attribute flags
    Attributes,
}

pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.output).unwrap_or_default();
    let renderer = Renderer::new().with_config(config.render)?;

    // Execute command
    match cli.command {
        Commands::Evaluate(input) => commands::evaluate_cmd(&input, format),
        Commands::Render(input) => commands::render_cmd(&input, &renderer, format),
        Commands::Show(input) => commands::show_cmd(&input, &renderer, format),
        Commands::Attributes => commands::attributes_cmd(format),
    }
}
