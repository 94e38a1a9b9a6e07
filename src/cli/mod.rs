//! Command-line interface for kubecfg
//!
//! Provides `view`, `current-context`, `sources` and `completions`
//! subcommands over the merged kubeconfig.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod sources;
mod utils;
mod view;

/// Load, resolve and merge kubeconfig files from ranked sources
#[derive(Parser)]
#[command(name = "kubecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Kubeconfig file to use; must exist and takes precedence over discovered files
    #[arg(long, global = true, value_name = "FILE")]
    kubeconfig: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration
    View(view::ViewArgs),

    /// Print the merged current-context
    CurrentContext,

    /// Show which files contribute to the merged configuration
    Sources,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose))
        .try_init();

    let rules = utils::loading_rules(cli.kubeconfig.as_deref());

    match cli.command {
        Commands::View(args) => view::run(args, &rules),
        Commands::CurrentContext => view::run_current_context(&rules),
        Commands::Sources => sources::run(&rules),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kubecfg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Directives from RUST_LOG when it sets any, else DEBUG with --verbose and WARN without.
fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::builder().with_default_directive(fallback.into()).from_env_lossy()
}
