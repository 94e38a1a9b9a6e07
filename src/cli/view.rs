//! View and current-context command implementations

use anyhow::{Context, Result};
use clap::Args;

use crate::codec::OutputFormat;
use crate::config::LoadingRules;
use crate::domain::Config;

#[derive(Args)]
pub struct ViewArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    /// Only show the current context and the cluster and user it references
    #[arg(long)]
    pub minify: bool,
}

pub fn run(args: ViewArgs, rules: &LoadingRules) -> Result<()> {
    let config = load(rules)?;
    let config = if args.minify { minify(&config)? } else { config };

    let rendered = args.output.render(&config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}

pub fn run_current_context(rules: &LoadingRules) -> Result<()> {
    let config = load(rules)?;
    if config.current_context.is_empty() {
        anyhow::bail!("current-context is not set");
    }
    println!("{}", config.current_context);
    Ok(())
}

fn load(rules: &LoadingRules) -> Result<Config> {
    rules.load().context("Failed to load kubeconfig")
}

fn minify(config: &Config) -> Result<Config> {
    if config.current_context.is_empty() {
        anyhow::bail!("Cannot minify: current-context is not set");
    }
    config.minified().with_context(|| {
        format!("Cannot minify: context '{}' is not defined", config.current_context)
    })
}
