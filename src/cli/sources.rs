//! Sources command implementation

use anyhow::{Context, Result};

use crate::codec::YamlCodec;
use crate::config::{LoadingRules, SourceOutcome, SourceReport};

pub fn run(rules: &LoadingRules) -> Result<()> {
    let reports = rules.survey(&YamlCodec).context("Failed to load kubeconfig")?;
    for report in &reports {
        println!("{}", describe(report));
    }
    Ok(())
}

fn describe(report: &SourceReport) -> String {
    let label = report.location.label();
    match &report.outcome {
        SourceOutcome::NotConfigured => format!("{:<18} not configured", label),
        SourceOutcome::Missing => format!("{:<18} missing  {}", label, report.path),
        SourceOutcome::Loaded(snapshot) => format!(
            "{:<18} loaded   {} ({} clusters, {} users, {} contexts)",
            label,
            report.path,
            snapshot.config.clusters.len(),
            snapshot.config.auth_infos.len(),
            snapshot.config.contexts.len()
        ),
    }
}
