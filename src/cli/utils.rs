//! Shared CLI utilities.

use std::path::Path;

use crate::config::LoadingRules;

/// Discovered locations plus the `--kubeconfig` flag, when given, as the
/// command line location.
pub fn loading_rules(kubeconfig: Option<&Path>) -> LoadingRules {
    let rules = LoadingRules::discover();
    match kubeconfig {
        Some(path) => rules.with_command_line(path.to_string_lossy()),
        None => rules,
    }
}
