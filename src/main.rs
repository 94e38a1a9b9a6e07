//! kubecfg: inspect the effective kubeconfig
//!
//! Merges the `--kubeconfig` file, `$KUBECONFIG`, `./.kubeconfig` and
//! `~/.kube/.kubeconfig` by precedence and prints the result.

use anyhow::Result;

fn main() -> Result<()> {
    kubecfg::cli::run()
}
