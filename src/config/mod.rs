//! Configuration loading and merging
//!
//! Up to four files contribute to the effective config, highest precedence
//! first:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  1. Command line (--kubeconfig)              │  explicit, must exist
//! ├──────────────────────────────────────────────┤
//! │  2. Environment ($KUBECONFIG)                │  skipped when missing
//! ├──────────────────────────────────────────────┤
//! │  3. Working directory (./.kubeconfig)        │  skipped when missing
//! ├──────────────────────────────────────────────┤
//! │  4. Home directory (~/.kube/.kubeconfig)     │  skipped when missing
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Each file is read, its relative certificate/key paths are resolved
//! against the file's own directory, and the resulting snapshots are merged:
//! the highest-ranked non-empty `current-context` wins, and a cluster, user
//! or context defined in several files is taken whole from the
//! highest-ranked one.

pub mod error;
pub mod loader;
pub mod location;
pub mod merge;
pub mod reader;
pub mod resolve;

pub use error::LoadError;
pub use loader::{LoadingRules, SourceOutcome, SourceReport};
pub use location::Location;
pub use merge::{merge, RankedSnapshots};
pub use reader::{read_source, Snapshot};
pub use resolve::resolve_paths;

/// Environment variable naming a config file.
pub const KUBECONFIG_ENV_VAR: &str = "KUBECONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".kubeconfig";

/// Config file location relative to the home directory.
pub const RECOMMENDED_HOME_FILE: &str = ".kube/.kubeconfig";
