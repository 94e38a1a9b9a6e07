//! kubecfg: ranked kubeconfig loading
//!
//! Reads client access configuration (clusters, users, contexts) from up to
//! four locations, resolves relative certificate and key paths against the
//! file each one came from, and merges them by precedence.
//!
//! ```ignore
//! use kubecfg::config::LoadingRules;
//!
//! let config = LoadingRules::discover().with_command_line("dev.yaml").load()?;
//! println!("{}", config.current_context);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod utils;

pub use codec::{CodecError, Decoder, Encoder, OutputFormat, YamlCodec};
pub use config::{LoadError, LoadingRules, Location, Snapshot};
pub use domain::{AuthInfo, Cluster, Config, Context, Preferences};
