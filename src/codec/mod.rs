//! Decoding and encoding of config files
//!
//! The loader only needs something that turns bytes into a [`Config`]; that
//! seam is the [`Decoder`] trait. [`YamlCodec`] is the stock implementation
//! for the kubeconfig v1 layout and also accepts JSON input.

mod yaml;

use crate::domain::Config;
use thiserror::Error;

pub use yaml::YamlCodec;

/// Failure to decode or encode a config document.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised by custom decoders that reject structurally valid input.
    #[error("{0}")]
    Invalid(String),
}

/// Turns the raw bytes of one source file into a [`Config`].
///
/// Implementations must not touch the filesystem; path resolution happens
/// after decoding.
pub trait Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Config, CodecError>;
}

/// Renders a [`Config`] as a document.
pub trait Encoder {
    fn encode(&self, config: &Config) -> Result<String, CodecError>;
}

/// Presentation format for rendering a config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Render `config` in the kubeconfig v1 layout, newline terminated.
    pub fn render(self, config: &Config) -> Result<String, CodecError> {
        let mut out = match self {
            OutputFormat::Yaml => YamlCodec.encode(config)?,
            OutputFormat::Json => serde_json::to_string_pretty(&yaml::WireConfig::from(config))?,
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}
