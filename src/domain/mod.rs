//! Client access configuration records
//!
//! A [`Config`] holds named clusters, users (auth infos) and contexts plus a
//! couple of top-level scalars. Named entities live in ordered maps so any
//! serialized form is lexicographic and reproducible; nothing in the crate
//! depends on that order for correctness.

mod minify;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unrecognised keys carried through decode/encode untouched.
pub type Extra = BTreeMap<String, serde_yaml::Value>;

/// One effective (or per-source) client configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Name of the context used when none is requested explicitly.
    pub current_context: String,
    pub auth_infos: BTreeMap<String, AuthInfo>,
    pub clusters: BTreeMap<String, Cluster>,
    pub contexts: BTreeMap<String, Context>,
    pub preferences: Preferences,
}

impl Config {
    /// True when the config carries no entities and no scalar values.
    pub fn is_empty(&self) -> bool {
        self == &Config::default()
    }
}

/// Identity used to authenticate against a cluster.
///
/// `client_certificate`, `client_key` and `auth_path` are file references and
/// are rewritten relative to the file they were read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_certificate: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_certificate_data: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_key_data: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Connection details for one API server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    /// File reference, resolved like the [`AuthInfo`] paths.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate_authority: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate_authority_data: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub insecure_skip_tls_verify: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A (cluster, user, namespace) triple referenced by name.
///
/// The cluster and user names are not checked against the maps they point
/// into; a dangling reference is legal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(rename = "user", default, skip_serializing_if = "String::is_empty")]
    pub auth_info: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Client-side display preferences. Merged as a single value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub colors: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Preferences {
    pub fn is_default(&self) -> bool {
        self == &Preferences::default()
    }
}
