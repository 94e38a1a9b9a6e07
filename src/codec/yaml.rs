//! kubeconfig v1 document layout
//!
//! On disk, named entities are lists of `{name, <kind>}` pairs and keys are
//! kebab-case:
//!
//! ```yaml
//! apiVersion: v1
//! kind: Config
//! clusters:
//! - name: cow-cluster
//!   cluster:
//!     server: http://cow.org:8080
//! contexts:
//! - name: federal-context
//!   context:
//!     cluster: cow-cluster
//!     user: red-user
//! current-context: federal-context
//! users:
//! - name: red-user
//!   user:
//!     token: red-token
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::{CodecError, Decoder, Encoder};
use crate::domain::{AuthInfo, Cluster, Config, Context, Preferences};

const API_VERSION: &str = "v1";
const KIND: &str = "Config";

/// Stock codec for kubeconfig v1 YAML (and JSON) documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Decoder for YamlCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Config, CodecError> {
        // An empty file is a valid, empty config.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Config::default());
        }
        let wire: WireConfig = serde_yaml::from_slice(bytes)?;
        Ok(wire.into_config())
    }
}

impl Encoder for YamlCodec {
    fn encode(&self, config: &Config) -> Result<String, CodecError> {
        Ok(serde_yaml::to_string(&WireConfig::from(config))?)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct WireConfig {
    #[serde(rename = "apiVersion", default, skip_serializing_if = "String::is_empty")]
    api_version: String,
    #[serde(default, deserialize_with = "nullable")]
    clusters: Vec<NamedCluster>,
    #[serde(default, deserialize_with = "nullable")]
    contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default, deserialize_with = "nullable")]
    current_context: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    kind: String,
    #[serde(default, deserialize_with = "nullable")]
    preferences: Preferences,
    #[serde(default, deserialize_with = "nullable")]
    users: Vec<NamedAuthInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NamedCluster {
    name: String,
    #[serde(default)]
    cluster: Cluster,
}

#[derive(Debug, Serialize, Deserialize)]
struct NamedContext {
    name: String,
    #[serde(default)]
    context: Context,
}

#[derive(Debug, Serialize, Deserialize)]
struct NamedAuthInfo {
    name: String,
    #[serde(default)]
    user: AuthInfo,
}

/// Treat an explicit `null` the same as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collect a named list into a map. A name repeated within one document
/// keeps its last definition.
fn collect_named<T>(
    kind: &str,
    entries: impl IntoIterator<Item = (String, T)>,
) -> BTreeMap<String, T> {
    let mut map = BTreeMap::new();
    for (name, entity) in entries {
        if map.insert(name.clone(), entity).is_some() {
            tracing::warn!("duplicate {} '{}' in config document; keeping the last one", kind, name);
        }
    }
    map
}

impl WireConfig {
    fn into_config(self) -> Config {
        Config {
            current_context: self.current_context,
            auth_infos: collect_named("user", self.users.into_iter().map(|u| (u.name, u.user))),
            clusters: collect_named(
                "cluster",
                self.clusters.into_iter().map(|c| (c.name, c.cluster)),
            ),
            contexts: collect_named(
                "context",
                self.contexts.into_iter().map(|c| (c.name, c.context)),
            ),
            preferences: self.preferences,
        }
    }
}

impl From<&Config> for WireConfig {
    fn from(config: &Config) -> Self {
        WireConfig {
            api_version: API_VERSION.to_string(),
            clusters: config
                .clusters
                .iter()
                .map(|(name, cluster)| NamedCluster { name: name.clone(), cluster: cluster.clone() })
                .collect(),
            contexts: config
                .contexts
                .iter()
                .map(|(name, context)| NamedContext { name: name.clone(), context: context.clone() })
                .collect(),
            current_context: config.current_context.clone(),
            kind: KIND.to_string(),
            preferences: config.preferences.clone(),
            users: config
                .auth_infos
                .iter()
                .map(|(name, user)| NamedAuthInfo { name: name.clone(), user: user.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFLICT_DOC: &str = r#"
apiVersion: v1
kind: Config
current-context: federal-context
clusters:
- name: cow-cluster
  cluster:
    server: http://a-different-cow.org:8080
    insecure-skip-tls-verify: true
- name: donkey-cluster
  cluster:
    server: http://donkey.org:8080
    insecure-skip-tls-verify: true
users:
- name: red-user
  user:
    token: a-different-red-token
- name: yellow-user
  user:
    token: yellow-token
"#;

    #[test]
    fn test_decode_named_lists() {
        let cfg = YamlCodec.decode(CONFLICT_DOC.as_bytes()).expect("decode");

        assert_eq!(cfg.current_context, "federal-context");
        assert_eq!(cfg.clusters.len(), 2);
        assert!(cfg.clusters["cow-cluster"].insecure_skip_tls_verify);
        assert_eq!(cfg.clusters["donkey-cluster"].server, "http://donkey.org:8080");
        assert_eq!(cfg.auth_infos["yellow-user"].token, "yellow-token");
        assert!(cfg.contexts.is_empty());
    }

    #[test]
    fn test_decode_context_user_reference() {
        let doc = r#"
contexts:
- name: federal-context
  context:
    cluster: cow-cluster
    user: red-user
    namespace: hammer-ns
"#;
        let cfg = YamlCodec.decode(doc.as_bytes()).expect("decode");
        let ctx = &cfg.contexts["federal-context"];
        assert_eq!(ctx.cluster, "cow-cluster");
        assert_eq!(ctx.auth_info, "red-user");
        assert_eq!(ctx.namespace, "hammer-ns");
    }

    #[test]
    fn test_decode_file_reference_keys() {
        let doc = r#"
clusters:
- name: c
  cluster:
    certificate-authority: ../relative/ca
users:
- name: u
  user:
    client-certificate: relative/client/cert
    client-key: ../relative/client/key
    auth-path: ../../relative/auth/path
"#;
        let cfg = YamlCodec.decode(doc.as_bytes()).expect("decode");
        assert_eq!(cfg.clusters["c"].certificate_authority, "../relative/ca");
        let user = &cfg.auth_infos["u"];
        assert_eq!(user.client_certificate, "relative/client/cert");
        assert_eq!(user.client_key, "../relative/client/key");
        assert_eq!(user.auth_path, "../../relative/auth/path");
    }

    #[test]
    fn test_decode_empty_and_whitespace() {
        assert_eq!(YamlCodec.decode(b"").expect("empty"), Config::default());
        assert_eq!(YamlCodec.decode(b"  \n\n").expect("blank"), Config::default());
    }

    #[test]
    fn test_decode_null_sections() {
        let doc = "clusters: null\nusers: null\ncontexts: null\ncurrent-context: null\n";
        assert_eq!(YamlCodec.decode(doc.as_bytes()).expect("decode"), Config::default());
    }

    #[test]
    fn test_decode_rejects_scalar_document() {
        assert!(YamlCodec.decode(b"bogus value").is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(YamlCodec.decode(b"clusters: 42\n").is_err());
    }

    #[test]
    fn test_decode_accepts_json() {
        let doc = r#"{"clusters":[{"name":"pig-cluster","cluster":{"server":"http://pig.org:8080"}}]}"#;
        let cfg = YamlCodec.decode(doc.as_bytes()).expect("decode");
        assert_eq!(cfg.clusters["pig-cluster"].server, "http://pig.org:8080");
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let doc = r#"
users:
- name: red-user
  user:
    token: first
- name: red-user
  user:
    token: second
"#;
        let cfg = YamlCodec.decode(doc.as_bytes()).expect("decode");
        assert_eq!(cfg.auth_infos.len(), 1);
        assert_eq!(cfg.auth_infos["red-user"].token, "second");
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let doc = r#"
users:
- name: oidc-user
  user:
    token: t
    auth-provider:
      name: oidc
preferences:
  colors: true
  theme: dark
"#;
        let cfg = YamlCodec.decode(doc.as_bytes()).expect("decode");
        assert!(cfg.auth_infos["oidc-user"].extra.contains_key("auth-provider"));
        assert!(cfg.preferences.colors);
        assert!(cfg.preferences.extra.contains_key("theme"));

        let encoded = YamlCodec.encode(&cfg).expect("encode");
        assert!(encoded.contains("auth-provider"));
        assert_eq!(YamlCodec.decode(encoded.as_bytes()).expect("re-decode"), cfg);
    }

    #[test]
    fn test_encode_sorts_names_and_sets_header() {
        let cfg = YamlCodec.decode(CONFLICT_DOC.as_bytes()).expect("decode");
        let encoded = YamlCodec.encode(&cfg).expect("encode");

        assert!(encoded.contains("apiVersion: v1"));
        assert!(encoded.contains("kind: Config"));
        let cow = encoded.find("name: cow-cluster").expect("cow present");
        let donkey = encoded.find("name: donkey-cluster").expect("donkey present");
        assert!(cow < donkey);
        assert!(!encoded.contains("insecure-skip-tls-verify: false"));
    }
}
