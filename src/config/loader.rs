//! Four-location config loading
//!
//! Locations are visited in precedence order. A location with no path is not
//! configured and skipped. A missing file is fatal only for the command line
//! location, which names a file explicitly; the other three are discovery
//! conventions. A file that exists but cannot be read or decoded is fatal
//! wherever it is. The first fatal error aborts the load.

use std::path::Path;
use tracing::debug;

use super::location::Location;
use super::merge::merge;
use super::reader::Snapshot;
use super::{LoadError, KUBECONFIG_ENV_VAR, LOCAL_CONFIG_FILE, RECOMMENDED_HOME_FILE};
use crate::codec::{Decoder, YamlCodec};
use crate::domain::Config;

/// Paths for the four source locations. An empty string means the location
/// is not configured.
///
/// # Example
///
/// ```ignore
/// use kubecfg::config::LoadingRules;
///
/// let config = LoadingRules::discover()
///     .with_command_line("/path/to/kubeconfig")
///     .load()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingRules {
    pub command_line_path: String,
    pub env_var_path: String,
    pub current_directory_path: String,
    pub home_directory_path: String,
}

/// What happened at one location during a survey.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    NotConfigured,
    /// Configured path with no file behind it, at a location that tolerates it.
    Missing,
    Loaded(Snapshot),
}

/// Outcome of visiting one location.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub location: Location,
    pub path: String,
    pub outcome: SourceOutcome,
}

impl LoadingRules {
    /// Rules with no location configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the conventional locations: the `KUBECONFIG` environment
    /// variable, `.kubeconfig` in the working directory and
    /// `~/.kube/.kubeconfig`. The command line location is left empty.
    #[must_use]
    pub fn discover() -> Self {
        let env_var_path = std::env::var(KUBECONFIG_ENV_VAR).unwrap_or_default();
        let home_directory_path = dirs::home_dir()
            .map(|home| home.join(RECOMMENDED_HOME_FILE).to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            command_line_path: String::new(),
            env_var_path,
            current_directory_path: LOCAL_CONFIG_FILE.to_string(),
            home_directory_path,
        }
    }

    #[must_use]
    pub fn with_command_line(mut self, path: impl Into<String>) -> Self {
        self.command_line_path = path.into();
        self
    }

    #[must_use]
    pub fn with_env_var(mut self, path: impl Into<String>) -> Self {
        self.env_var_path = path.into();
        self
    }

    #[must_use]
    pub fn with_current_directory(mut self, path: impl Into<String>) -> Self {
        self.current_directory_path = path.into();
        self
    }

    #[must_use]
    pub fn with_home_directory(mut self, path: impl Into<String>) -> Self {
        self.home_directory_path = path.into();
        self
    }

    /// Configured path for `location`, empty when not configured.
    pub fn path_for(&self, location: Location) -> &str {
        match location {
            Location::CommandLine => &self.command_line_path,
            Location::EnvironmentVariable => &self.env_var_path,
            Location::CurrentDirectory => &self.current_directory_path,
            Location::HomeDirectory => &self.home_directory_path,
        }
    }

    /// Load and merge all configured locations with the stock YAML codec.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`LoadError`] in precedence order.
    pub fn load(&self) -> Result<Config, LoadError> {
        self.load_with(&YamlCodec)
    }

    /// Load and merge all configured locations with a custom decoder.
    pub fn load_with(&self, decoder: &dyn Decoder) -> Result<Config, LoadError> {
        let snapshots = self.load_snapshots(decoder)?;
        Ok(merge(&snapshots))
    }

    /// The resolved snapshots that would be merged, highest precedence first.
    pub fn load_snapshots(&self, decoder: &dyn Decoder) -> Result<Vec<Snapshot>, LoadError> {
        let snapshots = self
            .survey(decoder)?
            .into_iter()
            .filter_map(|report| match report.outcome {
                SourceOutcome::Loaded(snapshot) => Some(snapshot),
                _ => None,
            })
            .collect();
        Ok(snapshots)
    }

    /// Visit every location in precedence order and report what each one
    /// contributed.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal [`LoadError`]; no partial report is returned.
    pub fn survey(&self, decoder: &dyn Decoder) -> Result<Vec<SourceReport>, LoadError> {
        let mut reports = Vec::with_capacity(Location::PRECEDENCE.len());

        for location in Location::PRECEDENCE {
            let path = self.path_for(location);
            let outcome = if path.is_empty() {
                debug!(%location, "Location not configured");
                SourceOutcome::NotConfigured
            } else {
                match Snapshot::load(location, Path::new(path), decoder) {
                    Ok(snapshot) => {
                        debug!(
                            %location,
                            path,
                            clusters = snapshot.config.clusters.len(),
                            users = snapshot.config.auth_infos.len(),
                            contexts = snapshot.config.contexts.len(),
                            "Loaded config file"
                        );
                        SourceOutcome::Loaded(snapshot)
                    }
                    Err(err) if err.is_not_found() && location.tolerates_absence() => {
                        debug!(%location, path, "Config file not found, skipping");
                        SourceOutcome::Missing
                    }
                    Err(err) => return Err(err),
                }
            };
            reports.push(SourceReport { location, path: path.to_string(), outcome });
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).expect("write config");
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_nothing_configured_is_empty() {
        let cfg = LoadingRules::new().load().expect("load");
        assert!(cfg.is_empty());
    }

    #[test]
    fn test_missing_command_line_file_is_fatal() {
        let err = LoadingRules::new().with_command_line("bogus_file").load().unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("bogus_file"));
    }

    #[test]
    fn test_missing_discovered_files_are_skipped() {
        let rules = LoadingRules::new()
            .with_env_var("bogus1")
            .with_current_directory("bogus2")
            .with_home_directory("bogus3");

        let reports = rules.survey(&YamlCodec).expect("survey");
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].outcome, SourceOutcome::NotConfigured);
        assert!(reports[1..].iter().all(|r| r.outcome == SourceOutcome::Missing));
        assert!(rules.load().expect("load").is_empty());
    }

    // Optional locations with unusable files fail just like the command line.
    #[test]
    fn test_undecodable_home_file_is_fatal() {
        let tmp = TempDir::new().expect("tmp");
        let home = write_config(tmp.path(), "home", "bogus value");

        let err = LoadingRules::new().with_home_directory(&home).load().unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains(&home));
    }

    #[test]
    fn test_directory_at_env_location_is_fatal() {
        let tmp = TempDir::new().expect("tmp");
        let dir = tmp.path().to_string_lossy().into_owned();

        let err = LoadingRules::new().with_env_var(&dir).load().unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains(&dir));
    }

    #[test]
    fn test_first_fatal_error_in_precedence_order_wins() {
        let tmp = TempDir::new().expect("tmp");
        let env = write_config(tmp.path(), "env", "bogus value");

        let err = LoadingRules::new()
            .with_command_line("bogus_file")
            .with_env_var(&env)
            .load()
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("bogus_file"));
    }

    #[test]
    fn test_snapshots_are_highest_first() {
        let tmp = TempDir::new().expect("tmp");
        let cli = write_config(tmp.path(), "cli", "current-context: from-cli\n");
        let home = write_config(tmp.path(), "home", "current-context: from-home\n");

        let snapshots = LoadingRules::new()
            .with_home_directory(&home)
            .with_command_line(&cli)
            .load_snapshots(&YamlCodec)
            .expect("load");
        let locations: Vec<Location> = snapshots.iter().map(|s| s.location).collect();
        assert_eq!(locations, vec![Location::CommandLine, Location::HomeDirectory]);
    }

    #[test]
    fn test_custom_decoder_is_used() {
        struct Fixed;
        impl Decoder for Fixed {
            fn decode(&self, bytes: &[u8]) -> Result<Config, CodecError> {
                let text =
                    std::str::from_utf8(bytes).map_err(|e| CodecError::Invalid(e.to_string()))?;
                Ok(Config { current_context: text.trim().to_string(), ..Config::default() })
            }
        }

        let tmp = TempDir::new().expect("tmp");
        let path = write_config(tmp.path(), "plain", "plain-context\n");
        let cfg =
            LoadingRules::new().with_current_directory(&path).load_with(&Fixed).expect("load");
        assert_eq!(cfg.current_context, "plain-context");
    }

    #[test]
    fn test_path_for_each_location() {
        let rules = LoadingRules::new()
            .with_command_line("a")
            .with_env_var("b")
            .with_current_directory("c")
            .with_home_directory("d");
        let paths: Vec<&str> = Location::PRECEDENCE.iter().map(|l| rules.path_for(*l)).collect();
        assert_eq!(paths, vec!["a", "b", "c", "d"]);
    }
}
