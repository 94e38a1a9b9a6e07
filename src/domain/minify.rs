//! Reduce a config to what its current context needs

use super::Config;

impl Config {
    /// Returns a copy holding only the current context and the cluster and
    /// user it names.
    ///
    /// `None` when `current_context` is empty or names a context that is not
    /// defined. References to a missing cluster or user are dropped silently.
    pub fn minified(&self) -> Option<Config> {
        if self.current_context.is_empty() {
            return None;
        }
        let context = self.contexts.get(&self.current_context)?;

        let mut minified = Config {
            current_context: self.current_context.clone(),
            preferences: self.preferences.clone(),
            ..Config::default()
        };
        minified.contexts.insert(self.current_context.clone(), context.clone());

        if let Some(cluster) = self.clusters.get(&context.cluster) {
            minified.clusters.insert(context.cluster.clone(), cluster.clone());
        }
        if let Some(auth_info) = self.auth_infos.get(&context.auth_info) {
            minified.auth_infos.insert(context.auth_info.clone(), auth_info.clone());
        }

        Some(minified)
    }
}
