//! Project configuration loader describing bundle input and output locations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "bundle.config.json";

/// Discoverable project configuration naming the entry page and output target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Entry HTML file of the site, relative to the project directory.
    pub entry: String,
    /// Output path for the bundled document.
    pub output: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry: "index.html".into(),
            output: "bundle.html".into(),
        }
    }
}

impl BundleConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so the CLI can still run against conventional
    /// layouts.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Entry path resolved against the project directory.
    pub fn entry_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.entry)
    }

    /// Output path resolved against the project directory.
    pub fn output_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn falls_back_to_defaults_when_no_config_exists() {
        let dir = tempdir().unwrap();
        let config = BundleConfig::discover(dir.path());
        assert_eq!(config.entry, "index.html");
        assert_eq!(config.output, "bundle.html");
    }

    #[test]
    fn reads_partial_configs_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{ "entry": "site/Main.html" }"#).unwrap();

        let config = BundleConfig::discover(dir.path());
        assert_eq!(config.entry, "site/Main.html");
        assert_eq!(config.output, "bundle.html");
    }

    #[test]
    fn ignores_unparsable_configs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "not json").unwrap();

        let config = BundleConfig::discover(dir.path());
        assert_eq!(config.entry, "index.html");
    }

    #[test]
    fn resolves_paths_against_the_project_directory() {
        let config = BundleConfig {
            entry: "site/Main.html".into(),
            output: "dist/bundle.html".into(),
        };
        assert_eq!(
            config.entry_path(Path::new("/work")),
            PathBuf::from("/work/site/Main.html")
        );
        assert_eq!(
            config.output_path(Path::new("/work")),
            PathBuf::from("/work/dist/bundle.html")
        );
    }
}
