//! Generator configuration describing resource inputs and output layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "resources.config.json";

/// Default base directory receiving generated sources.
pub const DEFAULT_OUTPUT_ROOT: &str = "target/generated-sources";

/// Language flavour of the generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetSyntax {
    /// `public class Resources` holding `static final String` constants.
    #[default]
    Java,
    /// `pub mod resources` holding `pub const` string constants.
    Rust,
}

/// Explicit configuration for one generation run.
///
/// All inputs are passed in directly; there is no implicit lookup of a host
/// build session. Each run is an independent pure function of this
/// configuration and the current filesystem contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Resource directories to scan, in the order their constants should
    /// appear in the generated unit.
    pub resource_dirs: Vec<PathBuf>,
    /// Dot-separated namespace identifier grouping the generated unit, e.g.
    /// a reverse-domain package name.
    pub namespace: String,
    /// Base directory receiving generated sources.
    pub output_root: PathBuf,
    /// Language flavour of the generated unit.
    pub target: TargetSyntax,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resource_dirs: Vec::new(),
            namespace: String::new(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            target: TargetSyntax::default(),
        }
    }
}

impl GeneratorConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so callers can continue with explicit
    /// overrides.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_use_the_documented_output_root() {
        let config = GeneratorConfig::default();
        assert!(config.resource_dirs.is_empty());
        assert!(config.namespace.is_empty());
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.target, TargetSyntax::Java);
    }

    #[test]
    fn from_path_reads_configuration() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("resources.config.json");
        fs::write(
            &path,
            r#"{
                "resource_dirs": ["src/main/resources"],
                "namespace": "com.example.app",
                "output_root": "build/generated",
                "target": "rust"
            }"#,
        )
        .unwrap();

        let config = GeneratorConfig::from_path(&path).unwrap();
        assert_eq!(
            config.resource_dirs,
            vec![PathBuf::from("src/main/resources")]
        );
        assert_eq!(config.namespace, "com.example.app");
        assert_eq!(config.output_root, PathBuf::from("build/generated"));
        assert_eq!(config.target, TargetSyntax::Rust);
    }

    #[test]
    fn partial_configuration_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("resources.config.json");
        fs::write(&path, r#"{"namespace": "com.example.app"}"#).unwrap();

        let config = GeneratorConfig::from_path(&path).unwrap();
        assert_eq!(config.namespace, "com.example.app");
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.target, TargetSyntax::Java);
    }

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let temp = tempdir().unwrap();
        let config = GeneratorConfig::discover(temp.path());
        assert!(config.namespace.is_empty());
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
    }

    #[test]
    fn discover_reads_the_config_file_when_present() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("resources.config.json"),
            r#"{"namespace": "org.example"}"#,
        )
        .unwrap();

        let config = GeneratorConfig::discover(temp.path());
        assert_eq!(config.namespace, "org.example");
    }
}
