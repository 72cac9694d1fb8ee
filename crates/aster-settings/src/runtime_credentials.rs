use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "https://api.aster.app".to_string()
}

fn default_compatibility_tag() -> String {
    "aster-chat-v1".to_string()
}

fn default_lower_tier_compatibility_tag() -> String {
    "aster-chat-v1-lite".to_string()
}

/// Runtime-collaborator credentials and tag strings loaded from a TOML file.
///
/// Every field has a default so a missing config file still yields a usable
/// value; per-field overrides merge over the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeCredentials {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_compatibility_tag")]
    pub compatibility_tag: String,
    #[serde(default = "default_lower_tier_compatibility_tag")]
    pub lower_tier_compatibility_tag: String,
}

impl Default for RuntimeCredentials {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            host: default_host(),
            debug: false,
            compatibility_tag: default_compatibility_tag(),
            lower_tier_compatibility_tag: default_lower_tier_compatibility_tag(),
        }
    }
}

/// Loads runtime credentials from `path`, falling back to defaults when the
/// file does not exist.
pub fn load_runtime_credentials(path: &Path) -> Result<RuntimeCredentials> {
    if !path.exists() {
        return Ok(RuntimeCredentials::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read runtime credentials {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse runtime credentials {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let credentials =
            load_runtime_credentials(&tempdir.path().join("absent.toml")).expect("load");
        assert_eq!(credentials, RuntimeCredentials::default());
        assert_eq!(credentials.host, "https://api.aster.app");
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join("credentials.toml");
        std::fs::write(&path, "client_id = \"team-42\"\ndebug = true\n").expect("write");
        let credentials = load_runtime_credentials(&path).expect("load");
        assert_eq!(credentials.client_id, "team-42");
        assert!(credentials.debug);
        assert_eq!(credentials.compatibility_tag, "aster-chat-v1");
        assert_eq!(
            credentials.lower_tier_compatibility_tag,
            "aster-chat-v1-lite"
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join("credentials.toml");
        std::fs::write(&path, "client_id = [broken").expect("write");
        assert!(load_runtime_credentials(&path).is_err());
    }
}
