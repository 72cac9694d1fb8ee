use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use aster_core::{current_unix_timestamp_ms, write_text_atomic};

const INSTALL_STATE_SCHEMA_VERSION: u32 = 1;

/// File name of the installation record inside the state directory.
pub const INSTALL_STATE_FILE_NAME: &str = "install-state.json";

/// Persisted installation record stored in the app state directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct InstallStateFile {
    schema_version: u32,
    installed_at_unix_ms: u64,
    runtime_downloaded: bool,
    has_rated_app: bool,
}

/// Durable per-install settings backed by a schema-versioned JSON file.
///
/// The install timestamp is written exactly once, the first time the store is
/// opened and no record exists. `runtime_downloaded` and `has_rated_app` only
/// move false to true within an install.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    state: InstallStateFile,
}

impl SettingsStore {
    /// Opens the store in `state_dir`, creating a fresh record stamped with
    /// the current time when none exists yet.
    pub fn open(state_dir: &Path) -> Result<Self> {
        Self::open_at(state_dir, current_unix_timestamp_ms())
    }

    /// Opens the store, stamping `install_now_ms` into a newly created
    /// record. An existing record keeps its original timestamp.
    pub fn open_at(state_dir: &Path, install_now_ms: u64) -> Result<Self> {
        let path = state_dir.join(INSTALL_STATE_FILE_NAME);
        let state = match load_install_state_file(&path)? {
            Some(state) => state,
            None => {
                let state = InstallStateFile {
                    schema_version: INSTALL_STATE_SCHEMA_VERSION,
                    installed_at_unix_ms: install_now_ms,
                    runtime_downloaded: false,
                    has_rated_app: false,
                };
                save_install_state_file(&path, &state)?;
                state
            }
        };
        Ok(Self { path, state })
    }

    pub fn installed_at_unix_ms(&self) -> u64 {
        self.state.installed_at_unix_ms
    }

    pub fn runtime_downloaded(&self) -> bool {
        self.state.runtime_downloaded
    }

    pub fn has_rated_app(&self) -> bool {
        self.state.has_rated_app
    }

    /// Marks the one-time runtime download as complete and persists.
    pub fn record_runtime_downloaded(&mut self) -> Result<()> {
        if self.state.runtime_downloaded {
            return Ok(());
        }
        self.state.runtime_downloaded = true;
        save_install_state_file(&self.path, &self.state)
    }

    /// Marks the install as having rated the app and persists.
    pub fn record_has_rated_app(&mut self) -> Result<()> {
        if self.state.has_rated_app {
            return Ok(());
        }
        self.state.has_rated_app = true;
        save_install_state_file(&self.path, &self.state)
    }
}

/// Load the installation record and enforce the supported schema version.
fn load_install_state_file(path: &Path) -> Result<Option<InstallStateFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read install state {}", path.display()))?;
    let parsed = serde_json::from_str::<InstallStateFile>(&raw)
        .with_context(|| format!("failed to parse install state {}", path.display()))?;
    if parsed.schema_version != INSTALL_STATE_SCHEMA_VERSION {
        bail!(
            "unsupported install state schema_version {} in {} (expected {})",
            parsed.schema_version,
            path.display(),
            INSTALL_STATE_SCHEMA_VERSION
        );
    }
    Ok(Some(parsed))
}

/// Save the installation record atomically with a trailing newline.
fn save_install_state_file(path: &Path, state: &InstallStateFile) -> Result<()> {
    let mut encoded =
        serde_json::to_string_pretty(state).context("failed to encode install state")?;
    encoded.push('\n');
    write_text_atomic(path, &encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_stamps_install_time_once() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::open_at(tempdir.path(), 1_000).expect("open");
        assert_eq!(store.installed_at_unix_ms(), 1_000);
        assert!(!store.runtime_downloaded());
        assert!(!store.has_rated_app());

        // Reopening later must keep the original timestamp.
        let reopened = SettingsStore::open_at(tempdir.path(), 9_999).expect("reopen");
        assert_eq!(reopened.installed_at_unix_ms(), 1_000);
    }

    #[test]
    fn flags_persist_and_never_regress() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let mut store = SettingsStore::open_at(tempdir.path(), 1_000).expect("open");
        store.record_runtime_downloaded().expect("record download");
        store.record_has_rated_app().expect("record rating");
        store.record_runtime_downloaded().expect("idempotent");

        let reopened = SettingsStore::open_at(tempdir.path(), 2_000).expect("reopen");
        assert!(reopened.runtime_downloaded());
        assert!(reopened.has_rated_app());
    }

    #[test]
    fn open_rejects_unsupported_schema_version() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join(INSTALL_STATE_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"schema_version":99,"installed_at_unix_ms":1,"runtime_downloaded":false,"has_rated_app":false}"#,
        )
        .expect("write");
        let error = SettingsStore::open_at(tempdir.path(), 1).expect_err("schema mismatch");
        assert!(error.to_string().contains("schema_version 99"));
    }

    #[test]
    fn open_rejects_malformed_record() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join(INSTALL_STATE_FILE_NAME);
        std::fs::write(&path, "not json").expect("write");
        assert!(SettingsStore::open_at(tempdir.path(), 1).is_err());
    }
}
