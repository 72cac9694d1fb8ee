//! Durable launch settings for Aster.
//!
//! Provides the persisted installation record (install timestamp, one-time
//! download flag, rating flag) and the runtime credentials config file.

pub mod install_state;
pub mod runtime_credentials;

pub use install_state::{SettingsStore, INSTALL_STATE_FILE_NAME};
pub use runtime_credentials::{load_runtime_credentials, RuntimeCredentials};
