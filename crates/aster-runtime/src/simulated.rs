use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model_runtime::ModelRuntime;
use crate::runtime_config::RuntimeConfig;

/// Scripted in-process stand-in for the external model runtime.
///
/// Fails the first `init_failures` initialization attempts, then succeeds;
/// once initialized, reports ready after `ready_after_checks` readiness
/// probes. Records every call so tests can assert on the attempt history.
#[derive(Debug)]
pub struct SimulatedModelRuntime {
    remaining_init_failures: AtomicUsize,
    ready_after_checks: usize,
    initialized: AtomicBool,
    readiness_checks: AtomicUsize,
    initialize_calls: AtomicUsize,
    last_config: Mutex<Option<RuntimeConfig>>,
}

impl SimulatedModelRuntime {
    pub fn new(init_failures: usize, ready_after_checks: usize) -> Self {
        Self {
            remaining_init_failures: AtomicUsize::new(init_failures),
            ready_after_checks,
            initialized: AtomicBool::new(false),
            readiness_checks: AtomicUsize::new(0),
            initialize_calls: AtomicUsize::new(0),
            last_config: Mutex::new(None),
        }
    }

    /// Number of initialization attempts observed so far.
    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    /// Number of readiness probes observed so far.
    pub fn readiness_checks(&self) -> usize {
        self.readiness_checks.load(Ordering::SeqCst)
    }

    /// The config passed to the most recent initialization attempt.
    pub fn last_config(&self) -> Option<RuntimeConfig> {
        self.last_config
            .lock()
            .map(|config| config.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModelRuntime for SimulatedModelRuntime {
    async fn initialize(&self, config: &RuntimeConfig) -> bool {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_config.lock() {
            *last = Some(config.clone());
        }
        let remaining = self.remaining_init_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.remaining_init_failures
                .store(remaining - 1, Ordering::SeqCst);
            return false;
        }
        self.initialized.store(true, Ordering::SeqCst);
        true
    }

    async fn is_ready(&self) -> bool {
        if !self.initialized.load(Ordering::SeqCst) {
            return false;
        }
        let checks = self.readiness_checks.fetch_add(1, Ordering::SeqCst) + 1;
        checks >= self.ready_after_checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tag: &str) -> RuntimeConfig {
        RuntimeConfig {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            host: "https://runtime.example".to_string(),
            device_id: "device-1".to_string(),
            debug: false,
            compatibility_tag: tag.to_string(),
        }
    }

    #[tokio::test]
    async fn scripted_failures_then_success() {
        let runtime = SimulatedModelRuntime::new(2, 1);
        assert!(!runtime.initialize(&config("standard")).await);
        assert!(!runtime.initialize(&config("standard")).await);
        assert!(runtime.initialize(&config("standard")).await);
        assert_eq!(runtime.initialize_calls(), 3);
    }

    #[tokio::test]
    async fn not_ready_until_initialized() {
        let runtime = SimulatedModelRuntime::new(0, 1);
        assert!(!runtime.is_ready().await);
        assert!(runtime.initialize(&config("lite")).await);
        assert!(runtime.is_ready().await);
        assert_eq!(
            runtime.last_config().map(|config| config.compatibility_tag),
            Some("lite".to_string())
        );
    }
}
