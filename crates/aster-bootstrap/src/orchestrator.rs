use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use aster_device::{classify_device_tier, DeviceSignals, DeviceTier};
use aster_runtime::{build_runtime_config, ModelRuntime, ReadinessWaiter};
use aster_settings::{RuntimeCredentials, SettingsStore};

/// Classifier seam, overridable for tests.
pub type ClassifierFn = fn(&DeviceSignals) -> DeviceTier;

/// Enumerates `BootstrapPhase` values of the launch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    Start,
    /// Terminal for the attempt; the user may dismiss and stays here.
    Unsupported,
    /// Waiting on the external download collaborator's completion event.
    NeedsDownload,
    ReadyToInit,
    Initializing,
    WaitingReady,
    /// Retryable without limit; retries are user-paced.
    InitFailed,
    Ready,
}

/// What a finished attempt surfaces to the host layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Ready,
    Unsupported,
    NeedsDownload,
    InitFailed,
}

/// The launch state machine.
///
/// One orchestrator instance exists per process run; `&mut self` on every
/// operation keeps exactly one attempt in flight at a time. Retries and the
/// download-completion signal are explicit caller events rather than UI
/// re-invocation.
pub struct BootstrapOrchestrator {
    settings: SettingsStore,
    credentials: RuntimeCredentials,
    device_id: String,
    signals: DeviceSignals,
    runtime: Arc<dyn ModelRuntime>,
    waiter: ReadinessWaiter,
    classifier: ClassifierFn,
    phase: BootstrapPhase,
    failure_signals: usize,
}

impl BootstrapOrchestrator {
    pub fn new(
        settings: SettingsStore,
        credentials: RuntimeCredentials,
        device_id: String,
        signals: DeviceSignals,
        runtime: Arc<dyn ModelRuntime>,
        waiter: ReadinessWaiter,
    ) -> Self {
        Self {
            settings,
            credentials,
            device_id,
            signals,
            runtime,
            waiter,
            classifier: classify_device_tier,
            phase: BootstrapPhase::Start,
            failure_signals: 0,
        }
    }

    /// Replaces the device classifier seam.
    pub fn with_classifier(mut self, classifier: ClassifierFn) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// Count of initialization failures surfaced so far.
    pub fn failure_signals(&self) -> usize {
        self.failure_signals
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    /// Runs one bootstrap attempt from cold start.
    ///
    /// The tier is derived exactly once here and threaded through the rest
    /// of the attempt. Unsupported devices and the missing one-time download
    /// short-circuit before the runtime is ever touched.
    pub async fn run(&mut self) -> Result<BootstrapOutcome> {
        let tier = (self.classifier)(&self.signals);
        debug!(?tier, "classified device for bootstrap attempt");

        if tier == DeviceTier::Unsupported {
            self.phase = BootstrapPhase::Unsupported;
            warn!("device below supported floor; bootstrap blocked");
            return Ok(BootstrapOutcome::Unsupported);
        }

        if !self.settings.runtime_downloaded() {
            self.phase = BootstrapPhase::NeedsDownload;
            info!("first launch: runtime assets not downloaded yet");
            return Ok(BootstrapOutcome::NeedsDownload);
        }

        self.phase = BootstrapPhase::ReadyToInit;
        self.initialize_and_wait(tier).await
    }

    /// Consumes the download collaborator's completion event.
    ///
    /// Persists the one-time flag and re-arms the machine; the host runs the
    /// next attempt. Idempotent when the flag is already set.
    pub fn notify_download_complete(&mut self) -> Result<()> {
        self.settings.record_runtime_downloaded()?;
        if self.phase == BootstrapPhase::NeedsDownload {
            self.phase = BootstrapPhase::ReadyToInit;
        }
        Ok(())
    }

    /// User-triggered retry from `InitFailed` or re-check from `Unsupported`.
    ///
    /// Re-enters the attempt with a freshly built config; unbounded and
    /// without backoff by contract.
    pub async fn retry(&mut self) -> Result<BootstrapOutcome> {
        self.run().await
    }

    async fn initialize_and_wait(&mut self, tier: DeviceTier) -> Result<BootstrapOutcome> {
        self.phase = BootstrapPhase::Initializing;
        let config = build_runtime_config(&self.credentials, &self.device_id, tier);
        if !self.runtime.initialize(&config).await {
            self.phase = BootstrapPhase::InitFailed;
            self.failure_signals += 1;
            warn!(
                failure_signals = self.failure_signals,
                "runtime initialization failed"
            );
            return Ok(BootstrapOutcome::InitFailed);
        }

        self.phase = BootstrapPhase::WaitingReady;
        self.waiter.wait(&*self.runtime).await;
        self.phase = BootstrapPhase::Ready;
        info!("runtime initialized and ready");
        Ok(BootstrapOutcome::Ready)
    }
}
