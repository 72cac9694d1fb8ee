//! Aster launch-sequence CLI.
//!
//! Drives the bootstrap state machine against the simulated model runtime so
//! the cold-start flow (compatibility gate, one-time download, retries,
//! readiness, filler-audio preload, rating cadence) can be exercised locally.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aster_bootstrap::{
    default_download_items, request_review_and_record, AssetDownloader, BootstrapOrchestrator,
    BootstrapOutcome, DownloadItem, ReviewPrompter,
};
use aster_core::current_unix_timestamp_ms;
use aster_device::DeviceSignals;
use aster_runtime::{ReadinessWaiter, SimulatedModelRuntime};
use aster_settings::{load_runtime_credentials, SettingsStore};
use aster_voice::FillerAudioTable;

#[derive(Debug, Parser)]
#[command(name = "aster", about = "Aster assistant launch sequencer")]
struct Cli {
    /// Directory holding the durable install state.
    #[arg(long, env = "ASTER_STATE_DIR", default_value = ".aster")]
    state_dir: PathBuf,

    /// Runtime credentials config file (TOML).
    #[arg(long, env = "ASTER_CONFIG", default_value = ".aster/credentials.toml")]
    config: PathBuf,

    /// Bundled filler-voice PCM asset.
    #[arg(
        long,
        env = "ASTER_FILLER_AUDIO",
        default_value = "crates/aster-cli/assets/filler_voice_pcms.json"
    )]
    filler_audio: PathBuf,

    /// Stable device identifier sent to the runtime.
    #[arg(long, env = "ASTER_DEVICE_ID", default_value = "aster-dev-device")]
    device_id: String,

    /// Reported device memory in GiB.
    #[arg(long, default_value_t = 8)]
    memory_gib: u64,

    /// Reported CPU core count.
    #[arg(long, default_value_t = 8)]
    cpu_cores: u32,

    /// Whether the device reports a neural accelerator.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    neural_accelerator: bool,

    /// Milliseconds between readiness checks.
    #[arg(long, default_value_t = 100)]
    poll_interval_ms: u64,

    /// Scripted initialization failures before the simulated runtime accepts.
    #[arg(long, default_value_t = 0)]
    simulate_init_failures: usize,

    /// Readiness checks the simulated runtime stays pending for.
    #[arg(long, default_value_t = 3)]
    simulate_ready_checks: usize,

    /// Retry budget standing in for user-paced retries.
    #[arg(long, default_value_t = 3)]
    max_retries: usize,
}

/// Logs each descriptor instead of transferring; the real collaborator owns
/// progress UI and transfer mechanics.
struct LoggingDownloader;

#[async_trait]
impl AssetDownloader for LoggingDownloader {
    async fn fetch(&self, items: &[DownloadItem]) -> Result<()> {
        for item in items {
            info!(name = %item.name, url = %item.remote_url, "fetching launch asset");
        }
        Ok(())
    }
}

struct LoggingReviewPrompter;

impl ReviewPrompter for LoggingReviewPrompter {
    fn request_review(&self) {
        println!("enjoying aster? a rating prompt would appear here");
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let credentials = load_runtime_credentials(&cli.config)?;
    let settings = SettingsStore::open(&cli.state_dir)?;
    let signals = DeviceSignals {
        total_memory_bytes: cli.memory_gib * 1024 * 1024 * 1024,
        cpu_core_count: cli.cpu_cores,
        has_neural_accelerator: cli.neural_accelerator,
    };
    let runtime = Arc::new(SimulatedModelRuntime::new(
        cli.simulate_init_failures,
        cli.simulate_ready_checks,
    ));
    let waiter = ReadinessWaiter::new(Duration::from_millis(cli.poll_interval_ms));

    let mut sequencer = BootstrapOrchestrator::new(
        settings,
        credentials,
        cli.device_id.clone(),
        signals,
        runtime,
        waiter,
    );

    let mut retries_left = cli.max_retries;
    let mut outcome = sequencer.run().await?;
    loop {
        match outcome {
            BootstrapOutcome::Ready => break,
            BootstrapOutcome::Unsupported => {
                bail!("this device does not meet the minimum requirements for aster");
            }
            BootstrapOutcome::NeedsDownload => {
                let items = default_download_items();
                LoggingDownloader.fetch(&items).await?;
                sequencer.notify_download_complete()?;
                outcome = sequencer.run().await?;
            }
            BootstrapOutcome::InitFailed => {
                if retries_left == 0 {
                    bail!(
                        "runtime initialization failed after {} retries",
                        cli.max_retries
                    );
                }
                retries_left -= 1;
                warn!(retries_left, "initialization failed; retrying");
                outcome = sequencer.retry().await?;
            }
        }
    }
    println!("aster runtime is ready");

    let filler_audio = FillerAudioTable::load(&cli.filler_audio);
    if filler_audio.is_empty() {
        warn!("filler audio unavailable; voice playback will skip filler clips");
    } else {
        info!(frames = filler_audio.len(), "filler audio preloaded");
    }

    let now_ms = current_unix_timestamp_ms();
    let prompted = request_review_and_record(
        sequencer.settings_mut(),
        now_ms,
        true,
        &LoggingReviewPrompter,
    )?;
    if !prompted {
        info!("rating prompt not due today");
    }

    Ok(())
}
