//! Cold-start bootstrap sequencing for the Aster assistant.
//!
//! Decides on every launch whether the device can run the bundled model
//! runtime, gates first launch behind the one-time asset download, drives
//! runtime initialization with user-paced retries, blocks until readiness,
//! and schedules the engagement prompt cadence.

pub mod download;
pub mod engagement;
pub mod orchestrator;

pub use download::{default_download_items, AssetDownloader, DownloadItem};
pub use engagement::{request_review_and_record, should_prompt_for_rating, ReviewPrompter};
pub use orchestrator::{BootstrapOrchestrator, BootstrapOutcome, BootstrapPhase, ClassifierFn};
