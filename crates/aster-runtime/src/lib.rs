//! Model-runtime boundary for the Aster launch sequence.
//!
//! Provides the runtime-collaborator trait, per-attempt configuration
//! construction, the cooperative readiness wait, and a simulated runtime
//! used by tests and CLI dry runs.

pub mod model_runtime;
pub mod readiness;
pub mod runtime_config;
pub mod simulated;

pub use model_runtime::ModelRuntime;
pub use readiness::{ReadinessWaiter, WaitCancelled, DEFAULT_READINESS_POLL_INTERVAL};
pub use runtime_config::{build_runtime_config, RuntimeConfig};
pub use simulated::SimulatedModelRuntime;
