use async_trait::async_trait;

use crate::runtime_config::RuntimeConfig;

/// Boundary to the external on-device model runtime.
///
/// Both operations are boolean-only by contract: the runtime exposes no
/// structured error at this seam, so richer diagnostics have to come from
/// the collaborator's own logging.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Hands control to the runtime for one initialization attempt. May
    /// perform network and disk IO; duration is unbounded from here.
    async fn initialize(&self, config: &RuntimeConfig) -> bool;

    /// Reports whether the runtime has finished loading and can serve.
    async fn is_ready(&self) -> bool;
}
