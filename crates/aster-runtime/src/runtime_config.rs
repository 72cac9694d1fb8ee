use aster_device::DeviceTier;
use aster_settings::RuntimeCredentials;

/// Immutable runtime initialization config, built fresh per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub client_id: String,
    pub client_secret: String,
    pub host: String,
    pub device_id: String,
    pub debug: bool,
    pub compatibility_tag: String,
}

/// Builds the initialization config for one attempt.
///
/// Reduced-tier devices select the lower-tier compatibility tag; every other
/// tier selects the standard tag. The orchestrator never builds a config for
/// an Unsupported device, so the standard tag there is inert.
pub fn build_runtime_config(
    credentials: &RuntimeCredentials,
    device_id: &str,
    tier: DeviceTier,
) -> RuntimeConfig {
    let compatibility_tag = match tier {
        DeviceTier::Reduced => credentials.lower_tier_compatibility_tag.clone(),
        DeviceTier::Full | DeviceTier::Unsupported => credentials.compatibility_tag.clone(),
    };
    RuntimeConfig {
        client_id: credentials.client_id.clone(),
        client_secret: credentials.client_secret.clone(),
        host: credentials.host.clone(),
        device_id: device_id.to_string(),
        debug: credentials.debug,
        compatibility_tag,
    }
}
