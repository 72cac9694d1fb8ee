//! Device capability classification for the Aster launch sequence.
//!
//! Maps raw device capability signals to a coarse compatibility tier. The
//! tier selects the runtime compatibility tag (or blocks launch entirely on
//! hardware below the supported floor).

use serde::{Deserialize, Serialize};

const FULL_TIER_MIN_MEMORY_BYTES: u64 = 6 * 1024 * 1024 * 1024;
const SUPPORTED_MIN_MEMORY_BYTES: u64 = 3 * 1024 * 1024 * 1024;
const FULL_TIER_MIN_CORES: u32 = 6;
const SUPPORTED_MIN_CORES: u32 = 4;

/// Enumerates supported `DeviceTier` values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceTier {
    Full,
    Reduced,
    Unsupported,
}

/// Raw capability signals sampled by the host layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceSignals {
    pub total_memory_bytes: u64,
    pub cpu_core_count: u32,
    pub has_neural_accelerator: bool,
}

/// Classifies device signals into a compatibility tier.
///
/// Deterministic and total: every input maps to a tier. Hardware that clears
/// the supported floor but misses a full-tier requirement lands on Reduced,
/// so unknown future devices degrade rather than error.
pub fn classify_device_tier(signals: &DeviceSignals) -> DeviceTier {
    if signals.total_memory_bytes < SUPPORTED_MIN_MEMORY_BYTES
        || signals.cpu_core_count < SUPPORTED_MIN_CORES
    {
        return DeviceTier::Unsupported;
    }
    if signals.total_memory_bytes >= FULL_TIER_MIN_MEMORY_BYTES
        && signals.cpu_core_count >= FULL_TIER_MIN_CORES
        && signals.has_neural_accelerator
    {
        return DeviceTier::Full;
    }
    DeviceTier::Reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn signals(memory_gib: u64, cores: u32, accelerator: bool) -> DeviceSignals {
        DeviceSignals {
            total_memory_bytes: memory_gib * GIB,
            cpu_core_count: cores,
            has_neural_accelerator: accelerator,
        }
    }

    #[test]
    fn classifies_capable_hardware_as_full() {
        assert_eq!(
            classify_device_tier(&signals(8, 8, true)),
            DeviceTier::Full
        );
        assert_eq!(
            classify_device_tier(&signals(6, 6, true)),
            DeviceTier::Full
        );
    }

    #[test]
    fn classifies_below_floor_hardware_as_unsupported() {
        assert_eq!(
            classify_device_tier(&signals(2, 8, true)),
            DeviceTier::Unsupported
        );
        assert_eq!(
            classify_device_tier(&signals(8, 2, true)),
            DeviceTier::Unsupported
        );
        assert_eq!(
            classify_device_tier(&signals(0, 0, false)),
            DeviceTier::Unsupported
        );
    }

    #[test]
    fn middle_ground_hardware_degrades_to_reduced() {
        // Enough memory, no accelerator.
        assert_eq!(
            classify_device_tier(&signals(8, 8, false)),
            DeviceTier::Reduced
        );
        // Above the floor, below the full-tier thresholds.
        assert_eq!(
            classify_device_tier(&signals(4, 4, true)),
            DeviceTier::Reduced
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let input = signals(4, 6, false);
        let first = classify_device_tier(&input);
        for _ in 0..16 {
            assert_eq!(classify_device_tier(&input), first);
        }
    }
}
