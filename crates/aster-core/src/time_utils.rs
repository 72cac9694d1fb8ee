const MILLIS_PER_DAY: u64 = 86_400_000;

/// Returns the current Unix timestamp in milliseconds.
pub fn current_unix_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .try_into()
        .unwrap_or(u64::MAX)
}

/// Returns the current Unix timestamp in seconds.
pub fn current_unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Whole days elapsed between two millisecond timestamps, floored.
///
/// Saturates to zero when `later_ms` precedes `earlier_ms` so callers never
/// see a negative elapsed-day count from a clock that moved backwards.
pub fn whole_days_between_ms(earlier_ms: u64, later_ms: u64) -> u64 {
    later_ms.saturating_sub(earlier_ms) / MILLIS_PER_DAY
}
