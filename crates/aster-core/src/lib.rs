//! Foundational low-level utilities shared across Aster crates.
//!
//! Provides atomic file-write helpers and time utilities used by the
//! persisted installation record and the engagement-prompt day arithmetic.

pub mod atomic_io;
pub mod time_utils;

pub use atomic_io::write_text_atomic;
pub use time_utils::{current_unix_timestamp, current_unix_timestamp_ms, whole_days_between_ms};

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;

    #[test]
    fn time_utils_round_trip_bounds() {
        let now_s = current_unix_timestamp();
        let now_ms = current_unix_timestamp_ms();
        let now_ms_s = now_ms / 1_000;
        assert!(now_ms_s >= now_s);
        assert!(now_ms_s <= now_s.saturating_add(1));
    }

    #[test]
    fn whole_days_between_ms_floors_and_saturates() {
        const DAY_MS: u64 = 86_400_000;
        assert_eq!(whole_days_between_ms(0, 0), 0);
        assert_eq!(whole_days_between_ms(0, DAY_MS - 1), 0);
        assert_eq!(whole_days_between_ms(0, DAY_MS), 1);
        assert_eq!(whole_days_between_ms(0, 3 * DAY_MS + 12), 3);
        // A clock that moved backwards must not underflow.
        assert_eq!(whole_days_between_ms(DAY_MS, 0), 0);
    }

    #[test]
    fn write_text_atomic_writes_content() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join("sample.txt");
        write_text_atomic(&path, "hello world").expect("write");
        let contents = read_to_string(&path).expect("read");
        assert_eq!(contents, "hello world");
    }

    #[test]
    fn write_text_atomic_creates_parent_directories() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join("nested/state/record.json");
        write_text_atomic(&path, "{}").expect("write");
        assert_eq!(read_to_string(&path).expect("read"), "{}");
    }
}
