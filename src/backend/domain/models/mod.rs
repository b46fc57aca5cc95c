//! Domain models for the budget planner.

pub mod amount;
pub mod entry;
pub mod header;

pub use amount::{parse_amount, AmountParseError};
pub use entry::Entry;
pub use header::Header;

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a unique entity ID with the given prefix.
/// Format: <prefix>-<timestamp_ms>-<random_suffix>
/// Example: hdr-1625846400123-af3c
pub(crate) fn generate_id(prefix: &str) -> String {
    let now_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64;
    format!("{}-{}-{}", prefix, now_millis, random_suffix(4))
}

/// Generate a random hex suffix for entity IDs.
fn random_suffix(len: usize) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("{:x}", now % (16_u128.pow(len as u32)))
        .chars()
        .take(len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("hdr");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "hdr");
        assert!(parts[1].parse::<u64>().is_ok());
        assert!(!parts[2].is_empty());
    }
}
