//! Domain model for a budget header (category).

use super::entry::Entry;

/// Default name assigned when a header is first created.
pub const DEFAULT_HEADER_NAME: &str = "New Header";

/// A named budget category grouping entries.
///
/// `computed_total` is recomputed after every mutation and always equals the
/// sum of the entries whose amounts parse; rows that fail to parse contribute
/// nothing (they are excluded, not treated as zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub id: String,
    pub name: String,
    pub entries: Vec<Entry>,
    pub computed_total: f64,
}

impl Header {
    /// Create a new header with the default name and no entries.
    pub fn new() -> Self {
        Self {
            id: super::generate_id("hdr"),
            name: DEFAULT_HEADER_NAME.to_string(),
            entries: Vec::new(),
            computed_total: 0.0,
        }
    }

    /// Recompute the total from the current entries.
    pub fn recompute_total(&mut self) {
        self.computed_total = self
            .entries
            .iter()
            .filter_map(|entry| entry.parsed_amount().ok())
            .sum();
    }

    /// Position of an entry within this header, or `None` if it is not here.
    pub fn entry_position(&self, entry_id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == entry_id)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
