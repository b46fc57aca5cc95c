//! Domain model for a budget entry.

use super::amount::{parse_amount, AmountParseError};

/// A single description/amount line item within a header.
///
/// The amount is kept as the raw string the user typed and parsed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub description: String,
    pub amount: String,
}

impl Entry {
    /// Create a new blank entry with a generated ID.
    pub fn new() -> Self {
        Self {
            id: super::generate_id("ent"),
            description: String::new(),
            amount: String::new(),
        }
    }

    /// Parse this entry's amount field.
    pub fn parsed_amount(&self) -> Result<f64, AmountParseError> {
        parse_amount(&self.amount)
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_blank() {
        let entry = Entry::new();
        assert!(entry.description.is_empty());
        assert!(entry.amount.is_empty());
        assert!(entry.id.starts_with("ent-"));
    }

    #[test]
    fn test_parsed_amount_reads_the_amount_field() {
        let mut entry = Entry::new();
        entry.amount = "19.99".to_string();
        assert_eq!(entry.parsed_amount(), Ok(19.99));

        entry.amount = "nineteen".to_string();
        assert!(entry.parsed_amount().is_err());
    }
}
