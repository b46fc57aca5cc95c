//! Budget service domain logic.
//!
//! Owns the ordered list of headers and applies every mutation the UI can
//! request: add/remove headers, add/remove entries, and writing edited field
//! values back. Each mutation recomputes the owning header's total before
//! returning, so the UI can always render `computed_total` directly.

use log::info;
use thiserror::Error;

use crate::backend::domain::models::{Entry, Header};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("header not found: {0}")]
    HeaderNotFound(String),
    #[error("entry not found: {0}")]
    EntryNotFound(String),
}

/// Budget service that owns all header/entry state for the session
pub struct BudgetService {
    headers: Vec<Header>,
}

impl BudgetService {
    /// Create a new service with no headers
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// The current headers, in display (and export) order
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Append a new header with the default name. Returns the new header's ID.
    pub fn add_header(&mut self) -> String {
        let header = Header::new();
        let id = header.id.clone();
        self.headers.push(header);
        info!("📋 BUDGET: Added header {} ({} total)", id, self.headers.len());
        id
    }

    /// Detach and discard a header and all of its entries.
    pub fn remove_header(&mut self, header_id: &str) -> Result<(), BudgetError> {
        let position = self
            .headers
            .iter()
            .position(|header| header.id == header_id)
            .ok_or_else(|| BudgetError::HeaderNotFound(header_id.to_string()))?;
        let removed = self.headers.remove(position);
        info!(
            "🗑️ BUDGET: Removed header {} '{}' with {} entries",
            removed.id,
            removed.name,
            removed.entries.len()
        );
        Ok(())
    }

    /// Update a header's name in place.
    pub fn rename_header(&mut self, header_id: &str, name: String) -> Result<(), BudgetError> {
        let header = self.header_mut(header_id)?;
        header.name = name;
        Ok(())
    }

    /// Append a blank entry to the given header. Returns the new entry's ID.
    pub fn add_entry(&mut self, header_id: &str) -> Result<String, BudgetError> {
        let header = self.header_mut(header_id)?;
        let entry = Entry::new();
        let id = entry.id.clone();
        header.entries.push(entry);
        header.recompute_total();
        info!("➕ BUDGET: Added entry {} to header {}", id, header_id);
        Ok(id)
    }

    /// Detach an entry and recompute the owning header's total.
    pub fn remove_entry(&mut self, header_id: &str, entry_id: &str) -> Result<(), BudgetError> {
        let header = self.header_mut(header_id)?;
        let position = header
            .entry_position(entry_id)
            .ok_or_else(|| BudgetError::EntryNotFound(entry_id.to_string()))?;
        header.entries.remove(position);
        header.recompute_total();
        info!("➖ BUDGET: Removed entry {} from header {}", entry_id, header_id);
        Ok(())
    }

    /// Write edited description/amount strings back to an entry and recompute
    /// the owning header's total. Called by the UI on every field change.
    pub fn update_entry(
        &mut self,
        header_id: &str,
        entry_id: &str,
        description: String,
        amount: String,
    ) -> Result<(), BudgetError> {
        let header = self.header_mut(header_id)?;
        let position = header
            .entry_position(entry_id)
            .ok_or_else(|| BudgetError::EntryNotFound(entry_id.to_string()))?;
        let entry = &mut header.entries[position];
        entry.description = description;
        entry.amount = amount;
        header.recompute_total();
        Ok(())
    }

    fn header_mut(&mut self, header_id: &str) -> Result<&mut Header, BudgetError> {
        self.headers
            .iter_mut()
            .find(|header| header.id == header_id)
            .ok_or_else(|| BudgetError::HeaderNotFound(header_id.to_string()))
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
