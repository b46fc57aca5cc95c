//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to the budget domain services
//! for the egui frontend. It is:
//! - Synchronous (no async/await)
//! - In-memory only (no storage layer; data lives for the session)
//! - Optimized for desktop-only operation

use anyhow::Result;

// Domain modules
pub mod domain;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub budget_service: domain::BudgetService,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a new backend with empty budget state
    pub fn new() -> Result<Self> {
        Ok(Self {
            budget_service: domain::BudgetService::new(),
            export_service: domain::ExportService::new(),
        })
    }
}
