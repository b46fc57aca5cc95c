//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the budget planner app.
//!
//! ## Key Types:
//! - `BudgetPlannerApp` - Main application state struct
//! - `BudgetFormAction` - Deferred mutation collected while rendering
//!
//! ## State Management:
//! The BudgetPlannerApp struct holds all application state in a single
//! location: the backend (which owns the header/entry data), transient
//! error messages, and modal visibility state. The form components never
//! mutate the header list directly while iterating it; they emit
//! `BudgetFormAction`s which are applied after the render pass.

use std::time::{Duration, Instant};

use log::info;

use crate::backend::Backend;

/// How long a transient error message stays on screen.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// A mutation requested by the form while the header list was being rendered.
/// Applied after the render pass so the list is never mutated mid-iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetFormAction {
    RenameHeader {
        header_id: String,
        name: String,
    },
    RemoveHeader {
        header_id: String,
    },
    AddEntry {
        header_id: String,
    },
    RemoveEntry {
        header_id: String,
        entry_id: String,
    },
    UpdateEntry {
        header_id: String,
        entry_id: String,
        description: String,
        amount: String,
    },
}

/// Main application struct for the egui budget planner
pub struct BudgetPlannerApp {
    pub backend: Backend,

    // UI state
    pub error_message: Option<String>,
    error_message_raised_at: Option<Instant>,

    // Modal states
    pub show_export_warning_modal: bool,
    pub show_export_complete_modal: bool,
    pub export_complete_message: String,
    pub modal_just_opened: bool,
}

impl BudgetPlannerApp {
    /// Create a new BudgetPlannerApp with an empty budget
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing BudgetPlannerApp");

        Ok(Self::with_backend(Backend::new()?))
    }

    /// Build the app state around an existing backend
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend,

            // UI state
            error_message: None,
            error_message_raised_at: None,

            // Modal states
            show_export_warning_modal: false,
            show_export_complete_modal: false,
            export_complete_message: String::new(),
            modal_just_opened: false,
        }
    }

    /// Apply a deferred form action to the budget service.
    pub fn apply_form_action(&mut self, action: BudgetFormAction) {
        let result = match action {
            BudgetFormAction::RenameHeader { header_id, name } => {
                self.backend.budget_service.rename_header(&header_id, name)
            }
            BudgetFormAction::RemoveHeader { header_id } => {
                self.backend.budget_service.remove_header(&header_id)
            }
            BudgetFormAction::AddEntry { header_id } => self
                .backend
                .budget_service
                .add_entry(&header_id)
                .map(|_| ()),
            BudgetFormAction::RemoveEntry {
                header_id,
                entry_id,
            } => self
                .backend
                .budget_service
                .remove_entry(&header_id, &entry_id),
            BudgetFormAction::UpdateEntry {
                header_id,
                entry_id,
                description,
                amount,
            } => self
                .backend
                .budget_service
                .update_entry(&header_id, &entry_id, description, amount),
        };

        // Ids come from the rendered state, so failures here mean a stale
        // frame; surface them on the message line rather than panicking.
        if let Err(e) = result {
            log::warn!("⚠️ Form action failed: {}", e);
            self.set_error(e.to_string());
        }
    }

    /// Run the PDF export and raise the matching modal.
    pub fn handle_export(&mut self) {
        use crate::backend::domain::ExportError;

        match self
            .backend
            .export_service
            .export_to_pdf(self.backend.budget_service.headers())
        {
            Ok(outcome) => {
                self.export_complete_message = format!("Data exported to {}", outcome.filename);
                self.show_export_complete_modal = true;
                self.modal_just_opened = true;
            }
            Err(ExportError::NothingToExport) => {
                self.show_export_warning_modal = true;
                self.modal_just_opened = true;
            }
            Err(e) => {
                log::error!("❌ Export failed: {}", e);
                self.set_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Put a transient error message on the message line
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.error_message_raised_at = Some(Instant::now());
    }

    /// Drop the error message once it has been on screen long enough
    pub fn expire_stale_messages(&mut self, now: Instant) {
        if let Some(raised_at) = self.error_message_raised_at {
            if now.duration_since(raised_at) >= MESSAGE_TIMEOUT {
                self.clear_messages();
            }
        }
    }

    /// Clear any transient error message
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.error_message_raised_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> BudgetPlannerApp {
        BudgetPlannerApp::with_backend(Backend::new().unwrap())
    }

    #[test]
    fn test_failed_form_action_raises_the_message_line() {
        let mut app = test_app();
        app.apply_form_action(BudgetFormAction::RemoveHeader {
            header_id: "hdr-0-dead".to_string(),
        });
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_error_message_expires_after_timeout() {
        let mut app = test_app();
        app.set_error("something went wrong".to_string());

        let raised = Instant::now();
        app.expire_stale_messages(raised);
        assert!(app.error_message.is_some());

        app.expire_stale_messages(raised + MESSAGE_TIMEOUT);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_clear_messages_resets_the_timer() {
        let mut app = test_app();
        app.set_error("something went wrong".to_string());
        app.clear_messages();
        assert!(app.error_message.is_none());
        assert!(app.error_message_raised_at.is_none());
    }
}
