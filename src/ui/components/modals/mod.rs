//! # Modals Module
//!
//! Modal dialogs for the budget planner app.
//!
//! ## Module Organization:
//! - `export_result` - Export warning ("No data to export!") and
//!   export-complete confirmation dialogs

pub mod export_result;

use eframe::egui;

use crate::ui::app_state::BudgetPlannerApp;

impl BudgetPlannerApp {
    /// Render whichever modal is currently visible
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_export_warning_modal(ctx);
        self.render_export_complete_modal(ctx);

        // Reset the just-opened flag after the first rendered frame so
        // backdrop clicks start closing the modal from the next frame on
        self.modal_just_opened = false;
    }
}
