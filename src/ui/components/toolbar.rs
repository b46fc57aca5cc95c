//! # Toolbar Component
//!
//! The top row of the window: the application title plus the two
//! budget-wide actions (Add Header, Export to PDF).

use eframe::egui;

use crate::ui::app_state::BudgetPlannerApp;

impl BudgetPlannerApp {
    /// Render the toolbar with the budget-wide action buttons
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💰 Budget Planner")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📄 Export to PDF").clicked() {
                    self.handle_export();
                }
                if ui.button("➕ Add Header").clicked() {
                    self.backend.budget_service.add_header();
                }
            });
        });
    }
}
