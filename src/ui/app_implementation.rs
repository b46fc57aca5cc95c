use eframe::egui;

use crate::ui::app_state::BudgetPlannerApp;
use crate::ui::components::styling::setup_form_style;

impl eframe::App for BudgetPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_form_style(ctx);

        // Clear messages after a delay
        self.expire_stale_messages(std::time::Instant::now());
        if self.error_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        // Main UI
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_toolbar(ui);

            ui.separator();

            self.render_messages(ui);

            // Scrollable list of header cards
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_budget_form(ui);
                });
        });

        // Render modals
        self.render_modals(ctx);
    }
}

impl BudgetPlannerApp {
    /// Render the transient error message line
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = self.error_message.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
                if ui.small_button("✖").clicked() {
                    self.clear_messages();
                }
            });
        }
    }
}
