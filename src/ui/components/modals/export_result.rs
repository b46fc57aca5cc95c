//! # Export Result Modals
//!
//! The two dialogs raised by the export flow: a warning when there is no data
//! to export (no file is written in that case), and a confirmation naming the
//! report file after a successful export.

use eframe::egui;

use crate::ui::app_state::BudgetPlannerApp;

const MODAL_SIZE: egui::Vec2 = egui::vec2(380.0, 170.0);

impl BudgetPlannerApp {
    /// Render the "no data to export" warning modal
    pub fn render_export_warning_modal(&mut self, ctx: &egui::Context) {
        let mut visible = self.show_export_warning_modal;
        render_notice_modal(
            ctx,
            "export_warning_modal_overlay",
            "⚠ Warning",
            "No data to export!",
            egui::Color32::from_rgb(230, 150, 0),
            &mut visible,
            self.modal_just_opened,
        );
        self.show_export_warning_modal = visible;
    }

    /// Render the export-complete confirmation modal
    pub fn render_export_complete_modal(&mut self, ctx: &egui::Context) {
        let message = self.export_complete_message.clone();
        let mut visible = self.show_export_complete_modal;
        render_notice_modal(
            ctx,
            "export_complete_modal_overlay",
            "✅ Export Complete",
            &message,
            egui::Color32::from_rgb(60, 160, 90),
            &mut visible,
            self.modal_just_opened,
        );
        self.show_export_complete_modal = visible;
    }
}

/// Render a single-message notice modal with an OK button. Clears `visible`
/// when the user clicks OK or anywhere outside the modal. While `just_opened`
/// is set the backdrop check is skipped, so the click that raised the modal
/// (which lands outside the modal rect) cannot dismiss it in the same frame.
fn render_notice_modal(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    message: &str,
    color: egui::Color32,
    visible: &mut bool,
    just_opened: bool,
) {
    if !*visible {
        return;
    }

    // Use Area with Foreground order to ensure it appears above everything
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            // Dark semi-transparent background
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            // Center the modal content
            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(&ui.style())
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(2.0, color))
                        .rounding(egui::Rounding::same(12.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_size(MODAL_SIZE);
                            ui.set_max_size(MODAL_SIZE);

                            ui.vertical_centered(|ui| {
                                ui.add_space(10.0);

                                ui.label(
                                    egui::RichText::new(title)
                                        .font(egui::FontId::new(
                                            22.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong()
                                        .color(color),
                                );

                                ui.add_space(12.0);

                                ui.label(
                                    egui::RichText::new(message)
                                        .font(egui::FontId::new(
                                            15.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(egui::Color32::from_rgb(60, 60, 60)),
                                );

                                ui.add_space(18.0);

                                let ok_button = egui::Button::new(
                                    egui::RichText::new("OK")
                                        .font(egui::FontId::new(
                                            15.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(egui::Color32::WHITE),
                                )
                                .fill(color)
                                .rounding(egui::Rounding::same(8.0))
                                .min_size(egui::vec2(90.0, 32.0));

                                if ui.add(ok_button).clicked() {
                                    *visible = false;
                                }
                            });
                        });
                });
            });

            // Handle backdrop clicks to close the modal. Only after the modal
            // has been open for at least one frame, so the button click that
            // opened it does not close it again immediately.
            if !just_opened && ui.ctx().input(|i| i.pointer.any_click()) {
                if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                    let modal_rect = egui::Rect::from_center_size(
                        ui.ctx().screen_rect().center(),
                        MODAL_SIZE,
                    );
                    if !modal_rect.contains(pointer_pos) {
                        *visible = false;
                    }
                }
            }
        });
}
