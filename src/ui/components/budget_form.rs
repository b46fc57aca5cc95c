//! # Budget Form Component
//!
//! Renders the scrollable list of header cards. Each card shows the header
//! name input, its entry rows (description, amount, remove button), an Add
//! Entry button, and the running total for the header.
//!
//! The render pass iterates the header list immutably and collects every
//! requested mutation as a `BudgetFormAction`; the actions are applied after
//! the loop so the list is never mutated while it is being drawn.

use eframe::egui;

use crate::backend::domain::models::{Entry, Header};
use crate::ui::app_state::{BudgetFormAction, BudgetPlannerApp};

impl BudgetPlannerApp {
    /// Render all header cards and apply the collected mutations
    pub fn render_budget_form(&mut self, ui: &mut egui::Ui) {
        let mut actions: Vec<BudgetFormAction> = Vec::new();

        if self.backend.budget_service.headers().is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No headers yet. Click \"Add Header\" to get started.")
                        .color(egui::Color32::from_rgb(120, 120, 120)),
                );
            });
        }

        for header in self.backend.budget_service.headers() {
            ui.push_id(&header.id, |ui| {
                render_header_card(ui, header, &mut actions);
            });
            ui.add_space(10.0);
        }

        for action in actions {
            self.apply_form_action(action);
        }
    }
}

/// Render a single header card, pushing any requested mutation into `actions`.
fn render_header_card(ui: &mut egui::Ui, header: &Header, actions: &mut Vec<BudgetFormAction>) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(252, 252, 252))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            // Header name row with the remove button on the right
            ui.horizontal(|ui| {
                let mut name = header.name.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut name)
                        .desired_width(260.0)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                );
                if response.changed() {
                    actions.push(BudgetFormAction::RenameHeader {
                        header_id: header.id.clone(),
                        name,
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑 Remove Header").clicked() {
                        actions.push(BudgetFormAction::RemoveHeader {
                            header_id: header.id.clone(),
                        });
                    }
                });
            });

            ui.add_space(4.0);

            for entry in &header.entries {
                ui.push_id(&entry.id, |ui| {
                    render_entry_row(ui, header, entry, actions);
                });
            }

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("➕ Add Entry").clicked() {
                    actions.push(BudgetFormAction::AddEntry {
                        header_id: header.id.clone(),
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Total: ${:.2}", header.computed_total))
                            .strong(),
                    );
                });
            });
        });
}

/// Render one description/amount row of a header card.
fn render_entry_row(
    ui: &mut egui::Ui,
    header: &Header,
    entry: &Entry,
    actions: &mut Vec<BudgetFormAction>,
) {
    ui.horizontal(|ui| {
        let mut description = entry.description.clone();
        let mut amount = entry.amount.clone();

        let description_response = ui.add(
            egui::TextEdit::singleline(&mut description)
                .hint_text("Description")
                .desired_width(240.0),
        );

        ui.label("$");
        let amount_response = ui.add(
            egui::TextEdit::singleline(&mut amount)
                .hint_text("0.00")
                .desired_width(90.0),
        );

        if description_response.changed() || amount_response.changed() {
            actions.push(BudgetFormAction::UpdateEntry {
                header_id: header.id.clone(),
                entry_id: entry.id.clone(),
                description,
                amount,
            });
        }

        if ui.button("Remove").clicked() {
            actions.push(BudgetFormAction::RemoveEntry {
                header_id: header.id.clone(),
                entry_id: entry.id.clone(),
            });
        }
    });
}
