//! # Styling Module
//!
//! Global egui styling for the budget planner form.

use eframe::egui;

/// Setup form styling for the entire application
pub fn setup_form_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;
        // Light background so text fields stand out against the cards
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        // Slightly larger text for form readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);

        style
    });
}
