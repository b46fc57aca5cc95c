use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::BudgetPlannerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Budget Planner egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])      // Enough room for a couple of header cards
            .with_min_inner_size([500.0, 400.0])  // Minimum usable size
            .with_title("Budget Planner")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Budget Planner",
        options,
        Box::new(|cc| {
            match BudgetPlannerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Budget Planner app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
