//! # UI Components Module
//!
//! This module organizes all UI components for the budget planner application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Global egui styling for the form
//! - `toolbar` - Top row with the Add Header and Export to PDF buttons
//! - `budget_form` - The scrollable list of header cards with entry rows
//! - `modals` - Export warning and confirmation dialogs

pub mod budget_form;
pub mod modals;
pub mod styling;
pub mod toolbar;

pub use styling::setup_form_style;
