//! # Domain Module
//!
//! Contains all business logic for the budget planner application.
//!
//! This module encapsulates the entities and services that define how budget
//! headers and their line-item entries are modeled, totaled, and exported. It
//! operates independently of the egui presentation layer.
//!
//! ## Module Organization
//!
//! - **models**: Core entities (`Header`, `Entry`) and amount parsing
//! - **budget_service**: Header/entry CRUD operations and total recomputation
//! - **export_service**: Report building and PDF rendering
//!
//! ## Business Rules
//!
//! - Amounts are user-editable strings, parsed on demand
//! - A header's computed total is the sum of its parseable amounts; rows that
//!   fail to parse are excluded from the total rather than raising an error
//! - Insertion order of headers and entries is display order and export order
//! - The exported report only contains rows with a non-empty description and a
//!   parseable amount, and only headers that contribute at least one such row

pub mod budget_service;
pub mod export_service;
pub mod models;

pub use budget_service::*;
pub use export_service::*;
