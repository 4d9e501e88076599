//! Homebudget - monthly household budget kept in a spreadsheet.
//!
//! This crate provides a console client that shows planned and actual
//! amounts per month and records new expenses through a budget-data service.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing action loops and view state.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the console driver.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "homebudget";
