//! Presentation layer: console driver for the budget screens.

/// Console event loop.
pub mod app;
/// Input line parsing.
pub mod commands;
/// Channel-backed navigator.
pub mod navigator;
/// Text rendering of view state.
pub mod render;

pub use app::{App, Exit};
pub use navigator::{ChannelNavigator, NavigationEvent};
