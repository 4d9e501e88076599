//! Budget-data service HTTP adapter.

mod client;
mod dto;

pub use client::HttpBudgetClient;
