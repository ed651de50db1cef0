//! Bubble-tea purchase journal: record store, brand list and spending stats

pub mod config;
pub mod services;
pub mod types;
