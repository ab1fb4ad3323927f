//! Contenthub - a terminal content hub for a 30-day LinkedIn campaign
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
