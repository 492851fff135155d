//! covidash - a terminal dashboard for COVID-19 statistics
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod selectors;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
