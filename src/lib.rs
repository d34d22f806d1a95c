//! PhysioConnect - a terminal client for home physiotherapy care
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod environment;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod screens;
pub mod terminal;
pub mod traits;
pub mod ui;
