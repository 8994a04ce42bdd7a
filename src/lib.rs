// task-analyzer library crate
// Exposes modules for integration testing

pub mod charts;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod source;
pub mod utils;
