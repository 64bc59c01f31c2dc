pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod settings;
pub mod ui;
pub mod viewer;
