pub mod bank;
pub mod calculator;
pub mod config;
pub mod log;
pub mod punch;
pub mod report;
pub mod settings;
pub mod status;
