pub mod add;
pub mod bank;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod log;
pub mod punch;
pub mod report;
pub mod settings;
pub mod status;
