pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod upload;
