pub mod cli;
pub mod config;
pub mod credentials;
pub mod data;
pub mod error;
pub mod ui;
