pub mod command;
pub mod config;
pub mod report;
pub mod runner;
pub mod transport;
