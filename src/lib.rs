pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod logging;
pub mod shutdown;
pub mod ui;
pub mod workload;
