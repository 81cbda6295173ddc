pub mod client;
pub mod config;
pub mod errors;
pub mod format;
pub mod model;
pub mod report;
