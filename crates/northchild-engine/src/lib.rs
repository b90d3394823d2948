pub mod config;
pub mod error;
pub mod fate;
pub mod telemetry;
