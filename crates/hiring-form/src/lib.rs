//! Employment application form state and Word document export.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
