//! Telemetry Module - Analysis Breakdown Reports

pub mod report;

// Re-export common types
pub use report::{assemble, FeatureReading, TelemetryReport};
