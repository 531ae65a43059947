//! Model Module - Classifier Oracle
//!
//! Loads and serves the pretrained classifier. The artifact's internal
//! structure is opaque to the rest of the crate; the only contract is a
//! deterministic probability over the named feature schema.

pub mod integrity;
pub mod oracle;

// Re-export common types
pub use oracle::{ModelMetadata, OnnxOracle, OracleError, ProbabilityOracle};
