//! Logic Module - Scoring Engines
//!
//! ## Architecture
//! - `features/`  - URL lexical feature extraction
//! - `heuristic`  - Suspicious keyword scan
//! - `model/`     - Classifier oracle (ONNX) + artifact integrity
//! - `scorer/`    - Signal combination and verdict tiering
//! - `telemetry/` - Display/debug report assembly

pub mod features;
pub mod heuristic;
pub mod model;
pub mod scorer;
pub mod telemetry;
