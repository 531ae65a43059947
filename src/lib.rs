//! PhishGuard Core - Hybrid (AI + Heuristic) URL Threat Scoring
//!
//! Given a URL string and a caller-supplied sensitivity, the core extracts a
//! fixed lexical feature vector, asks a pretrained classifier for a phishing
//! probability, scans for suspicious keywords, and merges the signals into a
//! normalized risk score with a SAFE / WARNING / CRITICAL verdict.
//!
//! ## Architecture
//! - `logic/features/` - Lexical feature extraction (schema, vector, extractor)
//! - `logic/heuristic`  - Suspicious keyword vocabulary scan
//! - `logic/model/`     - Classifier oracle (ONNX) + artifact integrity
//! - `logic/scorer/`    - Score combination and verdict tiering
//! - `logic/telemetry/` - Read-only report assembly for display
//! - `api/`             - The `analyze` boundary consumed by callers

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;
