//! Features Module - URL Lexical Feature Extraction
//!
//! The schema (`layout`), the vector type (`vector`), and the extractor
//! (`url`) are split so the oracle and telemetry can depend on the schema
//! without pulling in extraction.

pub mod layout;
pub mod url;
pub mod vector;


// Re-export common types
pub use layout::{layout_hash, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use url::extract;
pub use vector::FeatureVector;
