//! Classifier Oracle - ONNX Runtime Integration
//!
//! The pretrained phishing classifier, consumed as an opaque probability
//! function over the 8 lexical features. Loaded once at startup and held
//! read-shared for the process lifetime; scoring never mutates it.
//!
//! The `ProbabilityOracle` trait is the seam: the scorer and the analyze
//! boundary only see `predict`, so tests substitute a stub and a future
//! runtime swap does not touch callers.

use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::logic::features::{layout_hash, FeatureVector, FEATURE_COUNT, FEATURE_VERSION};

use super::integrity;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct OracleError(pub String);

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for OracleError {}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata recorded at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub sha256: String,
    pub feature_count: usize,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// ORACLE TRAIT
// ============================================================================

/// Opaque probability oracle: features in, P(phishing) in [0, 1] out
///
/// Implementations must be deterministic for a fixed loaded artifact and safe
/// for concurrent read-only use.
pub trait ProbabilityOracle: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f32, OracleError>;

    fn metadata(&self) -> Option<ModelMetadata> {
        None
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed oracle
///
/// The session lock only serializes `run` calls; the model itself is
/// immutable after load.
pub struct OnnxOracle {
    session: RwLock<Session>,
    metadata: ModelMetadata,
}

impl OnnxOracle {
    /// Load the classifier artifact from disk
    ///
    /// Fails on a missing or unreadable file, a checksum mismatch against a
    /// pinned digest, or an artifact the runtime cannot parse. There is no
    /// fallback path: an unloaded oracle means no scoring.
    pub fn load(model_path: &str) -> Result<Self, OracleError> {
        log::info!("Loading ONNX model from: {}", model_path);

        if !Path::new(model_path).exists() {
            return Err(OracleError(format!("Model not found: {}", model_path)));
        }

        let sha256 = integrity::sha256_file(model_path)?;
        if let Some(expected) = crate::constants::get_expected_model_sha256() {
            integrity::verify_digest(&sha256, &expected)?;
            log::info!("Model checksum verified");
        }

        let session = Session::builder()
            .map_err(|e| OracleError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| OracleError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| OracleError(format!("Failed to load model: {}", e)))?;

        log::info!("ONNX model loaded (sha256: {})", &sha256[..12]);

        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            sha256,
            feature_count: FEATURE_COUNT,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            loaded_at: Utc::now(),
        };

        Ok(Self {
            session: RwLock::new(session),
            metadata,
        })
    }
}

impl ProbabilityOracle for OnnxOracle {
    fn predict(&self, features: &FeatureVector) -> Result<f32, OracleError> {
        features
            .validate()
            .map_err(|e| OracleError(e.to_string()))?;

        let input_array =
            Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
                .map_err(|e| OracleError(format!("Array error: {}", e)))?;

        let mut session = self.session.write();

        // Classifier graphs exported from sklearn carry a label output first
        // and a probability tensor last (export with zipmap disabled).
        let output_name = session
            .outputs
            .last()
            .map(|o| o.name.clone())
            .ok_or_else(|| OracleError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| OracleError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| OracleError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| OracleError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| OracleError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        // Two-class probability row is [P(benign), P(phishing)]; a
        // single-value output is the phishing score directly.
        let probability = match data.len() {
            0 => return Err(OracleError("Empty output tensor".to_string())),
            1 => data[0],
            _ => data[1],
        };

        Ok(probability.clamp(0.0, 1.0))
    }

    fn metadata(&self) -> Option<ModelMetadata> {
        Some(self.metadata.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::extract;

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = OnnxOracle::load("/nonexistent/phishing_model.onnx");
        assert!(result.is_err());
        let msg = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("Model not found"));
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"not an onnx graph").expect("write");

        let result = OnnxOracle::load(file.path().to_str().expect("utf8 path"));
        assert!(result.is_err());
    }

    /// A stub oracle exercises the trait seam without an artifact
    struct FixedOracle(f32);

    impl ProbabilityOracle for FixedOracle {
        fn predict(&self, _features: &FeatureVector) -> Result<f32, OracleError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let oracle: Box<dyn ProbabilityOracle> = Box::new(FixedOracle(0.42));
        let features = extract("http://example.com");
        assert_eq!(oracle.predict(&features).ok(), Some(0.42));
        assert!(oracle.metadata().is_none());
    }
}
