//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default model artifact, only edit this file.

/// App name
pub const APP_NAME: &str = "PhishGuard";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default path of the ONNX classifier artifact
///
/// This is the fallback path when no CLI flag or environment variable is set.
/// The artifact is produced by the training pipeline and loaded once at
/// process start.
pub const DEFAULT_MODEL_PATH: &str = "phishing_model.onnx";

/// Default analysis sensitivity (risk threshold divisor)
///
/// Lower values make the system stricter. Must stay inside (0.0, 1.0].
pub const DEFAULT_SENSITIVITY: f32 = 0.3;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("PHISHGUARD_MODEL")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Expected SHA-256 digest of the model artifact, if pinned
///
/// When set, the artifact is verified at load and a mismatch is treated as a
/// load failure.
pub fn get_expected_model_sha256() -> Option<String> {
    std::env::var("PHISHGUARD_MODEL_SHA256")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
