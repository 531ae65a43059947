//! Model Artifact Integrity
//!
//! SHA-256 digest of the classifier artifact, computed at load time. The
//! digest is recorded in the model metadata and, when a pinned digest is
//! configured, verified before the model is accepted.

use sha2::{Digest, Sha256};

use super::oracle::OracleError;

/// Compute the hex SHA-256 digest of a file
pub fn sha256_file(path: &str) -> Result<String, OracleError> {
    let bytes = std::fs::read(path)
        .map_err(|e| OracleError(format!("Failed to read model artifact {}: {}", path, e)))?;
    Ok(sha256_bytes(&bytes))
}

/// Compute the hex SHA-256 digest of a byte slice
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Verify an actual digest against an expected one (case-insensitive hex)
pub fn verify_digest(actual: &str, expected: &str) -> Result<(), OracleError> {
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(OracleError(format!(
            "Model checksum mismatch: expected {}, got {}",
            expected, actual
        )));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
