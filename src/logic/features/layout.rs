//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The classifier was trained against exactly this schema; the layout hash
//! lets a retrained model against a different schema be detected at runtime
//! instead of silently mis-scoring.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    "length_url",  // 0: Character count of the URL
    "nb_dots",     // 1: Count of '.' characters
    "nb_hyphens",  // 2: Count of '-' characters
    "nb_at",       // 3: Count of '@' characters
    "nb_slash",    // 4: Count of '/' characters
    "nb_www",      // 5: 1 iff "www" appears anywhere (case-sensitive)
    "https_token", // 6: 1 iff "https" appears anywhere, not only the scheme
    "ip",          // 7: 1 iff a dotted-quad digit pattern appears
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 8;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Check if layout is compatible (same version, same hash)
pub fn is_layout_compatible(version: u8, hash: u32) -> bool {
    version == FEATURE_VERSION && hash == layout_hash()
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 8);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_order_is_authoritative() {
        assert_eq!(FEATURE_LAYOUT[0], "length_url");
        assert_eq!(FEATURE_LAYOUT[5], "nb_www");
        assert_eq!(FEATURE_LAYOUT[6], "https_token");
        assert_eq!(FEATURE_LAYOUT[7], "ip");
    }

    #[test]
    fn test_layout_hash_consistency() {
        let hash1 = compute_layout_hash();
        let hash2 = compute_layout_hash();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_layout_hash_non_zero() {
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout_success() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
    }

    #[test]
    fn test_validate_layout_version_mismatch() {
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
    }

    #[test]
    fn test_validate_layout_hash_mismatch() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("length_url"), Some(0));
        assert_eq!(feature_index("nb_at"), Some(3));
        assert_eq!(feature_index("ip"), Some(7));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("length_url"));
        assert_eq!(feature_name(7), Some("ip"));
        assert_eq!(feature_name(100), None);
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
    }
}
