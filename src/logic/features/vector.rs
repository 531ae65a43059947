//! Feature Vector - Core data structure for ML input
//!
//! Versioned feature vector with layout validation. Uses the centralized
//! schema from `layout.rs` so the extractor, the oracle, and the telemetry
//! report all agree on feature identity and order.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned feature vector with layout metadata
///
/// Always carries exactly `FEATURE_COUNT` values in `FEATURE_LAYOUT` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values with current version
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Get values as array reference
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index
    pub fn set(&mut self, index: usize, value: f32) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Set feature by name
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = super::layout::feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Iterate (name, value) pairs in layout order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Check if this vector is compatible with current layout
    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": self.named()
                .map(|(name, value)| (name.to_string(), value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_new() {
        let vector = FeatureVector::new();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert_eq!(vector.values.len(), FEATURE_COUNT);
        assert!(vector.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_feature_vector_set_by_name() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("nb_dots", 3.0));
        assert_eq!(vector.get_by_name("nb_dots"), Some(3.0));

        assert!(!vector.set_by_name("nonexistent", 0.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);
    }

    #[test]
    fn test_feature_vector_named_order() {
        let vector = FeatureVector::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let named: Vec<(&str, f32)> = vector.named().collect();
        assert_eq!(named.len(), FEATURE_COUNT);
        assert_eq!(named[0], ("length_url", 1.0));
        assert_eq!(named[7], ("ip", 8.0));
    }

    #[test]
    fn test_feature_vector_validation() {
        let vector = FeatureVector::new();
        assert!(vector.is_compatible());
        assert!(vector.validate().is_ok());

        let stale = FeatureVector {
            version: FEATURE_VERSION + 1,
            ..FeatureVector::new()
        };
        assert!(!stale.is_compatible());
    }

    #[test]
    fn test_feature_vector_from_array() {
        let array = [1.0; FEATURE_COUNT];
        let vector: FeatureVector = array.into();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.values, array);
    }

    #[test]
    fn test_to_log_entry() {
        let mut vector = FeatureVector::new();
        vector.set_by_name("length_url", 26.0);

        let log = vector.to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["length_url"], 26.0);
    }
}
