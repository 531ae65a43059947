//! Scoring Rules & Thresholds
//!
//! Constants and configurable thresholds only, no scoring logic.

use serde::{Deserialize, Serialize};

use super::types::Verdict;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Additive penalty when any suspicious keyword is found in the URL
pub const HEURISTIC_BONUS: f32 = 0.35;

/// Above this adjusted score = Warning (boundary itself stays Safe)
pub const WARNING_THRESHOLD: f32 = 0.30;

/// Above this adjusted score = Critical (boundary itself stays Warning)
pub const CRITICAL_THRESHOLD: f32 = 0.60;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Verdict tier boundaries, exclusive on the high side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictThresholds {
    /// Adjusted scores strictly above this are at least Warning
    pub warning_min: f32,
    /// Adjusted scores strictly above this are Critical
    pub critical_min: f32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            warning_min: WARNING_THRESHOLD,
            critical_min: CRITICAL_THRESHOLD,
        }
    }
}

impl VerdictThresholds {
    /// Tier a score, first match wins, strictly-greater comparisons
    pub fn verdict_for(&self, adjusted_score: f32) -> Verdict {
        if adjusted_score > self.critical_min {
            Verdict::Critical
        } else if adjusted_score > self.warning_min {
            Verdict::Warning
        } else {
            Verdict::Safe
        }
    }

    /// Lower boundaries, more alerts
    pub fn strict() -> Self {
        Self {
            warning_min: 0.20,
            critical_min: 0.50,
        }
    }

    /// Higher boundaries, fewer alerts
    pub fn lenient() -> Self {
        Self {
            warning_min: 0.40,
            critical_min: 0.75,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
