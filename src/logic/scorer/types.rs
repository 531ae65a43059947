//! Scorer Types
//!
//! Data structures only, no scoring logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICT
// ============================================================================

/// Threat verdict tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No malicious indicators found
    Safe,
    /// Suspicious characteristics, proceed with caution
    Warning,
    /// Matches known phishing patterns
    Critical,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Warning => "warning",
            Verdict::Critical => "critical",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Verdict::Safe => 0,
            Verdict::Warning => 1,
            Verdict::Critical => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Verdict::Safe => "#10b981",     // Emerald Green
            Verdict::Warning => "#f59e0b",  // Amber
            Verdict::Critical => "#ef4444", // Red
        }
    }

    /// Banner line for user-facing output
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE SITE",
            Verdict::Warning => "POTENTIAL RISK",
            Verdict::Critical => "CRITICAL THREAT DETECTED",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE RESULT
// ============================================================================

/// Full output of one scoring call
///
/// Ephemeral: produced and consumed within a single analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Classifier probability, 0.0 - 1.0
    pub ai_probability: f32,
    /// 0.35 when any suspicious keyword matched, else 0.0
    pub heuristic_bonus: f32,
    /// ai_probability + heuristic_bonus, before sensitivity adjustment
    pub raw_score: f32,
    /// Caller-supplied divisor in (0.0, 1.0]; lower is stricter
    pub sensitivity: f32,
    /// min(raw_score / sensitivity, 1.0)
    pub adjusted_score: f32,
    pub verdict: Verdict,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_ordering_by_severity() {
        assert!(Verdict::Safe.severity_level() < Verdict::Warning.severity_level());
        assert!(Verdict::Warning.severity_level() < Verdict::Critical.severity_level());
    }

    #[test]
    fn test_verdict_strings() {
        assert_eq!(Verdict::Safe.as_str(), "safe");
        assert_eq!(Verdict::Critical.to_string(), "critical");
        assert_eq!(Verdict::Warning.headline(), "POTENTIAL RISK");
    }
}
