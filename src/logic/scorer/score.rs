//! Risk Scorer
//!
//! Merges the classifier probability, the keyword heuristic, and the
//! caller-supplied sensitivity into the final normalized score and verdict.
//! Pure arithmetic, no retries: once the sensitivity precondition passes,
//! scoring cannot fail.

use crate::error::AnalysisError;

use super::rules::{VerdictThresholds, HEURISTIC_BONUS};
use super::types::ScoreResult;

/// Reject sensitivity values outside (0.0, 1.0]
///
/// Checked before any division; NaN is rejected by the same comparison.
pub fn validate_sensitivity(sensitivity: f32) -> Result<(), AnalysisError> {
    if sensitivity > 0.0 && sensitivity <= 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidSensitivity(sensitivity))
    }
}

/// Score with the default verdict boundaries
pub fn score(
    ai_probability: f32,
    keyword_hits: &[&str],
    sensitivity: f32,
) -> Result<ScoreResult, AnalysisError> {
    score_with_thresholds(
        ai_probability,
        keyword_hits,
        sensitivity,
        &VerdictThresholds::default(),
    )
}

/// Score with custom verdict boundaries
///
/// 1. heuristic_bonus = 0.35 if any keyword hit, else 0.0
/// 2. raw_score = ai_probability + heuristic_bonus
/// 3. adjusted_score = min(raw_score / sensitivity, 1.0)
/// 4. tier the adjusted score, strictly-greater comparisons
pub fn score_with_thresholds(
    ai_probability: f32,
    keyword_hits: &[&str],
    sensitivity: f32,
    thresholds: &VerdictThresholds,
) -> Result<ScoreResult, AnalysisError> {
    validate_sensitivity(sensitivity)?;

    let heuristic_bonus = if keyword_hits.is_empty() {
        0.0
    } else {
        HEURISTIC_BONUS
    };

    let raw_score = ai_probability + heuristic_bonus;
    let adjusted_score = (raw_score / sensitivity).min(1.0);
    let verdict = thresholds.verdict_for(adjusted_score);

    Ok(ScoreResult {
        ai_probability,
        heuristic_bonus,
        raw_score,
        sensitivity,
        adjusted_score,
        verdict,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scorer::types::Verdict;

    #[test]
    fn test_no_keywords_strict_sensitivity_clamps_to_critical() {
        let result = score(0.5, &[], 0.3).expect("valid sensitivity");
        assert_eq!(result.heuristic_bonus, 0.0);
        assert_eq!(result.raw_score, 0.5);
        assert_eq!(result.adjusted_score, 1.0);
        assert_eq!(result.verdict, Verdict::Critical);
    }

    #[test]
    fn test_keyword_bonus_at_neutral_sensitivity() {
        let result = score(0.1, &["login"], 1.0).expect("valid sensitivity");
        assert_eq!(result.heuristic_bonus, 0.35);
        assert!((result.raw_score - 0.45).abs() < 1e-6);
        assert!((result.adjusted_score - 0.45).abs() < 1e-6);
        assert_eq!(result.verdict, Verdict::Warning);
    }

    #[test]
    fn test_bonus_is_flat_regardless_of_hit_count() {
        let one = score(0.1, &["login"], 1.0).expect("valid");
        let many = score(0.1, &["login", "secure", "verify"], 1.0).expect("valid");
        assert_eq!(one.heuristic_bonus, many.heuristic_bonus);
        assert_eq!(one.adjusted_score, many.adjusted_score);
    }

    #[test]
    fn test_boundary_exactness() {
        // Exactly 0.60 stays Warning, exactly 0.30 stays Safe
        let at_critical = score(0.60, &[], 1.0).expect("valid");
        assert_eq!(at_critical.adjusted_score, 0.60);
        assert_eq!(at_critical.verdict, Verdict::Warning);

        let at_warning = score(0.30, &[], 1.0).expect("valid");
        assert_eq!(at_warning.adjusted_score, 0.30);
        assert_eq!(at_warning.verdict, Verdict::Safe);
    }

    #[test]
    fn test_sensitivity_zero_is_rejected() {
        let no_hits: &[&str] = &[];
        let with_hits: &[&str] = &["login"];
        for hits in [no_hits, with_hits] {
            let result = score(0.5, hits, 0.0);
            assert_eq!(result, Err(AnalysisError::InvalidSensitivity(0.0)));
        }
    }

    #[test]
    fn test_sensitivity_out_of_range_is_rejected() {
        assert!(score(0.5, &[], -0.1).is_err());
        assert!(score(0.5, &[], 1.5).is_err());
        assert!(score(0.5, &[], f32::NAN).is_err());
        assert!(score(0.5, &[], 1.0).is_ok());
        assert!(score(0.5, &[], 0.001).is_ok());
    }

    #[test]
    fn test_adjusted_score_never_exceeds_one() {
        let result = score(1.0, &["login"], 0.1).expect("valid");
        assert_eq!(result.adjusted_score, 1.0);
        assert!((result.raw_score - 1.35).abs() < 1e-6);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let a = score(0.37, &["secure"], 0.45).expect("valid");
        let b = score(0.37, &["secure"], 0.45).expect("valid");
        assert_eq!(a, b);
    }
}
