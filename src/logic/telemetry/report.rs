//! Telemetry Report - Technical Breakdown for Display
//!
//! A read-only projection of one analysis: every feature name paired with its
//! extracted value, plus the intermediate scores that went into the verdict.
//! Assembly structures existing data; it computes nothing and mutates
//! nothing.

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureVector;
use crate::logic::scorer::ScoreResult;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One feature row of the telemetry table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReading {
    pub name: String,
    pub value: f32,
}

/// Technical telemetry for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReport {
    /// Feature rows in schema order
    pub features: Vec<FeatureReading>,
    /// Base classifier probability before any adjustment
    pub ai_probability: f32,
    /// Heuristic adjustment applied on top
    pub heuristic_bonus: f32,
}

impl TelemetryReport {
    /// JSON projection for structured logs
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "ai_probability": self.ai_probability,
            "heuristic_bonus": self.heuristic_bonus,
            "features": self.features.iter()
                .map(|r| (r.name.clone(), r.value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Assemble the telemetry report for one analysis
pub fn assemble(features: &FeatureVector, score: &ScoreResult) -> TelemetryReport {
    TelemetryReport {
        features: features
            .named()
            .map(|(name, value)| FeatureReading {
                name: name.to_string(),
                value,
            })
            .collect(),
        ai_probability: score.ai_probability,
        heuristic_bonus: score.heuristic_bonus,
    }
}

// ============================================================================
// TESTS
// ============================================================================
