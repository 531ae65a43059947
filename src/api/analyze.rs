//! Analysis Boundary
//!
//! The single entry point a presentation layer calls: URL + sensitivity in,
//! verdict + score + telemetry out. Preconditions are checked here before any
//! work; once they pass, the pipeline cannot fail except through the oracle.
//!
//! The classifier is loaded once, eagerly, at process start via `init` and
//! shared read-only by every subsequent call. Analysis itself is stateless:
//! each call owns its feature vector and score, so concurrent callers need no
//! coordination beyond the loaded oracle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::logic::features::{self, FeatureVector};
use crate::logic::heuristic;
use crate::logic::model::{ModelMetadata, OnnxOracle, ProbabilityOracle};
use crate::logic::scorer::{self, ScoreResult};
use crate::logic::telemetry::{self, TelemetryReport};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Everything one analysis produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub features: FeatureVector,
    /// Matched suspicious keywords, in vocabulary order
    pub keyword_hits: Vec<String>,
    pub score: ScoreResult,
    pub telemetry: TelemetryReport,
    pub analyzed_at: DateTime<Utc>,
}

// ============================================================================
// ANALYZER
// ============================================================================

/// The scoring pipeline around an injected oracle
///
/// Constructor injection keeps the oracle substitutable: tests run the full
/// pipeline against a stub without an artifact on disk.
pub struct Analyzer {
    oracle: Arc<dyn ProbabilityOracle>,
}

impl Analyzer {
    pub fn new(oracle: Arc<dyn ProbabilityOracle>) -> Self {
        Self { oracle }
    }

    /// Metadata of the loaded model, if the oracle exposes any
    pub fn model_metadata(&self) -> Option<ModelMetadata> {
        self.oracle.metadata()
    }

    /// Run one full analysis
    ///
    /// Precondition failures (blank URL, sensitivity outside (0.0, 1.0]) are
    /// rejected before extraction and inference.
    pub fn analyze(&self, url: &str, sensitivity: f32) -> AnalysisResult<AnalysisReport> {
        if url.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        scorer::validate_sensitivity(sensitivity)?;

        let features = features::extract(url);
        let ai_probability = self
            .oracle
            .predict(&features)
            .map_err(|e| AnalysisError::Inference(e.to_string()))?;
        let keyword_hits = heuristic::scan(url);
        let score = scorer::score(ai_probability, &keyword_hits, sensitivity)?;
        let telemetry = telemetry::assemble(&features, &score);

        log::debug!(
            "analyzed url={} verdict={} adjusted={:.4} hits={}",
            url,
            score.verdict,
            score.adjusted_score,
            keyword_hits.len()
        );

        Ok(AnalysisReport {
            url: url.to_string(),
            features,
            keyword_hits: keyword_hits.iter().map(|k| k.to_string()).collect(),
            score,
            telemetry,
            analyzed_at: Utc::now(),
        })
    }
}

// ============================================================================
// PROCESS-WIDE ENGINE
// ============================================================================

static ANALYZER: OnceCell<Analyzer> = OnceCell::new();

/// Load the classifier and make the engine ready
///
/// Eager, fail-fast: a missing or corrupt artifact is reported here, at
/// startup, not to the first caller. Calling again after a successful load is
/// a no-op; the first loaded model wins for the process lifetime.
pub fn init(model_path: &str) -> AnalysisResult<()> {
    if ANALYZER.get().is_some() {
        log::debug!("Analysis engine already initialized, keeping loaded model");
        return Ok(());
    }

    let oracle = OnnxOracle::load(model_path)
        .map_err(|e| AnalysisError::OracleUnavailable(e.to_string()))?;

    let _ = ANALYZER.set(Analyzer::new(Arc::new(oracle)));
    log::info!("Analysis engine ready");
    Ok(())
}

/// Whether the engine has a loaded model
pub fn is_ready() -> bool {
    ANALYZER.get().is_some()
}

/// Analyze against the process-wide engine
///
/// Fails fast with `OracleUnavailable` while unloaded; there is no
/// heuristic-only fallback.
pub fn analyze(url: &str, sensitivity: f32) -> AnalysisResult<AnalysisReport> {
    let analyzer = ANALYZER.get().ok_or_else(|| {
        AnalysisError::OracleUnavailable("model not loaded, init() must run at startup".to_string())
    })?;
    analyzer.analyze(url, sensitivity)
}

/// Metadata of the process-wide model, if loaded
pub fn model_metadata() -> Option<ModelMetadata> {
    ANALYZER.get().and_then(|a| a.model_metadata())
}

// ============================================================================
// TESTS
// ============================================================================
