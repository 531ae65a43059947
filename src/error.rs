//! Error handling
//!
//! The error taxonomy surfaced at the analysis boundary. Input errors are
//! user-correctable; `OracleUnavailable` means the classifier artifact failed
//! to load and the operator must fix it and restart. Nothing here is retried.

use std::fmt;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// URL was empty or blank - rejected before extraction
    EmptyInput,

    /// Sensitivity outside (0.0, 1.0] - rejected before the division
    InvalidSensitivity(f32),

    /// Classifier artifact failed to load or was never loaded
    OracleUnavailable(String),

    /// Oracle raised during prediction
    Inference(String),
}

impl AnalysisError {
    /// Stable machine-readable kind, for logs and callers
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::InvalidSensitivity(_) => "invalid_sensitivity",
            AnalysisError::OracleUnavailable(_) => "oracle_unavailable",
            AnalysisError::Inference(_) => "inference",
        }
    }

    /// True when the caller can fix the error by correcting its input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput | AnalysisError::InvalidSensitivity(_)
        )
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyInput => {
                write!(f, "No URL provided - enter a URL to analyze")
            }
            AnalysisError::InvalidSensitivity(value) => {
                write!(f, "Sensitivity {} is outside (0.0, 1.0]", value)
            }
            AnalysisError::OracleUnavailable(msg) => {
                write!(f, "Classifier model unavailable: {}", msg)
            }
            AnalysisError::Inference(msg) => {
                write!(f, "Prediction failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_stable() {
        assert_eq!(AnalysisError::EmptyInput.kind(), "empty_input");
        assert_eq!(
            AnalysisError::InvalidSensitivity(0.0).kind(),
            "invalid_sensitivity"
        );
        assert_eq!(
            AnalysisError::OracleUnavailable("x".to_string()).kind(),
            "oracle_unavailable"
        );
        assert_eq!(AnalysisError::Inference("x".to_string()).kind(), "inference");
    }

    #[test]
    fn test_user_errors() {
        assert!(AnalysisError::EmptyInput.is_user_error());
        assert!(AnalysisError::InvalidSensitivity(1.5).is_user_error());
        assert!(!AnalysisError::OracleUnavailable("gone".to_string()).is_user_error());
        assert!(!AnalysisError::Inference("boom".to_string()).is_user_error());
    }

    #[test]
    fn test_display_mentions_value() {
        let msg = AnalysisError::InvalidSensitivity(-0.5).to_string();
        assert!(msg.contains("-0.5"));
    }
}
