//! URL Lexical Feature Extractor
//!
//! Turns a raw URL string into the fixed 8-feature vector the classifier was
//! trained on. Pure and total: any string, including the empty one, yields a
//! valid vector.
//!
//! The semantics are intentionally naive and must stay that way. "www" and
//! "https" are unanchored case-sensitive substring checks (a fake
//! "https-login" subdomain counts), and the dotted-quad check is an unranged,
//! unanchored regex. The trained model expects exactly this input
//! distribution; structural URL parsing here would skew it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vector::FeatureVector;

/// Dotted-quad digit pattern: 1-3 digit groups, no range check, no anchors.
/// Matches inside longer tokens, e.g. "999.999.999.999" or "1.2.3.4999".
static IP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("ip pattern compiles"));

/// Extract the lexical feature vector from a raw URL string
///
/// Deterministic, no side effects. `length_url` counts Unicode scalar values,
/// not bytes.
pub fn extract(url: &str) -> FeatureVector {
    let mut features = FeatureVector::new();

    features.set_by_name("length_url", url.chars().count() as f32);
    features.set_by_name("nb_dots", url.matches('.').count() as f32);
    features.set_by_name("nb_hyphens", url.matches('-').count() as f32);
    features.set_by_name("nb_at", url.matches('@').count() as f32);
    features.set_by_name("nb_slash", url.matches('/').count() as f32);
    features.set_by_name("nb_www", if url.contains("www") { 1.0 } else { 0.0 });
    features.set_by_name("https_token", if url.contains("https") { 1.0 } else { 0.0 });
    features.set_by_name("ip", if IP_PATTERN.is_match(url) { 1.0 } else { 0.0 });

    features
}

// ============================================================================
// TESTS
// ============================================================================
