//! Keyword Heuristic - Suspicious Term Scan
//!
//! Scans the raw URL for a fixed vocabulary of terms that phishing pages
//! habitually carry. Matching is case-insensitive substring containment; hits
//! are reported in vocabulary order, not URL-occurrence order, so the output
//! is stable for display and tests.

/// Fixed vocabulary, in reporting order
pub const SUSPICIOUS_KEYWORDS: [&str; 10] = [
    "login", "secure", "account", "update", "banking", "verify", "confirm", "wallet", "signin",
    "support",
];

/// Scan a URL for suspicious keywords
///
/// Lowercases once, then tests each vocabulary word as a substring.
/// Deterministic, total, no side effects.
pub fn scan(url: &str) -> Vec<&'static str> {
    let lowered = url.to_lowercase();
    SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(|word| lowered.contains(word))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(SUSPICIOUS_KEYWORDS.len(), 10);
    }

    #[test]
    fn test_hits_in_vocabulary_order() {
        // "verify" precedes "account" in the URL but follows it in the
        // vocabulary; reporting order is the vocabulary's
        let hits = scan("Please verify your Account now");
        assert_eq!(hits, vec!["account", "verify"]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let hits = scan("http://SECURE-LOGIN.example.com");
        assert_eq!(hits, vec!["login", "secure"]);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "signing" contains "signin"
        let hits = scan("http://example.com/signing");
        assert_eq!(hits, vec!["signin"]);
    }

    #[test]
    fn test_no_hits() {
        assert!(scan("nothing suspicious here").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_is_deterministic() {
        let url = "https://banking-support.example.com/wallet";
        assert_eq!(scan(url), scan(url));
    }
}
