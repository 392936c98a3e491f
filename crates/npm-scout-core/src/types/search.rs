//! Search result types.

use serde::{Deserialize, Serialize};

/// One hit from the registry search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Relevance in [0, 100]
    pub score: u8,
    /// Not populated by the search endpoint; always 0
    pub downloads: u64,
}

impl SearchResult {
    /// Scale a registry relevance score (nominally 0.0..=1.0) to an integer
    /// percentage, clamped to [0, 100]
    pub fn scale_score(final_score: f64) -> u8 {
        if !final_score.is_finite() {
            return 0;
        }
        (final_score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scale_score() {
        assert_eq!(SearchResult::scale_score(0.85), 85);
        assert_eq!(SearchResult::scale_score(0.0), 0);
        assert_eq!(SearchResult::scale_score(1.0), 100);
        assert_eq!(SearchResult::scale_score(0.005), 1);
        assert_eq!(SearchResult::scale_score(f64::NAN), 0);
    }

    #[test]
    fn test_scale_score_clamps_out_of_range() {
        assert_eq!(SearchResult::scale_score(1.7), 100);
        assert_eq!(SearchResult::scale_score(-0.3), 0);
    }

    proptest! {
        #[test]
        fn scaled_score_stays_in_range(score in proptest::num::f64::ANY) {
            prop_assert!(SearchResult::scale_score(score) <= 100);
        }
    }
}
