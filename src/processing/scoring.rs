//! Match percentage scoring

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Saturating linear score: `min(max_score, matched * points_per_match)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub points_per_match: u32,
    pub max_score: u8,
}

impl ScoringRule {
    pub fn percentage(&self, matched_count: usize) -> u8 {
        let cap = u64::from(self.max_score.min(100));
        let raw = (matched_count as u64).saturating_mul(u64::from(self.points_per_match));
        raw.min(cap) as u8
    }
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            points_per_match: 15,
            max_score: 100,
        }
    }
}

impl From<&ScoringConfig> for ScoringRule {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            points_per_match: config.points_per_match,
            max_score: config.max_score,
        }
    }
}

/// `min(100, matched_count * 15)`
pub fn match_percentage(matched_count: usize) -> u8 {
    ScoringRule::default().percentage(matched_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        assert_eq!(match_percentage(0), 0);
        assert_eq!(match_percentage(2), 30);
        assert_eq!(match_percentage(4), 60);
        assert_eq!(match_percentage(6), 90);
        assert_eq!(match_percentage(7), 100);
    }

    #[test]
    fn test_monotonic_and_saturating() {
        let mut previous = 0;
        for count in 0..50 {
            let score = match_percentage(count);
            assert!(score >= previous);
            assert!(score <= 100);
            previous = score;
        }
        assert_eq!(match_percentage(usize::MAX), 100);
    }

    #[test]
    fn test_custom_rule_is_capped_at_hundred() {
        let rule = ScoringRule { points_per_match: 40, max_score: 250 };
        assert_eq!(rule.percentage(1), 40);
        assert_eq!(rule.percentage(3), 100);

        let low_cap = ScoringRule { points_per_match: 10, max_score: 50 };
        assert_eq!(low_cap.percentage(9), 50);
    }
}
