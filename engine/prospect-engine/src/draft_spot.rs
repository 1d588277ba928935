use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a draft spot when no outlet has ranked the prospect
pub const NO_DRAFT_SPOT_LABEL: &str = "No ranking data available";

/// Predicted draft range derived from the consensus rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DraftSpot {
    #[serde(rename = "Clear #1 Overall")]
    ClearNumberOne,
    #[serde(rename = "Consensus Top 5 Pick")]
    ConsensusTopFive,
    #[serde(rename = "First Round Pick Based on Team Need")]
    FirstRoundOnNeed,
    #[serde(rename = "Late First Rounder or Second Rounder")]
    LateFirstOrSecond,
    #[serde(rename = "Late Second Rounder")]
    LateSecond,
}

/// Upper bound (inclusive) of each tier, best tier first
const TIER_BOUNDS: [(f64, DraftSpot); 4] = [
    (1.0, DraftSpot::ClearNumberOne),
    (5.0, DraftSpot::ConsensusTopFive),
    (20.0, DraftSpot::FirstRoundOnNeed),
    (40.0, DraftSpot::LateFirstOrSecond),
];

impl DraftSpot {
    pub fn label(self) -> &'static str {
        match self {
            DraftSpot::ClearNumberOne => "Clear #1 Overall",
            DraftSpot::ConsensusTopFive => "Consensus Top 5 Pick",
            DraftSpot::FirstRoundOnNeed => "First Round Pick Based on Team Need",
            DraftSpot::LateFirstOrSecond => "Late First Rounder or Second Rounder",
            DraftSpot::LateSecond => "Late Second Rounder",
        }
    }
}

impl fmt::Display for DraftSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buckets a consensus rank into a predicted draft range
pub struct DraftSpotClassifier;

impl DraftSpotClassifier {
    /// Tier for a consensus rank; a rank on a boundary belongs to the better tier
    pub fn classify(consensus_rank: Option<f64>) -> Option<DraftSpot> {
        let rank = consensus_rank.filter(|rank| !rank.is_nan())?;

        let spot = TIER_BOUNDS
            .iter()
            .find(|(bound, _)| rank <= *bound)
            .map(|(_, spot)| *spot)
            .unwrap_or(DraftSpot::LateSecond);
        Some(spot)
    }

    /// Display label, falling back to the no-data message
    pub fn label(consensus_rank: Option<f64>) -> &'static str {
        Self::classify(consensus_rank).map(DraftSpot::label).unwrap_or(NO_DRAFT_SPOT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (1.0, DraftSpot::ClearNumberOne),
            (1.2, DraftSpot::ConsensusTopFive),
            (5.0, DraftSpot::ConsensusTopFive),
            (5.1, DraftSpot::FirstRoundOnNeed),
            (20.0, DraftSpot::FirstRoundOnNeed),
            (20.5, DraftSpot::LateFirstOrSecond),
            (40.0, DraftSpot::LateFirstOrSecond),
            (40.1, DraftSpot::LateSecond),
            (60.0, DraftSpot::LateSecond),
        ];

        for (rank, expected) in cases {
            assert_eq!(
                DraftSpotClassifier::classify(Some(rank)),
                Some(expected),
                "rank {rank} landed in the wrong tier"
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DraftSpotClassifier::label(Some(1.0)), "Clear #1 Overall");
        assert_eq!(DraftSpotClassifier::label(Some(5.0)), "Consensus Top 5 Pick");
        assert_eq!(DraftSpotClassifier::label(Some(5.1)), "First Round Pick Based on Team Need");
        assert_eq!(DraftSpotClassifier::label(Some(40.0)), "Late First Rounder or Second Rounder");
        assert_eq!(DraftSpotClassifier::label(Some(40.1)), "Late Second Rounder");
    }

    #[test]
    fn test_no_consensus_has_no_spot() {
        assert_eq!(DraftSpotClassifier::classify(None), None);
        assert_eq!(DraftSpotClassifier::classify(Some(f64::NAN)), None);
        assert_eq!(DraftSpotClassifier::label(None), NO_DRAFT_SPOT_LABEL);
    }

    #[test]
    fn test_spots_are_ordered_best_first() {
        assert!(DraftSpot::ClearNumberOne < DraftSpot::ConsensusTopFive);
        assert!(DraftSpot::LateFirstOrSecond < DraftSpot::LateSecond);
    }
}
