use crate::ASSESSMENT_MARGIN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an outlet's rank compares with the consensus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assessment {
    /// Outlet ranks the prospect at least three spots better than consensus
    #[serde(rename = "high on prospect")]
    HighOnProspect,

    /// Outlet ranks the prospect at least three spots worse than consensus
    #[serde(rename = "low on prospect")]
    LowOnProspect,
}

impl Assessment {
    pub fn label(self) -> &'static str {
        match self {
            Assessment::HighOnProspect => "high on prospect",
            Assessment::LowOnProspect => "low on prospect",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels one outlet's stance relative to the consensus rank
pub struct AssessmentClassifier;

impl AssessmentClassifier {
    /// Classify an outlet rank against the consensus
    ///
    /// Lower ranks are better, so a negative difference means the outlet is
    /// more bullish than consensus. Both thresholds are inclusive.
    pub fn classify(outlet_rank: Option<f64>, consensus_rank: Option<f64>) -> Option<Assessment> {
        let outlet_rank = outlet_rank.filter(|rank| rank.is_finite())?;
        let consensus_rank = consensus_rank.filter(|rank| rank.is_finite())?;

        let difference = outlet_rank - consensus_rank;
        if difference <= -ASSESSMENT_MARGIN {
            Some(Assessment::HighOnProspect)
        } else if difference >= ASSESSMENT_MARGIN {
            Some(Assessment::LowOnProspect)
        } else {
            None
        }
    }
}
