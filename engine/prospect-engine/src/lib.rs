//! # Prospect Engine
//!
//! Evaluation logic behind the draft board. Given a player id, the engine
//! averages the outlet big boards into a consensus rank, flags outlets that are
//! notably higher or lower than consensus, buckets the prospect into a
//! predicted draft range, and merges preloaded scouting reports with the ones
//! submitted during the session. It also owns the board's active filter.
//!
//! Every derived value is recomputed per query from the reference data and the
//! session state held by [`DraftBoard`]; nothing derived is cached.

pub mod assessment;
pub mod board;
pub mod config;
pub mod consensus;
pub mod display;
pub mod draft_spot;
pub mod error;
pub mod filter;
pub mod reports;

pub use assessment::{Assessment, AssessmentClassifier};
pub use board::{BoardRow, DraftBoard, OutletAssessment, ProspectEvaluation, ProspectProfile};
pub use config::BoardConfig;
pub use consensus::RankAggregator;
pub use draft_spot::{DraftSpot, DraftSpotClassifier};
pub use error::{EngineError, FilterError, Result};
pub use filter::{FilterEngine, FilterSession, FilterState, LeagueFilter, PlayerFilter};
pub use reports::ReportStore;

/// Re-export the reference data types callers need alongside the engine
pub use prospect_data::{DataStore, Outlet, OutletRanking, Player, PlayerId, ScoutingReport, SeasonStat};

/// Current version of the engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rank gap at which an outlet counts as high or low on a prospect
pub const ASSESSMENT_MARGIN: f64 = 3.0;

/// Scout name recorded when a report is submitted without one
pub const ANONYMOUS_SCOUT: &str = "Anonymous Executive";

/// Image shown for prospects without a photo
pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/300x400?text=No+Photo";
