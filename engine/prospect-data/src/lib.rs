//! Prospect Data - Reference collections behind the draft board
//!
//! Loads the bio, outlet ranking, season log and scouting report collections
//! once and exposes read-only lookups keyed by player id.

pub mod error;
pub mod store;
pub mod types;

pub use error::{DataError, Result};
pub use store::DataStore;
pub use types::{
    DraftDataset, Outlet, OutletRanking, Player, PlayerId, ScoutingReport, SeasonStat, NCAA_LEAGUE,
};
