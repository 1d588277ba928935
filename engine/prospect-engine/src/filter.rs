//! Board filtering and the filter-selection workflow

use crate::error::FilterError;
use prospect_data::{DataStore, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Competition level filter: college or professional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueFilter {
    /// College players only
    Ncaa,
    /// Everyone whose league is not NCAA
    Pro,
}

impl LeagueFilter {
    pub fn matches(self, player: &Player) -> bool {
        match self {
            LeagueFilter::Ncaa => player.is_ncaa(),
            LeagueFilter::Pro => !player.is_ncaa(),
        }
    }
}

impl fmt::Display for LeagueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueFilter::Ncaa => f.write_str("NCAA"),
            LeagueFilter::Pro => f.write_str("Professional"),
        }
    }
}

impl FromStr for LeagueFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ncaa" | "college" => Ok(LeagueFilter::Ncaa),
            "pro" | "professional" => Ok(LeagueFilter::Pro),
            _ => Err(FilterError::UnknownLeagueType(s.to_string())),
        }
    }
}

/// A single filter criterion; filters replace each other rather than compose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerFilter {
    /// Exact match on the player's current team
    Team(String),
    LeagueType(LeagueFilter),
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PlayerFilter::Team(team) => player.current_team == *team,
            PlayerFilter::LeagueType(league) => league.matches(player),
        }
    }
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerFilter::Team(team) => write!(f, "team = {team}"),
            PlayerFilter::LeagueType(league) => write!(f, "league = {league}"),
        }
    }
}

/// Filter Engine - Derives the visible subset of the board
///
/// Views are fresh vectors over the shared roster, always in board order.
/// The roster itself is never touched.
#[derive(Debug)]
pub struct FilterEngine {
    data: Arc<DataStore>,

    /// Criterion currently applied to the board, if any
    active: Option<PlayerFilter>,
}

impl FilterEngine {
    pub fn new(data: Arc<DataStore>) -> Self {
        Self { data, active: None }
    }

    /// Players on the given team
    pub fn by_team(&self, team: &str) -> Vec<&Player> {
        self.data.players().iter().filter(|player| player.current_team == team).collect()
    }

    /// College players, or everyone else
    pub fn by_league_type(&self, league: LeagueFilter) -> Vec<&Player> {
        self.data.players().iter().filter(|player| league.matches(player)).collect()
    }

    /// The unfiltered roster
    pub fn clear(&self) -> Vec<&Player> {
        self.data.players().iter().collect()
    }

    /// Players matching an arbitrary criterion
    pub fn matching(&self, filter: &PlayerFilter) -> Vec<&Player> {
        match filter {
            PlayerFilter::Team(team) => self.by_team(team),
            PlayerFilter::LeagueType(league) => self.by_league_type(*league),
        }
    }

    /// Make `filter` the board's active criterion, replacing any previous one
    pub fn apply_filter(&mut self, filter: PlayerFilter) {
        info!("Applying board filter: {}", filter);
        self.active = Some(filter);
    }

    /// Return the board to the full roster
    pub fn clear_filter(&mut self) {
        if let Some(previous) = self.active.take() {
            info!("Cleared board filter: {}", previous);
        }
    }

    pub fn active_filter(&self) -> Option<&PlayerFilter> {
        self.active.as_ref()
    }

    /// Players currently shown on the board
    pub fn visible_players(&self) -> Vec<&Player> {
        match &self.active {
            Some(filter) => self.matching(filter),
            None => self.clear(),
        }
    }
}

/// Where the filter-selection workflow currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No criterion being chosen
    #[default]
    Idle,
    ChoosingTeam { team: Option<String> },
    ChoosingLeagueType { league: Option<LeagueFilter> },
}

impl FilterState {
    fn describe(&self) -> &'static str {
        match self {
            FilterState::Idle => "idle",
            FilterState::ChoosingTeam { .. } => "choosing a team",
            FilterState::ChoosingLeagueType { .. } => "choosing a league type",
        }
    }
}

/// Filter selection workflow: choose a kind, pick a value, then apply or cancel
///
/// Applying or cancelling always returns the session to `Idle`. Invalid steps
/// are rejected and leave the state untouched.
#[derive(Debug, Default)]
pub struct FilterSession {
    state: FilterState,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Start choosing a team
    pub fn choose_team(&mut self) -> Result<(), FilterError> {
        self.require_idle("choose a team")?;
        self.state = FilterState::ChoosingTeam { team: None };
        Ok(())
    }

    /// Start choosing a league type
    pub fn choose_league_type(&mut self) -> Result<(), FilterError> {
        self.require_idle("choose a league type")?;
        self.state = FilterState::ChoosingLeagueType { league: None };
        Ok(())
    }

    pub fn select_team(&mut self, team: impl Into<String>) -> Result<(), FilterError> {
        match &mut self.state {
            FilterState::ChoosingTeam { team: selection } => {
                *selection = Some(team.into());
                Ok(())
            }
            other => Err(FilterError::InvalidTransition {
                action: "select a team",
                state: other.describe(),
            }),
        }
    }

    pub fn select_league_type(&mut self, league: LeagueFilter) -> Result<(), FilterError> {
        match &mut self.state {
            FilterState::ChoosingLeagueType { league: selection } => {
                *selection = Some(league);
                Ok(())
            }
            other => Err(FilterError::InvalidTransition {
                action: "select a league type",
                state: other.describe(),
            }),
        }
    }

    /// Commit the in-progress choice and return to idle
    pub fn apply(&mut self) -> Result<PlayerFilter, FilterError> {
        let filter = match &self.state {
            FilterState::ChoosingTeam { team: Some(team) } => PlayerFilter::Team(team.clone()),
            FilterState::ChoosingTeam { team: None } => return Err(FilterError::NoSelection("team")),
            FilterState::ChoosingLeagueType { league: Some(league) } => {
                PlayerFilter::LeagueType(*league)
            }
            FilterState::ChoosingLeagueType { league: None } => {
                return Err(FilterError::NoSelection("league type"))
            }
            FilterState::Idle => {
                return Err(FilterError::InvalidTransition { action: "apply", state: "idle" })
            }
        };

        self.state = FilterState::Idle;
        Ok(filter)
    }

    /// Discard the in-progress choice and return to idle
    pub fn cancel(&mut self) -> Result<(), FilterError> {
        self.require_choosing("cancel")?;
        self.state = FilterState::Idle;
        Ok(())
    }

    fn require_idle(&self, action: &'static str) -> Result<(), FilterError> {
        match self.state {
            FilterState::Idle => Ok(()),
            ref other => Err(FilterError::InvalidTransition { action, state: other.describe() }),
        }
    }

    fn require_choosing(&self, action: &'static str) -> Result<(), FilterError> {
        match self.state {
            FilterState::Idle => Err(FilterError::InvalidTransition { action, state: "idle" }),
            _ => Ok(()),
        }
    }
}
