use crate::error::Result;
use crate::types::{DraftDataset, OutletRanking, Player, PlayerId, ScoutingReport, SeasonStat};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// Data Store - Read-only reference collections keyed by player id
///
/// Built once from the dataset and never mutated afterwards. The bio
/// collection keeps its file order, which is the order of the big board.
#[derive(Debug, Default)]
pub struct DataStore {
    /// Players in board order
    players: Vec<Player>,

    /// Map from player id to position in `players`
    player_index: HashMap<PlayerId, usize>,

    rankings: HashMap<PlayerId, OutletRanking>,

    /// Season lines per player, at most one per league
    season_stats: HashMap<PlayerId, Vec<SeasonStat>>,

    /// Static reports per player, in dataset order
    static_reports: HashMap<PlayerId, Vec<ScoutingReport>>,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset JSON document from disk
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        info!("Loading draft board data from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let store = Self::from_json_str(&json_content)?;

        info!(
            "Loaded {} players, {} rankings, {} static reports",
            store.player_count(),
            store.rankings.len(),
            store.static_reports.values().map(Vec::len).sum::<usize>()
        );
        Ok(store)
    }

    /// Parse a dataset JSON document held in memory
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: DraftDataset = serde_json::from_str(json)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Index an already parsed dataset
    ///
    /// Repeated keys keep the first record; later duplicates are logged and dropped.
    pub fn from_dataset(dataset: DraftDataset) -> Self {
        let mut store = Self::new();

        for player in dataset.bio {
            if store.player_index.contains_key(&player.player_id) {
                warn!("Duplicate bio record for player {}, keeping the first", player.player_id);
                continue;
            }
            store.player_index.insert(player.player_id.clone(), store.players.len());
            store.players.push(player);
        }

        for ranking in dataset.scout_rankings {
            if store.rankings.contains_key(&ranking.player_id) {
                warn!("Duplicate outlet ranking for player {}, keeping the first", ranking.player_id);
                continue;
            }
            store.rankings.insert(ranking.player_id.clone(), ranking);
        }

        for stat in dataset.season_logs {
            let lines = store.season_stats.entry(stat.player_id.clone()).or_default();
            if lines.iter().any(|existing| existing.league == stat.league) {
                warn!(
                    "Duplicate {} season log for player {}, keeping the first",
                    stat.league, stat.player_id
                );
                continue;
            }
            lines.push(stat);
        }

        for report in dataset.scouting_reports {
            store.static_reports.entry(report.player_id.clone()).or_default().push(report);
        }

        store
    }

    /// Get a player's bio by id
    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.player_index.get(player_id).map(|&index| &self.players[index])
    }

    /// Get the outlet rankings published for a player
    pub fn find_ranking(&self, player_id: &str) -> Option<&OutletRanking> {
        self.rankings.get(player_id)
    }

    /// Get a player's season line for one league
    pub fn find_season_stat(&self, player_id: &str, league: &str) -> Option<&SeasonStat> {
        self.season_stats.get(player_id)?.iter().find(|stat| stat.league == league)
    }

    /// Preloaded scouting reports for a player (possibly empty)
    pub fn list_static_reports(&self, player_id: &str) -> &[ScoutingReport] {
        self.static_reports.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Full roster in board order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// 1-based position on the unfiltered board
    pub fn board_rank(&self, player_id: &str) -> Option<usize> {
        self.player_index.get(player_id).map(|index| index + 1)
    }

    /// Distinct non-empty teams in order of first appearance
    pub fn team_options(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|player| player.current_team.as_str())
            .filter(|team| !team.is_empty() && seen.insert(*team))
            .collect()
    }

    /// Search for players by partial name match
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players.iter().filter(|player| player.name.to_lowercase().contains(&query_lower)).collect()
    }

    /// Number of players on the board
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
