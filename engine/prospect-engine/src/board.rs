use crate::assessment::{Assessment, AssessmentClassifier};
use crate::config::BoardConfig;
use crate::consensus::RankAggregator;
use crate::display::{age_on, format_height, photo_url_or};
use crate::draft_spot::{DraftSpot, DraftSpotClassifier};
use crate::error::Result;
use crate::filter::{FilterEngine, FilterSession, PlayerFilter};
use crate::reports::ReportStore;
use chrono::NaiveDate;
use prospect_data::{DataStore, Outlet, OutletRanking, Player, PlayerId, ScoutingReport, SeasonStat};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One outlet's rank for a prospect and how it compares with consensus
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletAssessment {
    pub outlet: Outlet,
    pub rank: f64,
    pub assessment: Option<Assessment>,
}

/// Everything the board derives from a prospect's outlet rankings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectEvaluation {
    pub consensus_rank: Option<f64>,

    /// Outlets that ranked the prospect, in fixed outlet order
    pub per_outlet: Vec<OutletAssessment>,

    pub draft_spot: Option<DraftSpot>,

    /// Display label for the draft spot, or the no-data message
    pub draft_spot_label: &'static str,
}

impl ProspectEvaluation {
    /// Evaluate a ranking record; an absent record evaluates to no data
    pub fn from_ranking(ranking: Option<&OutletRanking>) -> Self {
        let consensus_rank = RankAggregator::consensus(ranking);

        let per_outlet = ranking
            .map(|ranking| {
                ranking
                    .ranks()
                    .filter_map(|(outlet, rank)| rank.filter(|r| r.is_finite()).map(|r| (outlet, r)))
                    .map(|(outlet, rank)| OutletAssessment {
                        outlet,
                        rank,
                        assessment: AssessmentClassifier::classify(Some(rank), consensus_rank),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            consensus_rank,
            per_outlet,
            draft_spot: DraftSpotClassifier::classify(consensus_rank),
            draft_spot_label: DraftSpotClassifier::label(consensus_rank),
        }
    }

    pub fn draft_spot_label(&self) -> &'static str {
        self.draft_spot_label
    }
}

/// The detail view for one prospect
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectProfile<'a> {
    pub player: &'a Player,
    pub board_rank: usize,
    pub age: i32,
    pub height: String,
    pub photo_url: &'a str,

    /// `None` when no outlet ranking record exists for the prospect
    pub evaluation: Option<ProspectEvaluation>,

    /// Season line for the configured league
    pub season_stat: Option<&'a SeasonStat>,

    /// Static reports first, then session submissions
    pub reports: Vec<&'a ScoutingReport>,
}

/// A row of the big board
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRow {
    pub board_rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub age: i32,
    pub height: String,
    pub current_team: String,
}

/// Draft Board - Session state plus the evaluation entry points
///
/// The board owns the only mutable state of a session (submitted reports and
/// the active filter). Callers go through `submit_report`, `apply_filter` and
/// `clear_filter` to change it.
#[derive(Debug)]
pub struct DraftBoard {
    data: Arc<DataStore>,
    reports: ReportStore,
    filters: FilterEngine,
    session: FilterSession,
    config: BoardConfig,
}

impl DraftBoard {
    /// Create a board over already loaded data
    pub fn new(data: Arc<DataStore>, config: BoardConfig) -> Self {
        Self {
            reports: ReportStore::new(Arc::clone(&data)),
            filters: FilterEngine::new(Arc::clone(&data)),
            session: FilterSession::new(),
            data,
            config,
        }
    }

    /// Load the configured dataset and create a board over it
    pub async fn load(config: BoardConfig) -> Result<Self> {
        let data = DataStore::load_from_file(&config.data.path).await?;
        Ok(Self::new(Arc::new(data), config))
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Consensus, per-outlet assessments and draft spot for a prospect
    pub fn evaluate(&self, player_id: &str) -> ProspectEvaluation {
        let evaluation = ProspectEvaluation::from_ranking(self.data.find_ranking(player_id));
        debug!(
            "Evaluated player {}: consensus {:?}, draft spot {:?}",
            player_id, evaluation.consensus_rank, evaluation.draft_spot
        );
        evaluation
    }

    /// Full detail view for a prospect, with age computed as of `today`
    pub fn profile(&self, player_id: &str, today: NaiveDate) -> Option<ProspectProfile<'_>> {
        let player = self.data.find_player(player_id)?;
        let board_rank = self.data.board_rank(player_id)?;

        let evaluation = self.data.find_ranking(player_id).map(|_| self.evaluate(player_id));

        Some(ProspectProfile {
            player,
            board_rank,
            age: age_on(player.birth_date, today),
            height: format_height(player.height),
            photo_url: photo_url_or(player, &self.config.display.placeholder_photo_url),
            evaluation,
            season_stat: self.data.find_season_stat(player_id, &self.config.display.stats_league),
            reports: self.reports.reports_for(player_id),
        })
    }

    /// Rows for the players currently visible, in board order
    pub fn board_rows(&self, today: NaiveDate) -> Vec<BoardRow> {
        self.visible_players()
            .into_iter()
            .map(|player| BoardRow {
                board_rank: self.data.board_rank(player.player_id.as_str()).unwrap_or_default(),
                player_id: player.player_id.clone(),
                name: player.name.clone(),
                age: age_on(player.birth_date, today),
                height: format_height(player.height),
                current_team: player.current_team.clone(),
            })
            .collect()
    }

    pub fn visible_players(&self) -> Vec<&Player> {
        self.filters.visible_players()
    }

    /// Record a scouting report for the rest of the session
    pub fn submit_report(
        &mut self,
        player_id: impl Into<PlayerId>,
        scout: &str,
        report: impl Into<String>,
    ) -> &ScoutingReport {
        self.reports.submit(player_id, scout, report)
    }

    pub fn reports_for(&self, player_id: &str) -> Vec<&ScoutingReport> {
        self.reports.reports_for(player_id)
    }

    pub fn custom_reports(&self) -> &[ScoutingReport] {
        self.reports.custom_reports()
    }

    pub fn apply_filter(&mut self, filter: PlayerFilter) {
        self.filters.apply_filter(filter);
    }

    pub fn clear_filter(&mut self) {
        self.filters.clear_filter();
    }

    pub fn active_filter(&self) -> Option<&PlayerFilter> {
        self.filters.active_filter()
    }

    /// Read-only filter queries that leave the active filter alone
    pub fn filters(&self) -> &FilterEngine {
        &self.filters
    }

    pub fn session(&self) -> &FilterSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FilterSession {
        &mut self.session
    }

    /// Commit the filter being chosen and make it the board's active filter
    pub fn apply_session(&mut self) -> Result<PlayerFilter> {
        let filter = self.session.apply()?;
        self.filters.apply_filter(filter.clone());
        Ok(filter)
    }

    /// Abandon the filter being chosen; the active filter is unchanged
    pub fn cancel_session(&mut self) -> Result<()> {
        self.session.cancel()?;
        Ok(())
    }

    pub fn team_options(&self) -> Vec<&str> {
        self.data.team_options()
    }

    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        self.data.search_players(query)
    }
}
