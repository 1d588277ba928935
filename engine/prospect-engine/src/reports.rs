use crate::ANONYMOUS_SCOUT;
use prospect_data::{DataStore, PlayerId, ScoutingReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Report Store - Static scouting reports plus the ones submitted this session
///
/// Submitted reports are append-only; nothing is ever removed or deduplicated.
#[derive(Debug)]
pub struct ReportStore {
    data: Arc<DataStore>,

    /// Reports submitted during the session, in submission order
    custom: Vec<ScoutingReport>,
}

impl ReportStore {
    /// Create a store with no submitted reports
    pub fn new(data: Arc<DataStore>) -> Self {
        Self { data, custom: Vec::new() }
    }

    /// Append a report for a player
    ///
    /// A blank scout name is recorded as [`ANONYMOUS_SCOUT`]. The report text
    /// is stored as given, empty or not.
    pub fn submit(
        &mut self,
        player_id: impl Into<PlayerId>,
        scout: &str,
        report: impl Into<String>,
    ) -> &ScoutingReport {
        let player_id = player_id.into();
        let scout = if scout.trim().is_empty() { ANONYMOUS_SCOUT.to_string() } else { scout.to_string() };

        if self.data.find_player(player_id.as_str()).is_none() {
            warn!("Accepting report for unknown player id '{}'", player_id);
        }

        info!("Report submitted for player {} by {}", player_id, scout);
        self.custom.push(ScoutingReport { player_id, scout, report: report.into() });

        let last = self.custom.len() - 1;
        &self.custom[last]
    }

    /// Static reports followed by submitted reports for a player
    pub fn reports_for(&self, player_id: &str) -> Vec<&ScoutingReport> {
        self.data
            .list_static_reports(player_id)
            .iter()
            .chain(self.custom.iter().filter(|report| report.player_id.as_str() == player_id))
            .collect()
    }

    /// Every report submitted this session
    pub fn custom_reports(&self) -> &[ScoutingReport] {
        &self.custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DATA: &str = include_str!("../../../data/draft_board_2025.json");

    fn create_test_store() -> ReportStore {
        let data = DataStore::from_json_str(SAMPLE_DATA).unwrap();
        ReportStore::new(Arc::new(data))
    }

    fn scouts(reports: &[&ScoutingReport]) -> Vec<String> {
        reports.iter().map(|report| report.scout.clone()).collect()
    }

    #[test]
    fn test_static_reports_only() {
        let store = create_test_store();

        let reports = store.reports_for("1001");
        assert_eq!(scouts(&reports), vec!["Sarah Mitchell", "Marcus Reed"]);
        assert!(store.reports_for("1011").is_empty());
    }

    #[test]
    fn test_submitted_reports_follow_static_reports() {
        let mut store = create_test_store();

        store.submit("1001", "Jordan Blake", "Already an elite team defender.");
        store.submit("1002", "Jordan Blake", "Needs to add strength.");
        store.submit("1001", "Ava Chen", "Best motor in the class.");

        let reports = store.reports_for("1001");
        assert_eq!(scouts(&reports), vec!["Sarah Mitchell", "Marcus Reed", "Jordan Blake", "Ava Chen"]);
        assert_eq!(reports[2].report, "Already an elite team defender.");

        assert_eq!(store.reports_for("1002").len(), 2);
        assert_eq!(store.custom_reports().len(), 3);
    }

    #[test]
    fn test_blank_scout_becomes_anonymous() {
        let mut store = create_test_store();

        assert_eq!(store.submit("1003", "", "Explosive leaper.").scout, ANONYMOUS_SCOUT);
        assert_eq!(store.submit("1003", "   ", "Great on-ball defender.").scout, ANONYMOUS_SCOUT);
        assert_eq!(store.submit("1003", "Ava Chen", "Streaky shooter.").scout, "Ava Chen");
    }

    #[test]
    fn test_empty_text_and_duplicates_are_accepted() {
        let mut store = create_test_store();

        store.submit("1011", "Ava Chen", "");
        store.submit("1011", "Ava Chen", "Strong rebounder.");
        store.submit("1011", "Ava Chen", "Strong rebounder.");

        let reports = store.reports_for("1011");
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].report, "");
        assert_eq!(reports[1], reports[2]);
    }

    #[test]
    fn test_unknown_player_is_accepted() {
        let mut store = create_test_store();

        let report = store.submit("", "Ava Chen", "Unattached note.");
        assert_eq!(report.player_id.as_str(), "");
        assert_eq!(store.reports_for("").len(), 1);

        let report = store.submit("9999", "Ava Chen", "Not on the board yet.");
        assert_eq!(report.player_id.as_str(), "9999");
        assert_eq!(store.reports_for("9999").len(), 1);
        assert_eq!(store.custom_reports().len(), 2);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut store = create_test_store();
        store.submit("1001", "Ava Chen", "Plays within himself.");

        let first = store.reports_for("1001");
        let second = store.reports_for("1001");
        assert_eq!(first, second);
    }
}
