//! Terminal rendering for the board and prospect profiles

use chrono::NaiveDate;
use colored::*;
use prospect_engine::display::{format_percentage, format_rank, format_stat};
use prospect_engine::{Assessment, DraftBoard, Player, ProspectEvaluation, ProspectProfile, SeasonStat};

pub fn print_board(board: &DraftBoard, today: NaiveDate) {
    let rows = board.board_rows(today);

    println!("{}", "2025 Draft Big Board".bold());
    if let Some(filter) = board.active_filter() {
        println!("Filter: {}", filter.to_string().cyan());
    }
    println!();
    println!("{:<8} {:<22} {:<5} {:<8} {:<20}", "Overall", "Name", "Age", "Height", "Current Team");
    println!("{}", "-".repeat(66));

    if rows.is_empty() {
        println!("  No players match the current filter");
        return;
    }

    for row in rows {
        println!(
            "{:<8} {:<22} {:<5} {:<8} {:<20}",
            row.board_rank, row.name, row.age, row.height, row.current_team
        );
    }
}

pub fn print_profile(profile: &ProspectProfile<'_>) {
    let player = profile.player;

    println!(
        "{} {}",
        player.name.bold(),
        format!("(#{} on the board, id {})", profile.board_rank, player.player_id).dimmed()
    );
    println!("Photo: {}", profile.photo_url);

    section("Player Stats");
    println!("  Age: {}", profile.age);
    println!("  Height: {}", profile.height);
    println!("  Weight: {} lbs", player.weight);
    println!("  Team: {}", player.current_team);
    println!("  Home Country: {}", player.home_country);

    section("Assessments from Different Outlets");
    match &profile.evaluation {
        Some(evaluation) => {
            for outlet in &evaluation.per_outlet {
                let note = match outlet.assessment {
                    Some(Assessment::HighOnProspect) => format!(" ({})", Assessment::HighOnProspect).green(),
                    Some(Assessment::LowOnProspect) => format!(" ({})", Assessment::LowOnProspect).red(),
                    None => "".normal(),
                };
                println!("  {}: {}{}", outlet.outlet, format_rank(outlet.rank), note);
            }
            if let Some(line) = consensus_line(evaluation) {
                println!("  {line}");
            }
            if let Some(line) = draft_spot_line(evaluation) {
                println!("  {}", line.yellow());
            }
        }
        None => println!("  No ranking data available"),
    }

    section("Season Stats");
    match profile.season_stat {
        Some(stat) => print_season_stat(stat),
        None => println!("  No game stats available"),
    }

    section("Scouting Reports");
    if profile.reports.is_empty() {
        println!("  No scouting reports available");
    }
    for report in &profile.reports {
        println!("  {} {}", "Scout:".bold(), report.scout);
        println!("  {} {}", "Report:".bold(), report.report);
        println!();
    }
}

/// Omitted when no outlet ranked the prospect
fn consensus_line(evaluation: &ProspectEvaluation) -> Option<String> {
    evaluation.consensus_rank.map(|consensus| format!("Consensus Rank: {}", format_rank(consensus)))
}

/// Omitted when no outlet ranked the prospect
fn draft_spot_line(evaluation: &ProspectEvaluation) -> Option<String> {
    evaluation
        .consensus_rank
        .map(|_| format!("Predicted Draft Spot: {}", evaluation.draft_spot_label()))
}

fn print_season_stat(stat: &SeasonStat) {
    println!(
        "  Games Played: {} (Started in {})",
        format_stat(stat.games_played),
        format_stat(stat.games_started)
    );
    println!("  Minutes Played Per Game: {}", format_stat(stat.minutes));
    println!("  Field Goal Percent: {}", format_percentage(stat.field_goal_pct));
    println!("  3 Point Percent: {}", format_percentage(stat.three_point_pct));
    println!("  Free Throw Percent: {}", format_percentage(stat.free_throw_pct));

    section("Stats Per Game");
    println!("  Points: {}", format_stat(stat.points));
    println!("  Assists: {}", format_stat(stat.assists));
    println!("  Rebounds: {}", format_stat(stat.rebounds));
    println!("  Blocks: {}", format_stat(stat.blocks));
    println!("  Steals: {}", format_stat(stat.steals));
    println!("  Turnovers: {}", format_stat(stat.turnovers));
}

pub fn print_teams(teams: &[&str]) {
    println!("{}", "Teams:".cyan().bold());
    for team in teams {
        println!("  {team}");
    }
}

pub fn print_search(players: &[&Player]) {
    if players.is_empty() {
        println!("No players found");
        return;
    }
    for player in players {
        println!("  {:<6} {:<22} {}", player.player_id.as_str(), player.name, player.current_team);
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.underline().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_engine::OutletRanking;

    #[test]
    fn test_ranked_prospect_shows_draft_spot() {
        let ranking = OutletRanking {
            player_id: "1".into(),
            espn: Some(1.0),
            sam_vecenie: Some(1.0),
            ..Default::default()
        };
        let evaluation = ProspectEvaluation::from_ranking(Some(&ranking));

        assert_eq!(consensus_line(&evaluation).as_deref(), Some("Consensus Rank: 1"));
        assert_eq!(
            draft_spot_line(&evaluation).as_deref(),
            Some("Predicted Draft Spot: Clear #1 Overall")
        );
    }

    #[test]
    fn test_record_without_numeric_ranks_omits_draft_spot() {
        let ranking = OutletRanking { player_id: "2".into(), ..Default::default() };
        let evaluation = ProspectEvaluation::from_ranking(Some(&ranking));

        assert_eq!(consensus_line(&evaluation), None);
        assert_eq!(draft_spot_line(&evaluation), None);
    }
}
