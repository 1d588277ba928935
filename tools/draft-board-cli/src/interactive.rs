//! Interactive session: filters and reports live until the session ends

use crate::render;
use anyhow::Result;
use colored::*;
use prospect_engine::{DraftBoard, FilterState, LeagueFilter};
use std::io::{self, Write};

pub fn run(board: &mut DraftBoard) -> Result<()> {
    println!("{}", "Draft Board Interactive Mode".yellow().bold());
    println!("============================");
    println!();
    println!("Type commands to work the board. Type 'help' for available commands.");
    println!();

    loop {
        print!("{}", prompt(board));
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();
        if input == "exit" || input == "quit" {
            println!("{}", "Goodbye!".green());
            break;
        }
        handle_command(board, input);
    }

    Ok(())
}

fn prompt(board: &DraftBoard) -> String {
    match board.session().state() {
        FilterState::Idle => "draft-board> ".to_string(),
        FilterState::ChoosingTeam { .. } => "draft-board (team)> ".to_string(),
        FilterState::ChoosingLeagueType { .. } => "draft-board (league)> ".to_string(),
    }
}

fn handle_command(board: &mut DraftBoard, input: &str) {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    let today = chrono::Local::now().date_naive();

    match command {
        "" => {}
        "board" => render::print_board(board, today),
        "show" => {
            if rest.is_empty() {
                println!("Usage: show <player_id>");
            } else if let Some(profile) = board.profile(rest, today) {
                render::print_profile(&profile);
            } else {
                println!("{}", format!("No player with id '{rest}'").red());
            }
        }
        "report" => handle_report(board, rest),
        "filter" => handle_filter(board, rest),
        "select" => handle_select(board, rest),
        "apply" => match board.apply_session() {
            Ok(filter) => println!("Filter applied: {}", filter.to_string().cyan()),
            Err(e) => println!("{}", e.to_string().red()),
        },
        "cancel" => match board.cancel_session() {
            Ok(()) => println!("Filter selection cancelled"),
            Err(e) => println!("{}", e.to_string().red()),
        },
        "clear" => {
            board.clear_filter();
            println!("Filter cleared");
        }
        "teams" => render::print_teams(&board.team_options()),
        "search" => render::print_search(&board.search_players(rest)),
        "help" => show_help(),
        _ => println!("Unknown command. Type 'help' for available commands."),
    }
}

/// `report <player_id> [scout] | <text>`
fn handle_report(board: &mut DraftBoard, args: &str) {
    let Some((head, text)) = args.split_once('|') else {
        println!("Usage: report <player_id> [scout name] | <report text>");
        return;
    };

    let head = head.trim();
    let (player_id, scout) = match head.split_once(char::is_whitespace) {
        Some((player_id, scout)) => (player_id, scout.trim()),
        None => (head, ""),
    };

    let report = board.submit_report(player_id, scout, text.trim());
    println!("Report filed for {} by {}", report.player_id, report.scout.green());
}

fn handle_filter(board: &mut DraftBoard, kind: &str) {
    let result = match kind {
        "team" => board.session_mut().choose_team(),
        "league" => board.session_mut().choose_league_type(),
        _ => {
            println!("Usage: filter <team|league>");
            return;
        }
    };

    match result {
        Ok(()) if kind == "team" => {
            println!("Choose a team with 'select <team>', then 'apply' or 'cancel'");
            render::print_teams(&board.team_options());
        }
        Ok(()) => println!("Choose 'select NCAA' or 'select Pro', then 'apply' or 'cancel'"),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn handle_select(board: &mut DraftBoard, value: &str) {
    let choosing_league =
        matches!(board.session().state(), FilterState::ChoosingLeagueType { .. });

    let result = if choosing_league {
        value.parse::<LeagueFilter>().and_then(|league| board.session_mut().select_league_type(league))
    } else {
        board.session_mut().select_team(value)
    };

    match result {
        Ok(()) => println!("Selected {}", value.cyan()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn show_help() {
    println!("{}", "Available Commands:".cyan().bold());
    println!("  board                                  - Show the board with the active filter");
    println!("  show <player_id>                       - Show a prospect's profile");
    println!("  report <player_id> [scout] | <text>    - File a scouting report");
    println!("  filter <team|league>                   - Start choosing a filter");
    println!("  select <value>                         - Pick the team or NCAA/Pro");
    println!("  apply                                  - Apply the chosen filter");
    println!("  cancel                                 - Discard the chosen filter");
    println!("  clear                                  - Show the full board");
    println!("  teams                                  - List teams");
    println!("  search <name>                          - Find players by name");
    println!("  {}                                   - Exit interactive mode", "exit".green());
    println!();
}
