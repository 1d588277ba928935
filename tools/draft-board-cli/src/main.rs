//! Draft Board CLI
//!
//! Terminal front end for the scouted draft board:
//! - board: the big board, optionally filtered by team or league type
//! - player: a prospect's profile with outlet assessments and reports
//! - teams / search: pickers used when filtering and filing reports
//! - interactive: a session where filters and reports accumulate

mod interactive;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prospect_engine::{BoardConfig, DraftBoard, LeagueFilter, PlayerFilter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draft-board")]
#[command(about = "Scouted draft board - big board, prospect profiles and scouting reports")]
#[command(version)]
struct Cli {
    /// Dataset JSON file (overrides the configured path)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the big board
    Board {
        /// Only players on this team (exact match)
        #[arg(long, conflicts_with = "league")]
        team: Option<String>,

        /// NCAA or Pro
        #[arg(long)]
        league: Option<LeagueFilter>,
    },

    /// Show a prospect's profile
    Player {
        /// Player id
        id: String,

        /// Emit the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the teams available for filtering
    Teams,

    /// Find players by partial name
    Search { query: String },

    /// Interactive session with filters and report entry
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BoardConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BoardConfig::from_env()?,
    };
    if let Some(path) = cli.data {
        config.data.path = path;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut board = DraftBoard::load(config.clone())
        .await
        .with_context(|| format!("failed to load dataset {}", config.data.path.display()))?;
    info!("Draft board ready with {} prospects", board.data().player_count());

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Board { team, league } => {
            if let Some(team) = team {
                board.apply_filter(PlayerFilter::Team(team));
            } else if let Some(league) = league {
                board.apply_filter(PlayerFilter::LeagueType(league));
            }
            render::print_board(&board, today);
        }
        Commands::Player { id, json } => match board.profile(&id, today) {
            Some(profile) if json => println!("{}", serde_json::to_string_pretty(&profile)?),
            Some(profile) => render::print_profile(&profile),
            None => anyhow::bail!("no player with id '{id}'"),
        },
        Commands::Teams => render::print_teams(&board.team_options()),
        Commands::Search { query } => render::print_search(&board.search_players(&query)),
        Commands::Interactive => interactive::run(&mut board)?,
    }

    Ok(())
}
