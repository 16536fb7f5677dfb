use anyhow::{Context, Result};
use huntboard::cli::Cli;
use huntboard::core::{Board, WeeklyGoals};
use huntboard::session::Session;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Weekly goals: from file if given, defaults otherwise
    let goals = match &cli.goals {
        Some(path) => WeeklyGoals::from_file(path)
            .with_context(|| format!("Failed to load weekly goals from {}", path.display()))?,
        None => WeeklyGoals::default(),
    };

    // The board lives for exactly this session
    let board = if cli.empty {
        Board::new()
    } else {
        Board::seeded()
    };

    let mut session = Session::new(board, goals);
    session.run()
}
