//! Shell command definitions

use crate::core::{Platform, Stage, TargetId};
use clap::{Args, Parser, Subcommand};

/// One line of shell input, parsed in multicall mode so the first word is
/// the command name.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellCli {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside a session
#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum ShellCommand {
    /// Show the kanban board
    Board(BoardArgs),

    /// List targets, optionally filtered by stage
    List(ListArgs),

    /// Add a new target (missing fields are prompted for)
    Add(AddArgs),

    /// Move a target one stage forward
    Advance(MoveArgs),

    /// Move a target one stage backward
    Regress(MoveArgs),

    /// Show the discovery toolkit
    Toolkit(ToolkitArgs),

    /// Show the playbook and engagement scripts
    Scripts,

    /// Show weekly goals and progress
    Team,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct BoardArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct ListArgs {
    /// Only show targets at this stage (0-7)
    #[arg(short, long, value_parser = parse_stage)]
    pub stage: Option<Stage>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct AddArgs {
    /// Expert/author name
    #[arg(long)]
    pub name: Option<String>,

    /// Niche/expertise, e.g. "Fintech Researcher"
    #[arg(long)]
    pub niche: Option<String>,

    /// Platform the target was found on
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Initial notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct MoveArgs {
    /// Target id
    pub id: TargetId,
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct ToolkitArgs {
    /// Replace the saved X search query
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Parse a stage by its pipeline position
pub fn parse_stage(s: &str) -> Result<Stage, String> {
    let index: u8 = s.parse().map_err(|_| format!("Invalid stage: {}", s))?;
    Stage::from_index(index).ok_or_else(|| format!("Stage must be 0-7, got {}", index))
}

/// Parse a shell command from one input line
pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    let parts = split_line(line);
    ShellCli::try_parse_from(parts).map(|cli| cli.command)
}

/// Split an input line into arguments, honoring double quotes
pub fn split_line(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    parts.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        parts.push(current);
    }

    parts
}
