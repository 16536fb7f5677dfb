//! Command-line interface

pub mod commands;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Terminal kanban board for outreach targets
#[derive(Debug, Parser, Clone)]
#[command(name = "huntboard")]
#[command(author = "Huntboard Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Track outreach targets through the 8-stage engagement pipeline", long_about = None)]
pub struct Cli {
    /// Start with an empty board instead of the demo targets
    #[arg(long)]
    pub empty: bool,

    /// Path to a weekly goals YAML file
    #[arg(short, long)]
    pub goals: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
