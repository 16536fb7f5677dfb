//! Target domain model

use crate::core::stage::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a target by the board. Monotonic per session.
pub type TargetId = u64;

/// Where a target was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Substack,
    Goodreads,
    LinkedIn,
    Twitter,
    Patreon,
    Discord,
}

impl Platform {
    /// All supported platforms, in form/display order.
    pub const ALL: [Platform; 6] = [
        Platform::Substack,
        Platform::Goodreads,
        Platform::LinkedIn,
        Platform::Twitter,
        Platform::Patreon,
        Platform::Discord,
    ];
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Substack
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Substack => "Substack",
            Platform::Goodreads => "Goodreads",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Patreon => "Patreon",
            Platform::Discord => "Discord",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substack" => Ok(Platform::Substack),
            "goodreads" => Ok(Platform::Goodreads),
            "linkedin" => Ok(Platform::LinkedIn),
            "twitter" | "x" => Ok(Platform::Twitter),
            "patreon" => Ok(Platform::Patreon),
            "discord" => Ok(Platform::Discord),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// A prospective collaborator tracked through the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Board-assigned identifier
    pub id: TargetId,

    /// Expert/author name
    pub name: String,

    /// Expertise area, e.g. "Fintech Researcher"
    pub niche: String,

    /// Platform the target was found on
    pub platform: Platform,

    /// Current pipeline position
    pub stage: Stage,

    /// Optional free-form notes
    pub notes: Option<String>,

    /// When the target was added to the board
    pub added_at: DateTime<Utc>,
}

impl Target {
    /// Create a target at the start of the pipeline.
    ///
    /// Field validation is the board's job; see `Board::add`.
    pub fn new(
        id: TargetId,
        name: String,
        niche: String,
        platform: Platform,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            niche,
            platform,
            stage: Stage::Scouted,
            notes,
            added_at: Utc::now(),
        }
    }
}
