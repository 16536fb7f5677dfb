//! The fixed 8-stage outreach pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the outreach pipeline, from initial discovery to a
/// confirmed booking.
///
/// The set is fixed and ordered; stages are never created or destroyed at
/// runtime. Using an enum means a target can never hold an out-of-range
/// stage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Gathered from platforms, not yet contacted
    Scouted,
    /// Day 1: read their work and comment
    Recon,
    /// Day 2-3: share and engage
    ValueAdd,
    /// Day 4: reply with direct insight
    Direct,
    /// Day 5: organic community mention
    Seeding,
    /// Day 6: the formal invitation
    Ask,
    /// Day 7: handoff and review
    Logged,
    /// Speaker confirmed
    Booked,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 8] = [
        Stage::Scouted,
        Stage::Recon,
        Stage::ValueAdd,
        Stage::Direct,
        Stage::Seeding,
        Stage::Ask,
        Stage::Logged,
        Stage::Booked,
    ];

    /// Position of this stage in the pipeline (0..=7)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a stage by pipeline position
    pub fn from_index(index: u8) -> Option<Stage> {
        Self::ALL.get(index as usize).copied()
    }

    /// The next stage forward, or `None` at the ceiling
    pub fn next(self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    /// The previous stage, or `None` at the floor
    pub fn prev(self) -> Option<Stage> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Display title as shown on the board
    pub fn title(self) -> &'static str {
        match self {
            Stage::Scouted => "Scouted (Backlog)",
            Stage::Recon => "Day 1: Recon",
            Stage::ValueAdd => "Day 2-3: Value Add",
            Stage::Direct => "Day 4: Direct",
            Stage::Seeding => "Day 5: Seeding",
            Stage::Ask => "Day 6: The Ask",
            Stage::Logged => "Day 7: Logged",
            Stage::Booked => "Booked",
        }
    }

    /// One-line description of what happens at this stage
    pub fn desc(self) -> &'static str {
        match self {
            Stage::Scouted => "Gathered from platforms",
            Stage::Recon => "Read & comment",
            Stage::ValueAdd => "Share & engage",
            Stage::Direct => "Reply with insight",
            Stage::Seeding => "Organic community mention",
            Stage::Ask => "Formal invitation",
            Stage::Logged => "Handoff & review",
            Stage::Booked => "Speaker confirmed",
        }
    }

    /// Whether this is the terminal stage
    pub fn is_booked(self) -> bool {
        self == Stage::Booked
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
