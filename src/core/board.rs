//! The outreach board: owns the target collection and the stage transitions

use crate::core::stage::Stage;
use crate::core::target::{Platform, Target, TargetId};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from board operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A required creation field was empty
    #[error("Required field is empty: {field}")]
    MissingField { field: &'static str },

    /// No target with the given id exists on the board
    #[error("No target with id {0}")]
    UnknownTarget(TargetId),
}

/// In-memory collection of targets, each pinned to exactly one stage.
///
/// The board is the single owner of all pipeline state for a session.
/// Targets keep their insertion order, so per-stage listings are stable.
/// Stage transitions clamp at the pipeline boundaries; operating on an id
/// that does not exist is a reported error rather than a silent no-op.
#[derive(Debug)]
pub struct Board {
    targets: Vec<Target>,
    next_id: TargetId,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a board pre-loaded with the demo targets
    pub fn seeded() -> Self {
        let mut board = Self::new();
        for (name, niche, platform, stage, notes) in [
            (
                "Dr. Aris Thorne",
                "Supply Chain Innovator",
                Platform::Substack,
                Stage::Recon,
                "Wrote about decentralized logistics.",
            ),
            (
                "Elena Rostova",
                "Sci-Fi Author",
                Platform::Goodreads,
                Stage::Seeding,
                "New book exploring digital post-scarcity.",
            ),
            (
                "Marcus Webb",
                "Productivity Expert",
                Platform::Twitter,
                Stage::Scouted,
                "Found via min_faves:20 query.",
            ),
        ] {
            let id = board.next_id;
            board.next_id += 1;
            let mut target = Target::new(
                id,
                name.to_string(),
                niche.to_string(),
                platform,
                Some(notes.to_string()),
            );
            target.stage = stage;
            board.targets.push(target);
        }
        board
    }

    /// Add a new target at the Scouted stage.
    ///
    /// Name and niche must be non-empty after trimming; validation lives
    /// here at the model boundary, not only in the form layer.
    pub fn add(
        &mut self,
        name: &str,
        niche: &str,
        platform: Platform,
        notes: Option<String>,
    ) -> Result<&Target, BoardError> {
        let name = name.trim();
        let niche = niche.trim();
        if name.is_empty() {
            return Err(BoardError::MissingField { field: "name" });
        }
        if niche.is_empty() {
            return Err(BoardError::MissingField { field: "niche" });
        }

        let id = self.next_id;
        self.next_id += 1;

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let target = Target::new(id, name.to_string(), niche.to_string(), platform, notes);
        self.targets.push(target);

        info!("Added target {} ({})", id, name);
        Ok(self.targets.last().unwrap())
    }

    /// Move a target one stage forward. Clamps at Booked.
    pub fn advance(&mut self, id: TargetId) -> Result<Stage, BoardError> {
        let target = self.get_mut(id)?;
        if let Some(next) = target.stage.next() {
            target.stage = next;
            debug!("Target {} advanced to {}", id, next);
        }
        Ok(target.stage)
    }

    /// Move a target one stage backward. Clamps at Scouted.
    pub fn regress(&mut self, id: TargetId) -> Result<Stage, BoardError> {
        let target = self.get_mut(id)?;
        if let Some(prev) = target.stage.prev() {
            target.stage = prev;
            debug!("Target {} regressed to {}", id, prev);
        }
        Ok(target.stage)
    }

    /// Get a target by id
    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TargetId) -> Result<&mut Target, BoardError> {
        self.targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::UnknownTarget(id))
    }

    /// All targets, in insertion order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Targets currently at a given stage, in insertion order
    pub fn at_stage(&self, stage: Stage) -> Vec<&Target> {
        self.targets.iter().filter(|t| t.stage == stage).collect()
    }

    /// Target counts per stage, in pipeline order
    pub fn stage_counts(&self) -> [usize; 8] {
        let mut counts = [0usize; 8];
        for target in &self.targets {
            counts[target.stage.index() as usize] += 1;
        }
        counts
    }

    /// Number of targets on the board
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the board has no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets that have received the formal invitation (The Ask or later)
    pub fn invited_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| t.stage >= Stage::Ask)
            .count()
    }

    /// Targets at the terminal Booked stage
    pub fn booked_count(&self) -> usize {
        self.targets.iter().filter(|t| t.stage.is_booked()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_one(stage: Stage) -> (Board, TargetId) {
        let mut board = Board::new();
        let id = board
            .add("Jane Doe", "Historian", Platform::Twitter, None)
            .unwrap()
            .id;
        while board.get(id).unwrap().stage < stage {
            board.advance(id).unwrap();
        }
        (board, id)
    }

    #[test]
    fn test_add_starts_at_scouted() {
        let mut board = Board::new();
        let id = board
            .add("Jane Doe", "Historian", Platform::Twitter, None)
            .unwrap()
            .id;

        let at_scouted = board.at_stage(Stage::Scouted);
        assert_eq!(at_scouted.len(), 1);
        assert_eq!(at_scouted[0].id, id);
        assert_eq!(at_scouted[0].name, "Jane Doe");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut board = Board::new();
        let err = board
            .add("   ", "Historian", Platform::Twitter, None)
            .unwrap_err();
        assert_eq!(err, BoardError::MissingField { field: "name" });
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_niche() {
        let mut board = Board::new();
        let err = board.add("Jane Doe", "", Platform::Twitter, None).unwrap_err();
        assert_eq!(err, BoardError::MissingField { field: "niche" });
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_trims_fields_and_blank_notes() {
        let mut board = Board::new();
        let target = board
            .add(
                "  Jane Doe  ",
                " Historian ",
                Platform::Patreon,
                Some("   ".to_string()),
            )
            .unwrap();
        assert_eq!(target.name, "Jane Doe");
        assert_eq!(target.niche, "Historian");
        assert!(target.notes.is_none());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut board = Board::new();
        let a = board.add("A", "x", Platform::Discord, None).unwrap().id;
        let b = board.add("B", "y", Platform::Discord, None).unwrap().id;
        assert!(b > a);
    }

    #[test]
    fn test_advance_moves_between_stage_listings() {
        let (mut board, id) = board_with_one(Stage::Recon);
        assert_eq!(board.at_stage(Stage::Recon).len(), 1);

        board.advance(id).unwrap();
        assert!(board.at_stage(Stage::Recon).is_empty());
        assert_eq!(board.at_stage(Stage::ValueAdd)[0].id, id);
    }

    #[test]
    fn test_advance_clamps_at_booked() {
        let (mut board, id) = board_with_one(Stage::Booked);
        assert_eq!(board.advance(id).unwrap(), Stage::Booked);
        assert_eq!(board.get(id).unwrap().stage, Stage::Booked);
    }

    #[test]
    fn test_regress_clamps_at_scouted() {
        let (mut board, id) = board_with_one(Stage::Scouted);
        assert_eq!(board.regress(id).unwrap(), Stage::Scouted);
        assert_eq!(board.get(id).unwrap().stage, Stage::Scouted);
    }

    #[test]
    fn test_seven_advances_reach_booked() {
        let (mut board, id) = board_with_one(Stage::Scouted);
        for _ in 0..7 {
            board.advance(id).unwrap();
        }
        assert_eq!(board.get(id).unwrap().stage, Stage::Booked);

        // An eighth advance stays put
        assert_eq!(board.advance(id).unwrap(), Stage::Booked);
    }

    #[test]
    fn test_unknown_id_is_reported() {
        let mut board = Board::new();
        assert_eq!(board.advance(99).unwrap_err(), BoardError::UnknownTarget(99));
        assert_eq!(board.regress(99).unwrap_err(), BoardError::UnknownTarget(99));
    }

    #[test]
    fn test_at_stage_preserves_insertion_order() {
        let mut board = Board::new();
        let a = board.add("First", "x", Platform::Substack, None).unwrap().id;
        let b = board.add("Second", "y", Platform::Substack, None).unwrap().id;
        let c = board.add("Third", "z", Platform::Substack, None).unwrap().id;

        let ids: Vec<_> = board.at_stage(Stage::Scouted).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_seeded_board_matches_demo_data() {
        let board = Board::seeded();
        assert_eq!(board.len(), 3);
        assert_eq!(board.at_stage(Stage::Recon).len(), 1);
        assert_eq!(board.at_stage(Stage::Seeding).len(), 1);
        assert_eq!(board.at_stage(Stage::Scouted).len(), 1);
        assert_eq!(board.stage_counts().iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_goal_counters() {
        let mut board = Board::new();
        let a = board.add("A", "x", Platform::Twitter, None).unwrap().id;
        board.add("B", "y", Platform::Twitter, None).unwrap();

        for _ in 0..7 {
            board.advance(a).unwrap();
        }
        assert_eq!(board.invited_count(), 1);
        assert_eq!(board.booked_count(), 1);
    }
}
