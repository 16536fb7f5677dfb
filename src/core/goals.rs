//! Weekly goal configuration and progress

use crate::core::board::Board;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weekly outreach quotas, loadable from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyGoals {
    /// New targets scouted per week
    #[serde(default = "default_scouted")]
    pub scouted: u32,

    /// Formal invitations sent per week
    #[serde(default = "default_invites")]
    pub invites: u32,

    /// Speakers booked per week
    #[serde(default = "default_booked")]
    pub booked: u32,
}

fn default_scouted() -> u32 {
    30
}

fn default_invites() -> u32 {
    15
}

fn default_booked() -> u32 {
    3
}

impl Default for WeeklyGoals {
    fn default() -> Self {
        Self {
            scouted: default_scouted(),
            invites: default_invites(),
            booked: default_booked(),
        }
    }
}

impl WeeklyGoals {
    /// Load goals from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse goals from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let goals: WeeklyGoals = serde_yaml::from_str(yaml)?;
        goals.validate()?;
        Ok(goals)
    }

    /// Validate the quotas
    pub fn validate(&self) -> Result<()> {
        if self.scouted == 0 || self.invites == 0 || self.booked == 0 {
            anyhow::bail!("Weekly quotas must be non-zero");
        }
        if self.booked > self.invites || self.invites > self.scouted {
            anyhow::bail!(
                "Quotas must narrow down the funnel: scouted >= invites >= booked (got {}/{}/{})",
                self.scouted,
                self.invites,
                self.booked
            );
        }
        Ok(())
    }

    /// Measure the board against these goals
    pub fn progress(&self, board: &Board) -> GoalProgress {
        GoalProgress {
            scouted: Metric::new(board.len(), self.scouted),
            invites: Metric::new(board.invited_count(), self.invites),
            booked: Metric::new(board.booked_count(), self.booked),
        }
    }
}

/// One goal metric: how far along the board is against a quota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub current: usize,
    pub quota: u32,
}

impl Metric {
    fn new(current: usize, quota: u32) -> Self {
        Self { current, quota }
    }

    /// Completion ratio, clamped to 1.0 when the quota is exceeded
    pub fn ratio(self) -> f64 {
        if self.quota == 0 {
            return 1.0;
        }
        (self.current as f64 / self.quota as f64).min(1.0)
    }

    pub fn is_met(self) -> bool {
        self.current >= self.quota as usize
    }
}

/// Weekly progress snapshot derived from the board
#[derive(Debug, Clone, Copy)]
pub struct GoalProgress {
    pub scouted: Metric,
    pub invites: Metric,
    pub booked: Metric,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::Platform;

    #[test]
    fn test_defaults() {
        let goals = WeeklyGoals::default();
        assert_eq!(goals.scouted, 30);
        assert_eq!(goals.invites, 15);
        assert_eq!(goals.booked, 3);
        goals.validate().unwrap();
    }

    #[test]
    fn test_parse_yaml() {
        let goals = WeeklyGoals::from_yaml("scouted: 10\ninvites: 5\nbooked: 2\n").unwrap();
        assert_eq!(goals.scouted, 10);
        assert_eq!(goals.invites, 5);
        assert_eq!(goals.booked, 2);
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let goals = WeeklyGoals::from_yaml("booked: 2\n").unwrap();
        assert_eq!(goals.scouted, 30);
        assert_eq!(goals.invites, 15);
        assert_eq!(goals.booked, 2);
    }

    #[test]
    fn test_zero_quota_fails() {
        assert!(WeeklyGoals::from_yaml("scouted: 0\n").is_err());
    }

    #[test]
    fn test_inverted_funnel_fails() {
        assert!(WeeklyGoals::from_yaml("scouted: 3\ninvites: 15\nbooked: 1\n").is_err());
    }

    #[test]
    fn test_progress_against_board() {
        let goals = WeeklyGoals {
            scouted: 4,
            invites: 2,
            booked: 1,
        };

        let mut board = Board::new();
        let a = board.add("A", "x", Platform::Twitter, None).unwrap().id;
        board.add("B", "y", Platform::Twitter, None).unwrap();
        for _ in 0..7 {
            board.advance(a).unwrap();
        }

        let progress = goals.progress(&board);
        assert_eq!(progress.scouted.current, 2);
        assert_eq!(progress.scouted.ratio(), 0.5);
        assert!(!progress.scouted.is_met());

        assert_eq!(progress.invites.current, 1);
        assert_eq!(progress.booked.current, 1);
        assert!(progress.booked.is_met());
        assert_eq!(progress.booked.ratio(), 1.0);
    }

    #[test]
    fn test_ratio_clamps_when_quota_exceeded() {
        let metric = Metric { current: 9, quota: 3 };
        assert_eq!(metric.ratio(), 1.0);
    }
}
