//! huntboard - a terminal kanban board for outreach targets

pub mod cli;
pub mod content;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, BoardError, Platform, Stage, Target, TargetId, WeeklyGoals};
pub use crate::session::{Reply, Session, View};
