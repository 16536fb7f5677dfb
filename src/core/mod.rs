//! Core domain models for the outreach board
//!
//! This module defines the pipeline model: the fixed stages, the target
//! record, the board that owns the collection, and the weekly goals.

pub mod board;
pub mod goals;
pub mod stage;
pub mod target;

pub use board::*;
pub use goals::*;
pub use stage::*;
pub use target::*;
