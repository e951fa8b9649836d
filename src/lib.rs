//! Dependency-graph engine for Kanban project boards.
//!
//! The engine is synchronous and snapshot-based: callers hand in the current
//! [`Board`], call into the graph, schedule, or move APIs, and commit the
//! returned state. Malformed data (stale references, dependency cycles) is
//! tolerated everywhere; nothing in the read paths panics or errors, because
//! this logic drives interactive UI state.

pub mod board;
pub mod config;
pub mod domain;
pub mod graph;
pub mod schedule;
pub mod store;

pub use board::{can_move, Board, MoveDecision};
pub use config::Config;
pub use domain::{Card, CardStatus, Column, ColumnRole, EngineError};
