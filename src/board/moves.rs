//! Move validation: may a card enter a column?

use serde::Serialize;

use crate::board::Board;
use crate::domain::{Card, ColumnRole};
use crate::graph::dependencies_of;

/// Outcome of a move check. Blocking is data for the UI, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum MoveDecision {
    Allowed,
    Blocked {
        reason: String,
        blocking_card_ids: Vec<String>,
    },
}

impl MoveDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, MoveDecision::Allowed)
    }
}

/// Only entry into a column with the `in_progress` role is constrained: every
/// direct dependency must sit in a `done`-role column. Column placement is
/// authoritative; a card marked complete via `actual_end_date` but parked
/// elsewhere still blocks its dependents. All other transitions are allowed.
pub fn can_move(board: &Board, card: &Card, target_column_id: &str) -> MoveDecision {
    let target_role = board.column(target_column_id).map(|column| column.role);
    if target_role != Some(ColumnRole::InProgress) {
        return MoveDecision::Allowed;
    }

    let blocking: Vec<&Card> = dependencies_of(board, card)
        .into_iter()
        .filter(|dep| {
            board.column(&dep.column_id).map(|column| column.role) != Some(ColumnRole::Done)
        })
        .collect();

    if blocking.is_empty() {
        return MoveDecision::Allowed;
    }

    let titles: Vec<&str> = blocking.iter().map(|dep| dep.title.as_str()).collect();
    MoveDecision::Blocked {
        reason: format!("Blocked by unfinished dependencies: {}", titles.join(", ")),
        blocking_card_ids: blocking.iter().map(|dep| dep.id.clone()).collect(),
    }
}
