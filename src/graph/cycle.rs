//! Cycle detection for candidate dependency edges.

use std::collections::HashSet;

use crate::board::Board;

/// Would adding `candidate_predecessor_id` to `card_id`'s `depends_on` close
/// a cycle?
///
/// Self-reference is immediately a cycle. Otherwise the candidate
/// predecessor's existing dependency chains are searched for the dependent
/// card; reaching it means the new edge would loop back. The visited set
/// guarantees termination even when the board already contains cycles or
/// shared ancestors.
pub fn would_create_cycle(board: &Board, card_id: &str, candidate_predecessor_id: &str) -> bool {
    if card_id == candidate_predecessor_id {
        return true;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![candidate_predecessor_id];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        if id == card_id {
            return true;
        }
        if let Some(card) = board.card(id) {
            for dep in &card.depends_on {
                stack.push(dep.as_str());
            }
        }
    }

    false
}
