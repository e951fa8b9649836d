//! Cycle-tolerant topological ordering of cards.

use std::collections::HashMap;

use crate::domain::Card;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Orders `cards` so that every resolvable dependency precedes its dependent.
///
/// Dependencies pointing outside the input slice are ignored. A dependency
/// chain that loops is skipped rather than reported: the cards on the loop
/// are still emitted exactly once, only their relative order is
/// unspecified. Malformed data degrades the ordering locally, it never
/// fails the sort.
pub fn topological_order(cards: &[Card]) -> Vec<Card> {
    let index: HashMap<&str, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.id.as_str(), i))
        .collect();

    let mut marks = vec![Mark::Unvisited; cards.len()];
    let mut out = Vec::with_capacity(cards.len());

    for i in 0..cards.len() {
        visit(cards, &index, i, &mut marks, &mut out);
    }

    out
}

fn visit(
    cards: &[Card],
    index: &HashMap<&str, usize>,
    i: usize,
    marks: &mut [Mark],
    out: &mut Vec<Card>,
) {
    match marks[i] {
        Mark::Done => return,
        // Back edge: a cycle. Skip instead of failing.
        Mark::Visiting => return,
        Mark::Unvisited => {}
    }

    marks[i] = Mark::Visiting;
    for dep in &cards[i].depends_on {
        if let Some(&j) = index.get(dep.as_str()) {
            visit(cards, index, j, marks, out);
        }
    }
    marks[i] = Mark::Done;
    out.push(cards[i].clone());
}
