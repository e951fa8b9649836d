//! Date computation and transitive propagation.
//!
//! All date math is day-granular. A snapshot goes in, a new snapshot comes
//! out; callers commit the result as one atomic state update.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::board::Board;
use crate::config::Config;
use crate::domain::Card;
use crate::graph::{dependents_of, topological_order};

/// Start date for a card: the base date when it has no dependencies,
/// otherwise the day after the latest dependency end date. A dependency
/// without an end date falls back to its start date; one with neither
/// contributes nothing.
pub fn start_date_for(board: &Board, card: &Card, base: NaiveDate) -> NaiveDate {
    let latest = card
        .depends_on
        .iter()
        .filter_map(|id| board.card(id))
        .filter_map(|dep| dep.end_date.or(dep.start_date))
        .max();

    match latest {
        Some(end) => end.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX),
        None => base,
    }
}

/// End date of a span starting at `start`: a duration of 1 covers a single
/// day. Durations below 1 are clamped to 1; arithmetic past the calendar's
/// end saturates at `NaiveDate::MAX` instead of failing.
pub fn end_date_for(start: NaiveDate, duration_days: i64) -> NaiveDate {
    let span = duration_days.max(1) as u64 - 1;
    start.checked_add_days(Days::new(span)).unwrap_or(NaiveDate::MAX)
}

/// Recomputes dates for `card_id` and every transitive dependent, returning
/// the updated snapshot. Cards without a duration span one day.
///
/// The affected set is collected with a visited set so cyclic dependency
/// data cannot loop the walk; recomputation then runs in topological order
/// so a card that joins two updated branches sees both.
pub fn propagate(board: &Board, card_id: &str, base: NaiveDate) -> Board {
    let mut next = board.clone();
    if next.card(card_id).is_none() {
        // Stale ID, nothing to recompute.
        return next;
    }

    let mut affected: HashSet<String> = HashSet::new();
    let mut stack = vec![card_id.to_string()];
    while let Some(id) = stack.pop() {
        if !affected.insert(id.clone()) {
            continue;
        }
        for dependent in dependents_of(board, &id) {
            stack.push(dependent.id.clone());
        }
    }

    let ordered: Vec<String> = topological_order(&next.cards)
        .into_iter()
        .map(|card| card.id)
        .filter(|id| affected.contains(id))
        .collect();

    recompute(&mut next, &ordered, base, 1);
    tracing::debug!(card_id, affected = ordered.len(), "propagated schedule dates");
    next
}

/// Full reschedule: recomputes every card in dependency order. Used after
/// loading a snapshot or after bulk edits.
pub fn schedule_board(board: &Board, base: NaiveDate) -> Board {
    let mut next = board.clone();
    let ordered: Vec<String> = topological_order(&next.cards)
        .into_iter()
        .map(|card| card.id)
        .collect();

    recompute(&mut next, &ordered, base, 1);
    tracing::debug!(cards = ordered.len(), "rescheduled board");
    next
}

/// [`schedule_board`] with the configured base date and default duration:
/// the base resolves through [`Config::base_start`] and cards without a
/// duration span `default_duration_days`.
pub fn schedule_with(board: &Board, config: &Config, today: NaiveDate) -> Board {
    let mut next = board.clone();
    let ordered: Vec<String> = topological_order(&next.cards)
        .into_iter()
        .map(|card| card.id)
        .collect();

    recompute(
        &mut next,
        &ordered,
        config.base_start(today),
        config.default_duration_days,
    );
    tracing::debug!(cards = ordered.len(), "rescheduled board from config");
    next
}

fn recompute(board: &mut Board, ordered_ids: &[String], base: NaiveDate, default_duration: i64) {
    for id in ordered_ids {
        let computed = board.card(id).map(|card| {
            let start = start_date_for(board, card, base);
            let end = end_date_for(start, card.duration_days.unwrap_or(default_duration));
            (start, end)
        });
        if let (Some((start, end)), Some(card)) = (computed, board.card_mut(id)) {
            card.start_date = Some(start);
            card.end_date = Some(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn card(id: &str, deps: &[&str], duration: Option<i64>) -> Card {
        let mut card = Card::new(id, "col", 0);
        card.id = id.into();
        card.depends_on = deps.iter().map(|s| s.to_string()).collect();
        card.duration_days = duration;
        card
    }

    fn board_with(cards: Vec<Card>) -> Board {
        let mut board = Board::new();
        board.cards = cards;
        board
    }

    #[test]
    fn no_dependencies_starts_at_base() {
        let board = board_with(vec![card("a", &[], Some(3))]);
        let a = board.card("a").unwrap();
        assert_eq!(start_date_for(&board, a, day(2024, 1, 1)), day(2024, 1, 1));
    }

    #[test]
    fn single_dependency_starts_the_day_after_it_ends() {
        let mut board = board_with(vec![card("a", &[], Some(3)), card("b", &["a"], Some(2))]);
        board.card_mut("a").unwrap().end_date = Some(day(2024, 1, 3));

        let b = board.card("b").unwrap();
        // Independent of the base date.
        assert_eq!(start_date_for(&board, b, day(2024, 1, 1)), day(2024, 1, 4));
        assert_eq!(start_date_for(&board, b, day(2030, 6, 15)), day(2024, 1, 4));
    }

    #[test]
    fn multiple_dependencies_take_the_latest_end() {
        let mut board = board_with(vec![
            card("a", &[], None),
            card("b", &[], None),
            card("c", &["a", "b"], None),
        ]);
        board.card_mut("a").unwrap().end_date = Some(day(2024, 1, 5));
        board.card_mut("b").unwrap().end_date = Some(day(2024, 1, 9));

        let c = board.card("c").unwrap();
        assert_eq!(start_date_for(&board, c, day(2024, 1, 1)), day(2024, 1, 10));
    }

    #[test]
    fn dependency_without_end_date_falls_back_to_start_date() {
        let mut board = board_with(vec![card("a", &[], None), card("b", &["a"], None)]);
        board.card_mut("a").unwrap().start_date = Some(day(2024, 3, 1));

        let b = board.card("b").unwrap();
        assert_eq!(start_date_for(&board, b, day(2024, 1, 1)), day(2024, 3, 2));
    }

    #[test]
    fn duration_of_one_spans_a_single_day() {
        assert_eq!(end_date_for(day(2024, 1, 1), 1), day(2024, 1, 1));
        assert_eq!(end_date_for(day(2024, 1, 1), 3), day(2024, 1, 3));
        // Clamped.
        assert_eq!(end_date_for(day(2024, 1, 1), 0), day(2024, 1, 1));
    }

    #[test]
    fn extreme_durations_saturate_instead_of_failing() {
        assert_eq!(end_date_for(day(2024, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(end_date_for(NaiveDate::MAX, 5), NaiveDate::MAX);

        // A dependent of a saturated card saturates too.
        let board = board_with(vec![
            card("a", &[], Some(i64::MAX)),
            card("b", &["a"], Some(2)),
        ]);
        let next = schedule_board(&board, day(2024, 1, 1));
        assert_eq!(next.card("a").unwrap().end_date, Some(NaiveDate::MAX));
        assert_eq!(next.card("b").unwrap().start_date, Some(NaiveDate::MAX));
        assert_eq!(next.card("b").unwrap().end_date, Some(NaiveDate::MAX));
    }

    #[test]
    fn propagate_reaches_transitive_dependents() {
        let board = board_with(vec![
            card("a", &[], Some(3)),
            card("b", &["a"], Some(2)),
            card("c", &["b"], Some(1)),
        ]);

        let next = propagate(&board, "a", day(2024, 1, 1));
        assert_eq!(next.card("a").unwrap().start_date, Some(day(2024, 1, 1)));
        assert_eq!(next.card("a").unwrap().end_date, Some(day(2024, 1, 3)));
        assert_eq!(next.card("b").unwrap().start_date, Some(day(2024, 1, 4)));
        assert_eq!(next.card("b").unwrap().end_date, Some(day(2024, 1, 5)));
        assert_eq!(next.card("c").unwrap().start_date, Some(day(2024, 1, 6)));
        assert_eq!(next.card("c").unwrap().end_date, Some(day(2024, 1, 6)));
    }

    #[test]
    fn propagate_does_not_mutate_the_input() {
        let board = board_with(vec![card("a", &[], Some(2)), card("b", &["a"], None)]);
        let _ = propagate(&board, "a", day(2024, 1, 1));
        assert_eq!(board.card("a").unwrap().start_date, None);
        assert_eq!(board.card("b").unwrap().start_date, None);
    }

    #[test]
    fn diamond_join_sees_both_updated_branches() {
        let board = board_with(vec![
            card("base", &[], Some(1)),
            card("left", &["base"], Some(1)),
            card("right", &["base"], Some(5)),
            card("join", &["left", "right"], Some(1)),
        ]);

        let next = propagate(&board, "base", day(2024, 1, 1));
        // right ends 2024-01-06, later than left (2024-01-02).
        assert_eq!(next.card("join").unwrap().start_date, Some(day(2024, 1, 7)));
    }

    #[test]
    fn propagate_terminates_on_cyclic_data() {
        let board = board_with(vec![card("a", &["b"], Some(1)), card("b", &["a"], Some(1))]);
        let next = propagate(&board, "a", day(2024, 1, 1));
        assert!(next.card("a").unwrap().start_date.is_some());
        assert!(next.card("b").unwrap().start_date.is_some());
    }

    #[test]
    fn propagate_with_unknown_id_is_a_no_op() {
        let board = board_with(vec![card("a", &[], Some(1))]);
        let next = propagate(&board, "ghost", day(2024, 1, 1));
        assert_eq!(next.card("a").unwrap().start_date, None);
    }

    #[test]
    fn schedule_with_applies_configured_defaults() {
        let board = board_with(vec![card("a", &[], None), card("b", &["a"], None)]);
        let config = Config {
            base_start_date: Some(day(2024, 1, 1)),
            default_duration_days: 4,
        };

        let next = schedule_with(&board, &config, day(2024, 6, 1));
        assert_eq!(next.card("a").unwrap().start_date, Some(day(2024, 1, 1)));
        assert_eq!(next.card("a").unwrap().end_date, Some(day(2024, 1, 4)));
        assert_eq!(next.card("b").unwrap().start_date, Some(day(2024, 1, 5)));
    }

    #[test]
    fn schedule_board_dates_every_card() {
        let board = board_with(vec![card("b", &["a"], Some(2)), card("a", &[], Some(3))]);
        let next = schedule_board(&board, day(2024, 1, 1));
        assert_eq!(next.card("a").unwrap().end_date, Some(day(2024, 1, 3)));
        assert_eq!(next.card("b").unwrap().start_date, Some(day(2024, 1, 4)));
        assert_eq!(next.card("b").unwrap().end_date, Some(day(2024, 1, 5)));
    }
}
