use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Card;

/// Derived scheduling status of a card. Never stored; recomputed from the
/// card's dates against a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Unscheduled,
    NotStarted,
    InProgress,
    Overdue,
    Completed,
}

impl CardStatus {
    /// `actual_end_date` short-circuits to `Completed` regardless of the
    /// computed dates.
    pub fn of(card: &Card, today: NaiveDate) -> CardStatus {
        if card.actual_end_date.is_some() {
            return CardStatus::Completed;
        }
        match (card.start_date, card.end_date) {
            (Some(start), _) if start > today => CardStatus::NotStarted,
            (Some(_), Some(end)) if end < today => CardStatus::Overdue,
            (Some(_), _) => CardStatus::InProgress,
            (None, _) => CardStatus::Unscheduled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Unscheduled => "unscheduled",
            CardStatus::NotStarted => "not_started",
            CardStatus::InProgress => "in_progress",
            CardStatus::Overdue => "overdue",
            CardStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
