//! The in-memory board snapshot and its edit operations.

pub mod moves;

pub use moves::{can_move, MoveDecision};

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Column, ColumnRole, EngineError};
use crate::graph::would_create_cycle;

/// Full board state: every engine call takes a snapshot like this and either
/// reads it or produces an updated one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lookups ────────────────────────────────────────────────

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// First column carrying the given role, if any.
    pub fn column_by_role(&self, role: ColumnRole) -> Option<&Column> {
        self.columns.iter().find(|column| column.role == role)
    }

    /// Cards of one column, sorted by their intra-column order.
    pub fn cards_in_column(&self, column_id: &str) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| card.column_id == column_id)
            .collect();
        cards.sort_by_key(|card| card.order);
        cards
    }

    // ── Column and card edits ──────────────────────────────────

    pub fn add_column(&mut self, title: impl Into<String>, role: ColumnRole) -> String {
        let column = Column::new(title, self.columns.len() as i64, role);
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    /// Appends a new card to the end of a column. New cards carry no dates,
    /// duration, or dependencies yet.
    pub fn add_card(
        &mut self,
        title: impl Into<String>,
        column_id: &str,
    ) -> Result<String, EngineError> {
        if self.column(column_id).is_none() {
            return Err(EngineError::NotFound(format!(
                "Column not found: {}",
                column_id
            )));
        }
        let order = self.cards_in_column(column_id).len() as i64;
        let card = Card::new(title, column_id, order);
        let id = card.id.clone();
        self.cards.push(card);
        Ok(id)
    }

    pub fn update_card(
        &mut self,
        id: &str,
        title: Option<String>,
        duration_days: Option<i64>,
    ) -> Result<(), EngineError> {
        if let Some(duration) = duration_days {
            if duration < 1 {
                return Err(EngineError::BadRequest(format!(
                    "Duration must be at least one day: {}",
                    duration
                )));
            }
        }
        let card = self
            .card_mut(id)
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", id)))?;
        if let Some(title) = title {
            card.title = title;
        }
        if let Some(duration) = duration_days {
            card.duration_days = Some(duration);
        }
        card.touch();
        Ok(())
    }

    /// Adds a dependency edge after checking it would not close a cycle.
    /// Adding an edge that already exists is a no-op.
    pub fn add_dependency(
        &mut self,
        card_id: &str,
        predecessor_id: &str,
    ) -> Result<(), EngineError> {
        if self.card(card_id).is_none() {
            return Err(EngineError::NotFound(format!("Card not found: {}", card_id)));
        }
        if self.card(predecessor_id).is_none() {
            return Err(EngineError::NotFound(format!(
                "Card not found: {}",
                predecessor_id
            )));
        }
        if would_create_cycle(self, card_id, predecessor_id) {
            return Err(EngineError::DependencyCycle {
                card_id: card_id.into(),
                predecessor_id: predecessor_id.into(),
            });
        }

        let card = self.card_mut(card_id).ok_or_else(|| {
            EngineError::NotFound(format!("Card not found: {}", card_id))
        })?;
        if !card.depends_on.iter().any(|dep| dep == predecessor_id) {
            card.depends_on.push(predecessor_id.into());
            card.touch();
        }
        Ok(())
    }

    /// Removing an edge that does not exist is a no-op.
    pub fn remove_dependency(
        &mut self,
        card_id: &str,
        predecessor_id: &str,
    ) -> Result<(), EngineError> {
        let card = self
            .card_mut(card_id)
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", card_id)))?;
        card.depends_on.retain(|dep| dep != predecessor_id);
        card.touch();
        Ok(())
    }

    /// Deletes a card. Inbound `depends_on` references from other cards are
    /// left in place; the resolver treats them as absent data.
    pub fn remove_card(&mut self, id: &str) -> Result<(), EngineError> {
        let column_id = self
            .card(id)
            .map(|card| card.column_id.clone())
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", id)))?;
        self.cards.retain(|card| card.id != id);
        self.renumber_column(&column_id);
        Ok(())
    }

    /// Moves a card within its column to `new_index` (clamped to the column
    /// length) and renumbers the column contiguously.
    pub fn reorder_card(&mut self, id: &str, new_index: usize) -> Result<(), EngineError> {
        let column_id = self
            .card(id)
            .map(|card| card.column_id.clone())
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", id)))?;

        let mut ids: Vec<String> = self
            .cards_in_column(&column_id)
            .iter()
            .map(|card| card.id.clone())
            .filter(|card_id| card_id != id)
            .collect();
        let index = new_index.min(ids.len());
        ids.insert(index, id.to_string());

        for (i, card_id) in ids.iter().enumerate() {
            if let Some(card) = self.card_mut(card_id) {
                card.order = i as i64;
            }
        }
        if let Some(card) = self.card_mut(id) {
            card.touch();
        }
        Ok(())
    }

    /// Places a card at the end of the target column and renumbers both
    /// columns contiguously. This does not validate the transition; callers
    /// consult [`can_move`] first and run propagation afterwards.
    pub fn apply_move(&mut self, id: &str, target_column_id: &str) -> Result<(), EngineError> {
        if self.column(target_column_id).is_none() {
            return Err(EngineError::NotFound(format!(
                "Column not found: {}",
                target_column_id
            )));
        }
        let source_column_id = self
            .card(id)
            .map(|card| card.column_id.clone())
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", id)))?;

        if let Some(card) = self.card_mut(id) {
            card.column_id = target_column_id.into();
            card.order = i64::MAX; // renumbering places it last
            card.touch();
        }
        self.renumber_column(&source_column_id);
        if source_column_id != target_column_id {
            self.renumber_column(target_column_id);
        }

        tracing::info!(
            card_id = id,
            from_column = source_column_id.as_str(),
            to_column = target_column_id,
            "Card moved"
        );
        Ok(())
    }

    pub fn mark_completed(
        &mut self,
        id: &str,
        date: chrono::NaiveDate,
    ) -> Result<(), EngineError> {
        let card = self
            .card_mut(id)
            .ok_or_else(|| EngineError::NotFound(format!("Card not found: {}", id)))?;
        card.actual_end_date = Some(date);
        card.touch();
        Ok(())
    }

    fn renumber_column(&mut self, column_id: &str) {
        let mut ids: Vec<(i64, String)> = self
            .cards
            .iter()
            .filter(|card| card.column_id == column_id)
            .map(|card| (card.order, card.id.clone()))
            .collect();
        ids.sort_by_key(|(order, _)| *order);

        for (i, (_, id)) in ids.iter().enumerate() {
            if let Some(card) = self.card_mut(id) {
                card.order = i as i64;
            }
        }
    }
}
