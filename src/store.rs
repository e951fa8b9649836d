//! JSON snapshot persistence for board state.
//!
//! The engine itself never touches the filesystem; this is the local-storage
//! form of the state store that owns the snapshot between engine calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::domain::EngineError;

pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Board, EngineError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Missing file means a fresh, empty board.
    pub fn load_or_default(&self) -> Result<Board, EngineError> {
        if !self.path.exists() {
            return Ok(Board::default());
        }
        self.load()
    }

    pub fn save(&self, board: &Board) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(board)?;
        fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), cards = board.cards.len(), "Board saved");
        Ok(())
    }
}
