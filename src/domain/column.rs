use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow role of a column. The move validator and status logic key off
/// this tag, never off column titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Todo,
    InProgress,
    Done,
    Custom,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Todo => "todo",
            ColumnRole::InProgress => "in_progress",
            ColumnRole::Done => "done",
            ColumnRole::Custom => "custom",
        }
    }

    pub fn all() -> &'static [ColumnRole] {
        &[
            ColumnRole::Todo,
            ColumnRole::InProgress,
            ColumnRole::Done,
            ColumnRole::Custom,
        ]
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(ColumnRole::Todo),
            "in_progress" => Ok(ColumnRole::InProgress),
            "done" => Ok(ColumnRole::Done),
            "custom" => Ok(ColumnRole::Custom),
            _ => Err(format!("Invalid column role: {}", s)),
        }
    }
}

/// A named, ordered bucket of cards representing a workflow stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub position: i64,
    pub role: ColumnRole,
}

impl Column {
    pub fn new(title: impl Into<String>, position: i64, role: ColumnRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            position,
            role,
        }
    }
}
