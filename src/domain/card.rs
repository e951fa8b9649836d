use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task on the board. Dates are day-granular and computed by the
/// scheduler; `actual_end_date` marks real-world completion and is only ever
/// set explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub column_id: String,
    pub order: i64,
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

impl Card {
    pub fn new(title: impl Into<String>, column_id: impl Into<String>, order: i64) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            column_id: column_id.into(),
            order,
            duration_days: None,
            depends_on: Vec::new(),
            start_date: None,
            end_date: None,
            actual_end_date: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }
}
