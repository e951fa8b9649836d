use chrono::NaiveDate;
use serde::Deserialize;

/// Scheduling defaults, overridable from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Fixed base scheduling date; when unset, callers schedule from today.
    pub base_start_date: Option<NaiveDate>,
    pub default_duration_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let base_start_date = match std::env::var("BOARD_BASE_START_DATE") {
            Ok(raw) => Some(raw.parse::<NaiveDate>()?),
            Err(_) => None,
        };
        let default_duration_days = std::env::var("BOARD_DEFAULT_DURATION_DAYS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1);

        Ok(Self {
            base_start_date,
            default_duration_days,
        })
    }

    /// Effective base date for a scheduling pass.
    pub fn base_start(&self, today: NaiveDate) -> NaiveDate {
        self.base_start_date.unwrap_or(today)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_start_date: None,
            default_duration_days: 1,
        }
    }
}
