//! User-tunable settings, loaded from a TOML file.
//!
//! Every field has a default, so an empty document (or a missing file) yields
//! [`Settings::default`]. Times of day are written as `"HH:MM"`.
//!
//! ```toml
//! [holidays]
//! default_country = "CO"
//!
//! [schedule]
//! work_day_start = "08:30"
//! work_day_end = "17:00"
//! slot_minutes = 15
//! ```

use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::ensure;
use crate::errors::{Error, Result};

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Locale codes `default_country` accepts (matched ignoring case).
pub const HOLIDAY_COUNTRY_CODES: [&str; 2] = ["US", "CO"];

fn default_work_day_start() -> String {
    "09:00".to_string()
}

fn default_work_day_end() -> String {
    "18:00".to_string()
}

fn default_slot_minutes() -> u32 {
    30
}

fn default_duration_minutes() -> u32 {
    60
}

fn default_suggested_slots() -> usize {
    3
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Holiday lookups.
    pub holidays: HolidaySettings,
    /// Free-slot search and conflict checks.
    pub schedule: ScheduleSettings,
    /// Log filtering.
    pub logging: LoggingSettings,
}

/// Holiday lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidaySettings {
    /// Country code (`"US"`, `"CO"`) used when a task names none.
    /// `None` means both locales. Resolved by `ag_time::Country::from_settings`.
    pub default_country: Option<String>,
}

/// Working-hours settings for slot suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Start of the working day, `"HH:MM"`.
    #[serde(default = "default_work_day_start")]
    pub work_day_start: String,
    /// End of the working day, `"HH:MM"`.
    #[serde(default = "default_work_day_end")]
    pub work_day_end: String,
    /// Step between candidate slots, in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Duration assumed for tasks without an end, in minutes.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    /// How many slots to propose.
    #[serde(default = "default_suggested_slots")]
    pub suggested_slots: usize,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            work_day_start: default_work_day_start(),
            work_day_end: default_work_day_end(),
            slot_minutes: default_slot_minutes(),
            default_duration_minutes: default_duration_minutes(),
            suggested_slots: default_suggested_slots(),
        }
    }
}

impl ScheduleSettings {
    /// Parsed start of the working day.
    pub fn start_time(&self) -> Result<NaiveTime> {
        parse_time_of_day("work_day_start", &self.work_day_start)
    }

    /// Parsed end of the working day.
    pub fn end_time(&self) -> Result<NaiveTime> {
        parse_time_of_day("work_day_end", &self.work_day_end)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<()> {
        let start = self.schedule.start_time()?;
        let end = self.schedule.end_time()?;
        ensure!(
            start < end,
            "work_day_start ({start}) must be before work_day_end ({end})"
        );
        ensure!(self.schedule.slot_minutes > 0, "slot_minutes must be positive");
        ensure!(
            self.schedule.default_duration_minutes > 0,
            "default_duration_minutes must be positive"
        );
        ensure!(
            self.schedule.suggested_slots > 0,
            "suggested_slots must be positive"
        );
        if let Some(code) = &self.holidays.default_country {
            let code = code.trim();
            ensure!(
                HOLIDAY_COUNTRY_CODES
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(code)),
                "default_country {code:?} is not one of {HOLIDAY_COUNTRY_CODES:?}"
            );
        }
        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            Error::Config(format!("logging.filter = {:?}: {e}", self.logging.filter))
        })?;
        Ok(())
    }
}

fn parse_time_of_day(field: &str, raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_OF_DAY_FORMAT)
        .map_err(|e| Error::Config(format!("{field} = {raw:?}: {e}")))
}
