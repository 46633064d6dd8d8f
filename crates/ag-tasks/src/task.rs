//! Read-only view of a task as stored by the persistence layer.
//!
//! Tasks arrive as camelCase JSON. Timestamps may be RFC 3339 (`…Z` or with
//! an offset), a naive `YYYY-MM-DDTHH:MM[:SS]`, or a bare `YYYY-MM-DD`; they
//! are kept as the wall-clock time they state.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use ag_core::errors::{Error, Result};
use ag_time::{Country, Date, Weekday};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low.
    Low,
    /// Medium (the default).
    #[default]
    Medium,
    /// High.
    High,
}

/// Repetition cadence of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

/// A task, as read from storage. This crate never mutates tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Storage identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Start (or day, for all-day tasks).
    #[serde(with = "iso_datetime")]
    pub date: NaiveDateTime,
    /// End, when known.
    #[serde(default, with = "iso_datetime_opt")]
    pub end_date: Option<NaiveDateTime>,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Whether the task spans the whole day (no time of day).
    #[serde(default)]
    pub is_all_day: bool,
    /// Whether the task repeats.
    #[serde(default)]
    pub is_recurring: bool,
    /// Days of the week a recurring task repeats on.
    #[serde(default)]
    pub recurring_days: Option<Vec<Weekday>>,
    /// Avoid holidays when proposing new dates.
    #[serde(default)]
    pub skip_holidays: bool,
    /// Holiday locale code (`"US"`, `"CO"`).
    #[serde(default)]
    pub holiday_country: Option<String>,
    /// Cadence of a recurring task.
    #[serde(default)]
    pub recurrence_type: Option<RecurrenceType>,
}

impl Task {
    /// A timed, medium-priority, non-recurring task.
    pub fn new(id: i64, title: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            date,
            end_date: None,
            priority: Priority::Medium,
            completed: false,
            is_all_day: false,
            is_recurring: false,
            recurring_days: None,
            skip_holidays: false,
            holiday_country: None,
            recurrence_type: None,
        }
    }

    /// Calendar day the task is on.
    pub fn day(&self) -> Date {
        Date::from(self.date.date())
    }

    /// Time of day, or `None` for all-day tasks.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        (!self.is_all_day).then(|| self.date.time())
    }

    /// End of the task, assuming `default_duration` when no end is stored.
    pub fn end_or(&self, default_duration: Duration) -> NaiveDateTime {
        self.end_date.unwrap_or(self.date + default_duration)
    }

    /// Holiday locale, if the stored code is recognised.
    pub fn holiday_country(&self) -> Option<Country> {
        self.holiday_country.as_deref().and_then(Country::from_code)
    }
}

/// Parse a task timestamp.
///
/// RFC 3339 values keep the wall-clock time of their own offset; a bare date
/// means midnight.
pub fn parse_task_datetime(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| Error::Parse(format!("{text:?} is not an ISO date or date-time")))
}

mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&dt.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_task_datetime(&raw).map_err(serde::de::Error::custom)
    }
}

mod iso_datetime_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.collect_str(&dt.format(super::iso_datetime::FORMAT)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_task_datetime(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn parses_supported_timestamp_shapes() {
        assert_eq!(parse_task_datetime("2024-03-15T14:30:00.000Z").unwrap(), dt(2024, 3, 15, 14, 30));
        assert_eq!(parse_task_datetime("2024-03-15T14:30:00-05:00").unwrap(), dt(2024, 3, 15, 14, 30));
        assert_eq!(parse_task_datetime("2024-03-15T14:30:00").unwrap(), dt(2024, 3, 15, 14, 30));
        assert_eq!(parse_task_datetime("2024-03-15T14:30").unwrap(), dt(2024, 3, 15, 14, 30));
        assert_eq!(parse_task_datetime("2024-03-15 14:30:00").unwrap(), dt(2024, 3, 15, 14, 30));
        assert_eq!(parse_task_datetime("2024-03-15").unwrap(), dt(2024, 3, 15, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_task_datetime("Invalid Date"), Err(Error::Parse(_))));
        assert!(parse_task_datetime("2024-02-30").is_err());
    }

    #[test]
    fn deserialises_storage_json() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "userId": 1,
                "title": "Dentist",
                "date": "2024-03-15T09:45:00.000Z",
                "endDate": null,
                "priority": "high",
                "isAllDay": false,
                "isRecurring": true,
                "recurringDays": ["monday", "thursday"],
                "skipHolidays": true,
                "holidayCountry": "CO",
                "recurrenceType": "weekly"
            }"#,
        )
        .unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.date, dt(2024, 3, 15, 9, 45));
        assert_eq!(task.end_date, None);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.recurring_days, Some(vec![Weekday::Monday, Weekday::Thursday]));
        assert_eq!(task.holiday_country(), Some(Country::Colombia));
        assert_eq!(task.recurrence_type, Some(RecurrenceType::Weekly));
        assert!(!task.completed);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id": 1, "title": "x", "date": "2024-01-02"}"#).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.is_all_day);
        assert!(task.holiday_country().is_none());
    }

    #[test]
    fn invalid_date_fails_deserialisation() {
        let res: std::result::Result<Task, _> =
            serde_json::from_str(r#"{"id": 1, "title": "x", "date": "soon"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn time_of_day_and_end() {
        let mut task = Task::new(1, "standup", dt(2024, 5, 6, 9, 15));
        assert_eq!(task.time_of_day(), NaiveTime::from_hms_opt(9, 15, 0));
        assert_eq!(task.end_or(Duration::minutes(60)), dt(2024, 5, 6, 10, 15));
        task.end_date = Some(dt(2024, 5, 6, 9, 30));
        assert_eq!(task.end_or(Duration::minutes(60)), dt(2024, 5, 6, 9, 30));
        task.is_all_day = true;
        assert_eq!(task.time_of_day(), None);
        assert_eq!(task.day(), Date::from_ymd(2024, 5, 6).unwrap());
    }

    #[test]
    fn serialises_back_to_camel_case() {
        let task = Task::new(3, "Review", dt(2024, 5, 6, 9, 15));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["date"], "2024-05-06T09:15:00");
        assert_eq!(json["isAllDay"], false);
        assert!(json["endDate"].is_null());
    }
}
