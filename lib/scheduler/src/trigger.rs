//! Trigger shapes accepted from schedule requests and the normalized
//! trigger produced for the scheduler backend.
//!
//! Requests carry exactly one of three input shapes (simple interval,
//! calendar spec, or raw cron string); normalization reduces all of them
//! to a [`NormalizedTrigger`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed-interval trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTrigger {
    /// When the trigger first fires. Unset means "now" at normalization time.
    pub start_time: Option<DateTime<Utc>>,
    /// When the trigger stops firing, if ever.
    pub end_time: Option<DateTime<Utc>>,
    /// Seconds between firings.
    pub repeat_interval_seconds: i64,
    /// Number of repeats after the first firing. `0` fires once,
    /// [`Self::REPEAT_INDEFINITELY`] repeats forever.
    pub repeat_count: i32,
}

impl SimpleTrigger {
    /// Sentinel repeat count meaning "repeat forever".
    pub const REPEAT_INDEFINITELY: i32 = -1;
}

/// Calendar-based trigger shape as submitted by callers.
///
/// Day, week, and month values are 0-indexed on the wire
/// (0=Sunday..6=Saturday, 0=January..11=December); normalization converts
/// to the backend's 1-indexed convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarTriggerSpec {
    /// When the trigger first fires.
    pub start_time: Option<DateTime<Utc>>,
    /// When the trigger stops firing, if ever.
    pub end_time: Option<DateTime<Utc>>,
    /// Days of the week, 0=Sunday..6=Saturday.
    pub days_of_week: Vec<u8>,
    /// Weeks of the month, 0..3 plus [`Self::LAST_WEEK_OF_MONTH`].
    pub weeks_of_month: Vec<u8>,
    /// Days of the month, 1..31. Ignored when `days_of_week` is non-empty.
    pub days_of_month: Vec<u8>,
    /// Months of the year, 0=January..11=December.
    pub months_of_year: Vec<u8>,
    /// Calendar years, verbatim.
    pub years: Vec<i32>,
    /// Seconds between firings; only consulted in simplified-daily mode.
    pub repeat_interval_seconds: i64,
    /// Opaque UI state passed through to the normalized trigger.
    pub ui_pass_param: Option<String>,
    /// Pre-built cron string, or [`Self::GENERATE_CRON`] to request
    /// simplified-daily synthesis.
    pub cron_string: Option<String>,
}

impl CalendarTriggerSpec {
    /// Sentinel week-of-month value meaning "last week of the month".
    pub const LAST_WEEK_OF_MONTH: u8 = 4;

    /// Sentinel cron string requesting an every-N-days cron expression
    /// synthesized from `repeat_interval_seconds` and the start time.
    pub const GENERATE_CRON: &'static str = "TO_BE_GENERATED";
}

/// A raw cron trigger shape as submitted by callers.
///
/// Expressions with 5 or 6 fields are accepted; the optional trailing
/// "year" field is padded with `*` during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronTrigger {
    /// The cron expression, 5-7 whitespace-separated fields.
    pub cron_string: String,
    /// When the trigger first fires.
    pub start_time: Option<DateTime<Utc>>,
    /// When the trigger stops firing, if ever.
    pub end_time: Option<DateTime<Utc>>,
    /// Job duration in milliseconds.
    pub duration_ms: i64,
    /// Opaque UI state passed through to the normalized trigger.
    pub ui_pass_param: Option<String>,
}

/// A day of the week for qualified recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Maps a wire value (0=Sunday..6=Saturday) to a day, or `None` when
    /// out of range.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }
}

/// Ordinal qualifier for a day-of-week recurrence within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeekQualifier {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl DayOfWeekQualifier {
    /// Maps a week-of-month wire value to a qualifier, or `None` when out
    /// of range. The sentinel value 4 maps to [`Self::Last`].
    #[must_use]
    pub fn from_week_index(week: u8) -> Option<Self> {
        match week {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            3 => Some(Self::Fourth),
            CalendarTriggerSpec::LAST_WEEK_OF_MONTH => Some(Self::Last),
            _ => None,
        }
    }
}

/// A single day-of-week recurrence in a normalized calendar trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayOfWeekRecurrence {
    /// Every occurrence of a day, stored 1-indexed (1=Sunday..7=Saturday)
    /// to match the backend convention.
    Day { day: u8 },
    /// A specific occurrence of a day within the month, e.g. "2nd Tuesday"
    /// or "last Friday".
    Qualified {
        day: DayOfWeek,
        qualifier: DayOfWeekQualifier,
    },
}

/// Normalized calendar trigger handed to the scheduler backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarTrigger {
    /// Day-of-week recurrences, plain or qualified.
    pub day_of_week_recurrences: Vec<DayOfWeekRecurrence>,
    /// Day-of-month recurrences, 1..31.
    pub day_of_month_recurrences: Vec<u8>,
    /// Month recurrences, 1-indexed (1=January..12=December).
    pub month_recurrences: Vec<u8>,
    /// Year recurrences, verbatim.
    pub year_recurrences: Vec<i32>,
    /// Firing hour in the server's zone.
    pub hour: Option<u32>,
    /// Firing minute in the server's zone.
    pub minute: Option<u32>,
    /// When the trigger first fires.
    pub start_time: Option<DateTime<Utc>>,
    /// When the trigger stops firing, if ever.
    pub end_time: Option<DateTime<Utc>>,
    /// Job duration in milliseconds.
    pub duration_ms: i64,
    /// Opaque UI state carried from the request.
    pub ui_pass_param: Option<String>,
    /// The compiled cron expression, when the trigger came from a cron
    /// string rather than explicit recurrences.
    pub cron_expression: Option<String>,
}

/// The single trigger produced per normalization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedTrigger {
    /// Fixed-interval firing.
    Simple {
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        repeat_interval_seconds: i64,
        repeat_count: i32,
    },
    /// Calendar-field recurrence firing.
    Calendar(CalendarTrigger),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_of_week_from_index() {
        assert_eq!(DayOfWeek::from_index(0), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::from_index(2), Some(DayOfWeek::Tuesday));
        assert_eq!(DayOfWeek::from_index(6), Some(DayOfWeek::Saturday));
        assert_eq!(DayOfWeek::from_index(7), None);
    }

    #[test]
    fn qualifier_from_week_index() {
        assert_eq!(
            DayOfWeekQualifier::from_week_index(0),
            Some(DayOfWeekQualifier::First)
        );
        assert_eq!(
            DayOfWeekQualifier::from_week_index(3),
            Some(DayOfWeekQualifier::Fourth)
        );
        assert_eq!(
            DayOfWeekQualifier::from_week_index(CalendarTriggerSpec::LAST_WEEK_OF_MONTH),
            Some(DayOfWeekQualifier::Last)
        );
        assert_eq!(DayOfWeekQualifier::from_week_index(5), None);
    }

    #[test]
    fn day_of_week_recurrence_serde_tag() {
        let recurrence = DayOfWeekRecurrence::Qualified {
            day: DayOfWeek::Tuesday,
            qualifier: DayOfWeekQualifier::Last,
        };
        let json = serde_json::to_value(&recurrence).expect("serialize");
        assert_eq!(json["type"], "qualified");
        assert_eq!(json["day"], "tuesday");
        assert_eq!(json["qualifier"], "last");
    }

    #[test]
    fn calendar_trigger_serde_roundtrip() {
        let trigger = CalendarTrigger {
            day_of_week_recurrences: vec![DayOfWeekRecurrence::Day { day: 3 }],
            month_recurrences: vec![1, 12],
            hour: Some(9),
            minute: Some(30),
            duration_ms: 60_000,
            ..Default::default()
        };
        let json = serde_json::to_string(&trigger).expect("serialize");
        let parsed: CalendarTrigger = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(trigger, parsed);
    }
}
