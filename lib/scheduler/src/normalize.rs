//! Conversion of schedule requests into normalized triggers.
//!
//! Resolution precedence:
//!
//! 1. No trigger set: one-shot simple trigger 10 seconds in the future
//! 2. Simple trigger: passed through, unset start defaults to now
//! 3. Calendar spec: expanded into recurrences or a synthesized daily cron
//! 4. Cron trigger: padded and compiled by the backend

use crate::backend::SchedulerBackend;
use crate::error::NormalizeError;
use crate::request::{ScheduleRequest, TriggerSpec};
use crate::trigger::{
    CalendarTrigger, CalendarTriggerSpec, DayOfWeek, DayOfWeekQualifier, DayOfWeekRecurrence,
    NormalizedTrigger,
};
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;

/// Seconds added to a run-in-background start time so the scheduler cannot
/// miss the firing while registration is still in flight.
pub const RUN_IN_BACKGROUND_DELAY_SECONDS: i64 = 10;

const SECONDS_PER_DAY: i64 = 86_400;

/// Converts a schedule request into the single trigger the backend will
/// register.
///
/// `server_zone` is the zone the scheduler engine fires in; calendar
/// hour/minute recurrences are fixed from the start time as observed in
/// that zone.
///
/// # Errors
///
/// Returns [`NormalizeError::UnsupportedTriggerKind`] for cron requests
/// against a backend without cron support,
/// [`NormalizeError::MalformedCronExpression`] when the backend rejects a
/// padded expression, [`NormalizeError::InvalidStartTime`] when a calendar
/// spec has no start time, and [`NormalizeError::InvalidRecurrence`] for
/// out-of-range day or week values.
pub fn normalize_trigger(
    request: &ScheduleRequest,
    backend: &dyn SchedulerBackend,
    server_zone: Tz,
) -> Result<NormalizedTrigger, NormalizeError> {
    match &request.trigger {
        None => Ok(NormalizedTrigger::Simple {
            start_time: Utc::now() + Duration::seconds(RUN_IN_BACKGROUND_DELAY_SECONDS),
            end_time: None,
            repeat_interval_seconds: 0,
            repeat_count: 0,
        }),
        Some(TriggerSpec::Simple(simple)) => Ok(NormalizedTrigger::Simple {
            start_time: simple.start_time.unwrap_or_else(Utc::now),
            end_time: simple.end_time,
            repeat_interval_seconds: simple.repeat_interval_seconds,
            repeat_count: simple.repeat_count,
        }),
        Some(TriggerSpec::Calendar(spec)) => {
            let trigger = expand_calendar_spec(spec, request.duration_ms, backend, server_zone)?;
            Ok(NormalizedTrigger::Calendar(trigger))
        }
        Some(TriggerSpec::Cron(cron)) => {
            if !backend.supports_cron_triggers() {
                return Err(NormalizeError::UnsupportedTriggerKind);
            }
            let expression = pad_cron_expression(&cron.cron_string);
            let mut trigger = backend.compile_cron_trigger(&expression)?;
            trigger.start_time = cron.start_time;
            trigger.end_time = cron.end_time;
            trigger.duration_ms = cron.duration_ms;
            trigger.ui_pass_param = cron.ui_pass_param.clone();
            Ok(NormalizedTrigger::Calendar(trigger))
        }
    }
}

/// Appends a trailing `*` when the expression has fewer than 7 fields.
///
/// The backend wants the 7-field Quartz form with the optional year field;
/// callers may submit 5- or 6-field standard cron. A 7-field expression
/// passes through untouched.
#[must_use]
pub fn pad_cron_expression(expression: &str) -> String {
    if expression.split_whitespace().count() < 7 {
        format!("{expression} *")
    } else {
        expression.to_string()
    }
}

fn expand_calendar_spec(
    spec: &CalendarTriggerSpec,
    duration_ms: i64,
    backend: &dyn SchedulerBackend,
    server_zone: Tz,
) -> Result<CalendarTrigger, NormalizeError> {
    let mut trigger = if spec.cron_string.as_deref() == Some(CalendarTriggerSpec::GENERATE_CRON) {
        let start = required_start_time(spec)?;
        // Truncating division: intervals shorter than a day collapse to 0
        // and produce an every-0 field the backend may reject.
        let interval_days = spec.repeat_interval_seconds / SECONDS_PER_DAY;
        let expression = daily_cron_expression(interval_days, start, server_zone);
        backend.compile_cron_trigger(&expression)?
    } else {
        let mut trigger = CalendarTrigger::default();
        expand_day_recurrences(spec, &mut trigger)?;
        for &month in &spec.months_of_year {
            trigger.month_recurrences.push(month + 1);
        }
        trigger.year_recurrences.extend(&spec.years);

        let local_start = required_start_time(spec)?.with_timezone(&server_zone);
        trigger.hour = Some(local_start.hour());
        trigger.minute = Some(local_start.minute());
        trigger
    };

    trigger.start_time = spec.start_time;
    trigger.end_time = spec.end_time;
    trigger.duration_ms = duration_ms;
    trigger.ui_pass_param = spec.ui_pass_param.clone();
    Ok(trigger)
}

/// Builds the day-selection recurrences.
///
/// Day-of-week takes precedence over day-of-month when both are populated;
/// the day-of-month list is then ignored entirely.
fn expand_day_recurrences(
    spec: &CalendarTriggerSpec,
    trigger: &mut CalendarTrigger,
) -> Result<(), NormalizeError> {
    if !spec.days_of_week.is_empty() {
        if !spec.weeks_of_month.is_empty() {
            for &day in &spec.days_of_week {
                for &week in &spec.weeks_of_month {
                    let day = DayOfWeek::from_index(day).ok_or(
                        NormalizeError::InvalidRecurrence {
                            field: "day-of-week",
                            value: u32::from(day),
                        },
                    )?;
                    let qualifier = DayOfWeekQualifier::from_week_index(week).ok_or(
                        NormalizeError::InvalidRecurrence {
                            field: "week-of-month",
                            value: u32::from(week),
                        },
                    )?;
                    trigger
                        .day_of_week_recurrences
                        .push(DayOfWeekRecurrence::Qualified { day, qualifier });
                }
            }
        } else {
            for &day in &spec.days_of_week {
                // Backend convention is 1-indexed (1=Sunday).
                trigger
                    .day_of_week_recurrences
                    .push(DayOfWeekRecurrence::Day { day: day + 1 });
            }
        }
    } else if !spec.days_of_month.is_empty() {
        trigger.day_of_month_recurrences.extend(&spec.days_of_month);
    }
    Ok(())
}

/// Synthesizes a fixed-local-time, every-N-days Quartz expression.
///
/// Anchoring the hour and minute in the server's zone keeps the firing
/// time stable across daylight-saving shifts, which an interval trigger
/// cannot do.
fn daily_cron_expression(interval_days: i64, start: DateTime<Utc>, server_zone: Tz) -> String {
    let local = start.with_timezone(&server_zone);
    format!(
        "0 {} {} */{} * ? *",
        local.minute(),
        local.hour(),
        interval_days
    )
}

fn required_start_time(spec: &CalendarTriggerSpec) -> Result<DateTime<Utc>, NormalizeError> {
    spec.start_time
        .ok_or_else(|| NormalizeError::InvalidStartTime {
            reason: "calendar trigger has no start time".to_string(),
        })
}
