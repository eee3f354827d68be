//! Timezone normalization of trigger start dates.
//!
//! The scheduler engine always fires in its own zone. A start time typed
//! as "9:00 AM" by a requester in another zone must execute at 9:00 AM
//! server-local, so start dates are converted by copying calendar fields
//! across zones rather than preserving the instant.

use crate::error::NormalizeError;
use crate::request::{ScheduleRequest, TriggerSpec};
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Reinterprets the wall-clock fields of `instant`, as observed in the
/// requester's zone, in the server's zone.
///
/// Identity when the two zone names match (case-insensitive). Wall-clock
/// times that fall in a daylight-saving gap or overlap in the server's
/// zone resolve to the earliest valid instant.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidTimeZone`] when `requested_zone` is
/// not a known IANA identifier.
pub fn convert_to_server_time_zone(
    instant: DateTime<Utc>,
    requested_zone: &str,
    server_zone: Tz,
) -> Result<DateTime<Utc>, NormalizeError> {
    if server_zone.name().eq_ignore_ascii_case(requested_zone) {
        return Ok(instant);
    }

    let zone: Tz = requested_zone
        .parse()
        .map_err(|_| NormalizeError::InvalidTimeZone {
            time_zone: requested_zone.to_string(),
        })?;

    let wall = instant.with_timezone(&zone).naive_local();
    let adapted = server_zone
        .from_local_datetime(&wall)
        .earliest()
        .or_else(|| {
            // Wall-clock time inside a spring-forward gap; land just past it.
            server_zone
                .from_local_datetime(&(wall + Duration::hours(1)))
                .earliest()
        })
        .ok_or_else(|| NormalizeError::InvalidStartTime {
            reason: format!("{wall} has no valid instant in {}", server_zone.name()),
        })?
        .with_timezone(&Utc);

    warn!(
        original = %instant,
        requested_zone,
        adapted = %adapted,
        server_zone = server_zone.name(),
        "adapted start date to server timezone"
    );
    Ok(adapted)
}

/// Applies [`convert_to_server_time_zone`] to the start time of whichever
/// trigger variant the request carries.
///
/// Requests without a requested timezone, without a trigger, or with an
/// unset start time are left untouched.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidTimeZone`] when the request names an
/// unknown zone.
pub fn normalize_start_times(
    request: &mut ScheduleRequest,
    server_zone: Tz,
) -> Result<(), NormalizeError> {
    let Some(requested_zone) = request.time_zone.clone() else {
        return Ok(());
    };

    match &mut request.trigger {
        Some(TriggerSpec::Simple(simple)) => {
            if let Some(start) = simple.start_time {
                simple.start_time =
                    Some(convert_to_server_time_zone(start, &requested_zone, server_zone)?);
            }
        }
        Some(TriggerSpec::Calendar(spec)) => {
            if let Some(start) = spec.start_time {
                spec.start_time =
                    Some(convert_to_server_time_zone(start, &requested_zone, server_zone)?);
            }
        }
        Some(TriggerSpec::Cron(cron)) => {
            if let Some(start) = cron.start_time {
                cron.start_time =
                    Some(convert_to_server_time_zone(start, &requested_zone, server_zone)?);
            }
        }
        None => {}
    }
    Ok(())
}
