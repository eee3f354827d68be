//! Schedule request normalization for the cadence platform.
//!
//! This crate converts heterogeneous schedule requests into a single
//! normalized recurrence trigger ready for registration with a scheduler
//! backend:
//!
//! - **Trigger-kind resolution**: precedence among run-in-background,
//!   simple, calendar, and cron shapes
//! - **Calendar expansion**: day-of-week x week-of-month cross products,
//!   month/year recurrences, simplified-daily cron synthesis
//! - **Timezone normalization**: field-copy conversion of start dates from
//!   the requester's zone into the server's zone
//! - **Payload classification**: action-id resolution from repository file
//!   extensions

pub mod backend;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod request;
pub mod timezone;
pub mod trigger;

pub use backend::{QuartzBackend, SchedulerBackend};
pub use error::NormalizeError;
pub use normalize::normalize_trigger;
pub use payload::{PayloadKind, resolve_action_id};
pub use request::{JobParameter, LogLevel, ScheduleRequest, TriggerSpec};
pub use timezone::{convert_to_server_time_zone, normalize_start_times};
pub use trigger::{
    CalendarTrigger, CalendarTriggerSpec, CronTrigger, DayOfWeek, DayOfWeekQualifier,
    DayOfWeekRecurrence, NormalizedTrigger, SimpleTrigger,
};
