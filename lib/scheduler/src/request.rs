//! Schedule request value object.
//!
//! Requests are constructed by the API layer, passed once through
//! normalization, and discarded. The original wire format enforced
//! trigger mutual exclusivity with cascading setters; here the three
//! shapes are a sum type, with `None` meaning "run in background".

use crate::trigger::{CalendarTriggerSpec, CronTrigger, SimpleTrigger};
use cadence_core::JobId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exactly one trigger shape per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerSpec {
    /// Fixed-interval trigger.
    Simple(SimpleTrigger),
    /// Calendar-based trigger.
    Calendar(CalendarTriggerSpec),
    /// Raw cron expression trigger.
    Cron(CronTrigger),
}

/// A named job parameter, ordered as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: serde_json::Value,
}

/// Execution log verbosity requested for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Nothing,
    Error,
    Minimal,
    #[default]
    Basic,
    Detailed,
    Debug,
    RowLevel,
}

/// A request to schedule a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Human-readable job name.
    pub job_name: String,
    /// Existing job ID when rescheduling, unset for new jobs.
    pub job_id: Option<JobId>,
    /// Target action identifier; resolvable from the input file extension
    /// via [`crate::payload::resolve_action_id`].
    pub action_id: Option<String>,
    /// Repository path of the content the job runs.
    pub input_file: Option<String>,
    /// Repository path where job output lands.
    pub output_file: Option<String>,
    /// The trigger shape, or `None` for run-in-background.
    pub trigger: Option<TriggerSpec>,
    /// Ordered named parameters for the job.
    pub job_parameters: Vec<JobParameter>,
    /// Extra string parameters passed through to the job payload.
    pub pdi_parameters: HashMap<String, String>,
    /// Job duration in milliseconds.
    pub duration_ms: i64,
    /// IANA timezone identifier the requester typed start times in.
    pub time_zone: Option<String>,
    /// Run the job in safe mode.
    pub safe_mode: bool,
    /// Gather execution metrics while the job runs.
    pub gathering_metrics: bool,
    /// Execution log verbosity.
    pub log_level: LogLevel,
}

impl ScheduleRequest {
    /// Creates a request with the given job name and no trigger set.
    #[must_use]
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            ..Self::default()
        }
    }

    /// Sets the trigger shape.
    #[must_use]
    pub fn with_trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Sets the requester's timezone.
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Sets the job duration in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}
