//! Error types for schedule request normalization.
//!
//! All failures surface synchronously to the caller as typed errors.
//! Nothing is retried internally, and nothing is silently swallowed apart
//! from the two documented behaviors: fractional-day truncation in
//! simplified-daily mode, and day-of-week taking precedence over
//! day-of-month when both are populated.

use std::fmt;

/// Errors from trigger normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A cron trigger was requested but the backend cannot compile cron
    /// expressions.
    UnsupportedTriggerKind,
    /// The backend's cron compiler rejected the (padded) expression.
    MalformedCronExpression { expression: String, reason: String },
    /// A start time was missing or unusable where one is required.
    InvalidStartTime { reason: String },
    /// The requested timezone identifier is not a known IANA zone.
    InvalidTimeZone { time_zone: String },
    /// A calendar recurrence field was outside its valid range.
    InvalidRecurrence { field: &'static str, value: u32 },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTriggerKind => {
                write!(f, "scheduler backend does not support cron triggers")
            }
            Self::MalformedCronExpression { expression, reason } => {
                write!(f, "malformed cron expression '{expression}': {reason}")
            }
            Self::InvalidStartTime { reason } => {
                write!(f, "invalid start time: {reason}")
            }
            Self::InvalidTimeZone { time_zone } => {
                write!(f, "invalid timezone: {time_zone}")
            }
            Self::InvalidRecurrence { field, value } => {
                write!(f, "invalid {field} recurrence value: {value}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}
