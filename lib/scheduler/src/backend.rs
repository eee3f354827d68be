//! Scheduler backend seam.
//!
//! Normalization delegates cron-expression compilation to the active
//! backend. Backends advertise whether they can compile cron triggers at
//! all; those that cannot cause cron requests to fail with
//! [`NormalizeError::UnsupportedTriggerKind`].

use crate::error::NormalizeError;
use crate::trigger::CalendarTrigger;

/// Capability surface of the scheduler backend that will register the
/// normalized trigger.
pub trait SchedulerBackend: Send + Sync {
    /// Whether this backend can compile raw cron expressions.
    fn supports_cron_triggers(&self) -> bool;

    /// Compiles a cron expression into a calendar trigger.
    ///
    /// The expression has already been padded to the backend's field count
    /// by the normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MalformedCronExpression`] when the
    /// expression is rejected.
    fn compile_cron_trigger(&self, expression: &str) -> Result<CalendarTrigger, NormalizeError>;
}

/// Quartz-style backend: accepts 6- or 7-field cron expressions and
/// carries them on the trigger verbatim.
///
/// Field-level parsing happens inside the scheduler engine itself; this
/// compiler only enforces the field count the engine requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuartzBackend;

impl SchedulerBackend for QuartzBackend {
    fn supports_cron_triggers(&self) -> bool {
        true
    }

    fn compile_cron_trigger(&self, expression: &str) -> Result<CalendarTrigger, NormalizeError> {
        let fields = expression.split_whitespace().count();
        if !(6..=7).contains(&fields) {
            return Err(NormalizeError::MalformedCronExpression {
                expression: expression.to_string(),
                reason: format!("expected 6 or 7 fields, got {fields}"),
            });
        }
        Ok(CalendarTrigger {
            cron_expression: Some(expression.to_string()),
            ..CalendarTrigger::default()
        })
    }
}
