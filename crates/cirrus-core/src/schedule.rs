//! Schedule expressions for trigger rules.
//!
//! A schedule is either a fixed-interval rate or a calendar cron. Hour and
//! minute fields are carried as string-encoded digits and passed through
//! unvalidated — the external scheduler is the authoritative validator, so
//! no constructor here can fail.

use serde::{Deserialize, Serialize};

/// Rate interval used when no schedule is given: every hour.
pub const DEFAULT_RATE_HOURS: u32 = 1;

/// Rate interval for the stock minute-based schedule: every 30 minutes.
pub const DEFAULT_RATE_MINUTES: u32 = 30;

/// Weekday filter covering the working week.
const WEEKDAYS: &str = "MON-FRI";

/// Unit of a rate schedule's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    Minutes,
    Hours,
}

/// A recurring trigger schedule, in rate or cron form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleExpression {
    /// Fire every `interval` units.
    Rate { interval: u32, unit: RateUnit },
    /// Fire at a calendar time, optionally restricted to certain weekdays.
    Cron {
        hour: String,
        minute: String,
        weekdays: Option<String>,
    },
}

/// Every `hours` hours.
pub fn hourly(hours: u32) -> ScheduleExpression {
    ScheduleExpression::Rate {
        interval: hours,
        unit: RateUnit::Hours,
    }
}

/// Every `minutes` minutes.
pub fn minutely(minutes: u32) -> ScheduleExpression {
    ScheduleExpression::Rate {
        interval: minutes,
        unit: RateUnit::Minutes,
    }
}

/// Every day at `hour:minute` (scheduler-local time).
pub fn daily_at(hour: u32, minute: u32) -> ScheduleExpression {
    ScheduleExpression::Cron {
        hour: hour.to_string(),
        minute: minute.to_string(),
        weekdays: None,
    }
}

/// Monday through Friday at `hour:minute`.
pub fn weekdays_at(hour: u32, minute: u32) -> ScheduleExpression {
    ScheduleExpression::Cron {
        hour: hour.to_string(),
        minute: minute.to_string(),
        weekdays: Some(WEEKDAYS.to_string()),
    }
}

impl Default for ScheduleExpression {
    /// The fallback used when a rule is created without a schedule.
    fn default() -> Self {
        hourly(DEFAULT_RATE_HOURS)
    }
}

impl ScheduleExpression {
    /// Render the wire form understood by the external scheduler:
    /// `rate(1 hour)`, `rate(30 minutes)`, or the six-field cron form.
    pub fn expression(&self) -> String {
        match self {
            ScheduleExpression::Rate { interval, unit } => {
                let unit = match (unit, *interval) {
                    (RateUnit::Minutes, 1) => "minute",
                    (RateUnit::Minutes, _) => "minutes",
                    (RateUnit::Hours, 1) => "hour",
                    (RateUnit::Hours, _) => "hours",
                };
                format!("rate({interval} {unit})")
            }
            ScheduleExpression::Cron {
                hour,
                minute,
                weekdays,
            } => match weekdays {
                // Day-of-month and day-of-week cannot both be wildcards.
                Some(days) => format!("cron({minute} {hour} ? * {days} *)"),
                None => format!("cron({minute} {hour} * * ? *)"),
            },
        }
    }
}
