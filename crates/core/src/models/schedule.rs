use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a provider's recurring weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Surrogate id. Among duplicate active rows for the same weekday the
    /// largest id wins.
    pub id: i64,
    pub provider_id: Uuid,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub active: bool,
}

/// What a date-level exception does to the provider's day.
///
/// `Closed` carries no times at all, so a closed day can never leak stale
/// opening hours into slot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExceptionKind {
    Closed,
    SpecialHours {
        start_time: NaiveTime,
        end_time: NaiveTime,
    },
}

impl ExceptionKind {
    pub const CLOSED: &'static str = "closed";
    pub const SPECIAL_HOURS: &'static str = "special_hours";

    /// Storage label of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::Closed => Self::CLOSED,
            ExceptionKind::SpecialHours { .. } => Self::SPECIAL_HOURS,
        }
    }

    /// Opening hours carried by the variant, if any.
    pub fn hours(&self) -> Option<(NaiveTime, NaiveTime)> {
        match *self {
            ExceptionKind::Closed => None,
            ExceptionKind::SpecialHours {
                start_time,
                end_time,
            } => Some((start_time, end_time)),
        }
    }
}

/// Override of the weekly template for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    pub id: i64,
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub kind: ExceptionKind,
    pub reason: Option<String>,
}

/// The single open interval `[start, end)` of a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl OpenHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// True when `[start, end)` lies completely inside these hours.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start <= start && end <= self.end
    }
}
