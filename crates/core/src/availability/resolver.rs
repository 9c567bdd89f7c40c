use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::weekly::WeeklySchedule;
use crate::models::schedule::{ExceptionKind, OpenHours, ScheduleException};

/// Open interval of `date`, or `None` when the provider does not work that day.
///
/// An exception wins over the weekly template and replaces it outright: a
/// closed day has no hours, special hours are used exactly as stored. Without
/// an exception the weekday's template row applies.
pub fn resolve_hours(
    weekly: &WeeklySchedule,
    date: NaiveDate,
    exception: Option<&ScheduleException>,
) -> Option<OpenHours> {
    match exception.map(|e| e.kind) {
        Some(ExceptionKind::Closed) => None,
        Some(ExceptionKind::SpecialHours {
            start_time,
            end_time,
        }) => Some(OpenHours::new(start_time, end_time)),
        None => weekly
            .get(date.weekday())
            .map(|row| OpenHours::new(row.start_time, row.end_time)),
    }
}

/// Indexes exceptions by date. Storage keeps one row per date; should two
/// slip through, the larger id wins as it does for weekly rows.
pub fn index_by_date(exceptions: &[ScheduleException]) -> HashMap<NaiveDate, &ScheduleException> {
    let mut by_date: HashMap<NaiveDate, &ScheduleException> = HashMap::new();
    for exception in exceptions {
        let replace = by_date
            .get(&exception.date)
            .is_none_or(|current| exception.id > current.id);
        if replace {
            by_date.insert(exception.date, exception);
        }
    }
    by_date
}
