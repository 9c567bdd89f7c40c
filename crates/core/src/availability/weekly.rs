use std::collections::HashMap;

use chrono::Weekday;

use crate::models::schedule::WorkSchedule;

/// A provider's effective weekly template: at most one active row per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: HashMap<Weekday, WorkSchedule>,
}

impl WeeklySchedule {
    /// Reduces raw rows to one row per weekday.
    ///
    /// Inactive rows are dropped. When several active rows share a weekday the
    /// one with the largest surrogate id (the most recently created) is kept.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = WorkSchedule>,
    {
        let days = rows
            .into_iter()
            .filter(|row| row.active)
            .fold(HashMap::new(), |mut days: HashMap<Weekday, WorkSchedule>, row| {
                let newer = days
                    .get(&row.weekday)
                    .is_none_or(|current| row.id > current.id);
                if newer {
                    days.insert(row.weekday, row);
                }
                days
            });

        Self { days }
    }

    pub fn get(&self, weekday: Weekday) -> Option<&WorkSchedule> {
        self.days.get(&weekday)
    }

    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.days.contains_key(&weekday)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of weekdays with working hours.
    pub fn len(&self) -> usize {
        self.days.len()
    }
}
