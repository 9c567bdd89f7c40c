//! Row types as stored in PostgreSQL and their conversion into domain models.
//!
//! Conversions fail on rows the engine cannot interpret (out-of-range weekday,
//! unknown exception kind, special hours without times). Such rows surface as
//! data-access failures rather than being silently skipped.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use eyre::{eyre, Report};
use marketplace_core::models::{
    booking::{Booking, BookingStatus},
    schedule::{ExceptionKind, ScheduleException, WorkSchedule},
    service::Service,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkSchedule {
    pub id: i64,
    pub provider_id: Uuid,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleException {
    pub id: i64,
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub kind: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbService> for Service {
    type Error = Report;

    fn try_from(row: DbService) -> Result<Self, Self::Error> {
        let duration_minutes = u32::try_from(row.duration_minutes)
            .map_err(|_| eyre!("Service {} has negative duration {}", row.id, row.duration_minutes))?;

        Ok(Service {
            id: row.id,
            provider_id: row.provider_id,
            name: row.name,
            duration_minutes,
            active: row.active,
        })
    }
}

impl TryFrom<DbWorkSchedule> for WorkSchedule {
    type Error = Report;

    fn try_from(row: DbWorkSchedule) -> Result<Self, Self::Error> {
        // 0 = Monday ... 6 = Sunday
        let weekday = u8::try_from(row.weekday)
            .ok()
            .and_then(|n| Weekday::try_from(n).ok())
            .ok_or_else(|| eyre!("Work schedule {} has invalid weekday {}", row.id, row.weekday))?;

        Ok(WorkSchedule {
            id: row.id,
            provider_id: row.provider_id,
            weekday,
            start_time: row.start_time,
            end_time: row.end_time,
            active: row.active,
        })
    }
}

impl TryFrom<DbScheduleException> for ScheduleException {
    type Error = Report;

    fn try_from(row: DbScheduleException) -> Result<Self, Self::Error> {
        let kind = match (row.kind.as_str(), row.start_time, row.end_time) {
            (ExceptionKind::CLOSED, _, _) => ExceptionKind::Closed,
            (ExceptionKind::SPECIAL_HOURS, Some(start_time), Some(end_time)) => {
                ExceptionKind::SpecialHours {
                    start_time,
                    end_time,
                }
            }
            (ExceptionKind::SPECIAL_HOURS, _, _) => {
                return Err(eyre!(
                    "Schedule exception {} has special hours without start or end time",
                    row.id
                ));
            }
            (other, _, _) => {
                return Err(eyre!(
                    "Schedule exception {} has unknown kind '{}'",
                    row.id,
                    other
                ));
            }
        };

        Ok(ScheduleException {
            id: row.id,
            provider_id: row.provider_id,
            date: row.date,
            kind,
            reason: row.reason,
        })
    }
}

impl TryFrom<DbBooking> for Booking {
    type Error = Report;

    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        let status: BookingStatus = row.status.parse().map_err(|e: String| eyre!("Booking {}: {}", row.id, e))?;

        Ok(Booking {
            id: row.id,
            service_id: row.service_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
        })
    }
}

/// Converts a batch of rows, failing on the first one that does not convert.
pub fn convert_rows<R, T>(rows: Vec<R>) -> eyre::Result<Vec<T>>
where
    T: TryFrom<R, Error = Report>,
{
    rows.into_iter().map(T::try_from).collect()
}
