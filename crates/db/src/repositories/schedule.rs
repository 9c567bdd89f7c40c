use crate::models::{DbScheduleException, DbWorkSchedule};
use marketplace_core::models::schedule::ExceptionKind;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Weekly schedule

/// Active weekly rows of a provider, oldest first. Duplicates per weekday are
/// returned as stored; the engine decides which one applies.
pub async fn get_active_work_schedules(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
) -> Result<Vec<DbWorkSchedule>> {
    let rows = sqlx::query_as::<_, DbWorkSchedule>(
        r#"
        SELECT id, provider_id, weekday, start_time, end_time, active
        FROM work_schedules
        WHERE provider_id = $1 AND active = TRUE
        ORDER BY weekday ASC, id ASC
        "#,
    )
    .bind(provider_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Provider {} has {} active weekly rows", provider_id, rows.len());
    Ok(rows)
}

pub async fn create_work_schedule(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    weekday: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbWorkSchedule> {
    let row = sqlx::query_as::<_, DbWorkSchedule>(
        r#"
        INSERT INTO work_schedules (provider_id, weekday, start_time, end_time, active)
        VALUES ($1, $2, $3, $4, TRUE)
        RETURNING id, provider_id, weekday, start_time, end_time, active
        "#,
    )
    .bind(provider_id)
    .bind(weekday)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

// Schedule exceptions

pub async fn get_schedule_exceptions(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DbScheduleException>> {
    let rows = sqlx::query_as::<_, DbScheduleException>(
        r#"
        SELECT id, provider_id, date, kind, start_time, end_time, reason
        FROM schedule_exceptions
        WHERE provider_id = $1 AND date BETWEEN $2 AND $3
        ORDER BY date ASC
        "#,
    )
    .bind(provider_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Provider {} has {} exceptions between {} and {}",
        provider_id,
        rows.len(),
        from,
        to
    );
    Ok(rows)
}

pub async fn create_schedule_exception(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
    kind: ExceptionKind,
    reason: Option<&str>,
) -> Result<DbScheduleException> {
    let hours = kind.hours();
    let row = sqlx::query_as::<_, DbScheduleException>(
        r#"
        INSERT INTO schedule_exceptions (provider_id, date, kind, start_time, end_time, reason)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, provider_id, date, kind, start_time, end_time, reason
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .bind(kind.as_str())
    .bind(hours.map(|(start, _)| start))
    .bind(hours.map(|(_, end)| end))
    .bind(reason)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
