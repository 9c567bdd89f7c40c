use crate::models::DbBooking;
use chrono::NaiveDate;
use eyre::Result;
use marketplace_core::models::booking::{BookingStatus, NewBooking};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_confirmed_bookings(
    pool: &Pool<Postgres>,
    service_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, service_id, date, start_time, end_time, status, created_at
        FROM bookings
        WHERE service_id = $1 AND status = $2 AND date BETWEEN $3 AND $4
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(service_id)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Inserts `booking` as confirmed unless it overlaps a confirmed booking of
/// the same service and date. Returns `None` on overlap.
///
/// The service row is locked for the duration of the transaction so that
/// concurrent inserts for one service are serialized between check and insert.
pub async fn insert_booking_if_free(
    pool: &Pool<Postgres>,
    booking: &NewBooking,
) -> Result<Option<DbBooking>> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT id FROM services WHERE id = $1 FOR UPDATE")
        .bind(booking.service_id)
        .fetch_optional(&mut *tx)
        .await?;

    let conflicting = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM bookings
            WHERE service_id = $1
              AND date = $2
              AND status = $3
              AND start_time < $5
              AND end_time > $4
        );
        "#,
    )
    .bind(booking.service_id)
    .bind(booking.date)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(booking.start_time)
    .bind(booking.end_time)
    .fetch_one(&mut *tx)
    .await?;

    if conflicting {
        tx.rollback().await?;
        return Ok(None);
    }

    let created = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, service_id, date, start_time, end_time, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, service_id, date, start_time, end_time, status, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(booking.service_id)
    .bind(booking.date)
    .bind(booking.start_time)
    .bind(booking.end_time)
    .bind(BookingStatus::Confirmed.as_str())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(created))
}
