use crate::models::DbService;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    tracing::debug!("Getting service by id: {}", id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, provider_id, name, duration_minutes, active, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn create_service(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    name: &str,
    duration_minutes: i32,
) -> Result<DbService> {
    let id = Uuid::new_v4();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, provider_id, name, duration_minutes, active)
        VALUES ($1, $2, $3, $4, TRUE)
        RETURNING id, provider_id, name, duration_minutes, active, created_at
        "#,
    )
    .bind(id)
    .bind(provider_id)
    .bind(name)
    .bind(duration_minutes)
    .fetch_one(pool)
    .await?;

    Ok(service)
}
